//! Small JSON state file in the platform config directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::domain::app_state::PersistedState;

const STATE_FILE: &str = "state.json";

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("no config directory available on this platform")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

fn state_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "CEOE", "CarbonDashboard").map(|dirs| dirs.config_dir().join(STATE_FILE))
}

pub fn load_persisted_state() -> Option<PersistedState> {
    state_path().and_then(|path| load_from(&path))
}

pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
    let path = state_path().ok_or(PersistSaveError::StorageUnavailable)?;
    save_to(&path, state)
}

/// Missing files are normal on first launch; corrupt ones are logged and ignored.
fn load_from(path: &Path) -> Option<PersistedState> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return None,
        Err(error) => {
            tracing::warn!(%error, path = %path.display(), "cannot read state file");
            return None;
        }
    };
    serde_json::from_str(&data)
        .inspect_err(|error| {
            tracing::warn!(%error, path = %path.display(), "ignoring unreadable state file");
        })
        .ok()
}

fn save_to(path: &Path, state: &PersistedState) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(state)?)?;
    tracing::debug!(path = %path.display(), "state saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("ceoe-state-{}", uuid::Uuid::new_v4()))
            .join(STATE_FILE)
    }

    #[test]
    fn older_state_files_fill_defaults() {
        let state: PersistedState =
            serde_json::from_str(r#"{"last_email":"ops@example.com"}"#).expect("decode");
        assert_eq!(state.refresh_token, None);
        assert!(!state.hero_dismissed);
        assert_eq!(state.last_email.as_deref(), Some("ops@example.com"));
    }

    #[test]
    fn saved_state_loads_back() {
        let path = scratch_path();
        let state = PersistedState {
            refresh_token: Some("r-9".into()),
            last_email: Some("ops@example.com".into()),
            hero_dismissed: true,
        };
        save_to(&path, &state).expect("save");
        assert_eq!(load_from(&path), Some(state));
        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn missing_or_corrupt_files_load_nothing() {
        let path = scratch_path();
        assert_eq!(load_from(&path), None);
        save_to(&path, &PersistedState::default()).expect("save");
        fs::write(&path, "{ not json").expect("overwrite");
        assert_eq!(load_from(&path), None);
        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }
}
