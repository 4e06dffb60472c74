//! Writes exported files to the user's download directory.

use std::{fs, io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("invalid export file name: {0:?}")]
    InvalidName(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Download dir, or the working directory when the platform has none.
pub fn export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Writes `contents` to `file_name` inside [`export_dir`] and returns the full path.
pub fn write_export(file_name: &str, contents: &str) -> Result<PathBuf, ExportError> {
    write_export_to(&export_dir(), file_name, contents)
}

fn write_export_to(
    dir: &std::path::Path,
    file_name: &str,
    contents: &str,
) -> Result<PathBuf, ExportError> {
    let file_name = sanitize_file_name(file_name)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, contents)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "export written");
    Ok(path)
}

/// Rejects names that would escape the target directory.
fn sanitize_file_name(file_name: &str) -> Result<String, ExportError> {
    let cleaned: String = file_name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() || trimmed.chars().all(|c| c == '.') {
        return Err(ExportError::InvalidName(file_name.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_are_replaced() {
        assert_eq!(
            sanitize_file_name("Q1/Q2_audit_report.csv").expect("valid"),
            "Q1_Q2_audit_report.csv"
        );
        assert_eq!(sanitize_file_name("a:b").expect("valid"), "a_b");
    }

    #[test]
    fn dot_only_names_are_rejected() {
        assert!(matches!(
            sanitize_file_name(".."),
            Err(ExportError::InvalidName(_))
        ));
        assert!(matches!(
            sanitize_file_name("   "),
            Err(ExportError::InvalidName(_))
        ));
    }

    #[test]
    fn writes_into_target_directory() {
        let dir = std::env::temp_dir().join(format!("ceoe-export-{}", uuid::Uuid::new_v4()));
        let path = write_export_to(&dir, "report.csv", "a,b\n1,2").expect("write");
        assert_eq!(path, dir.join("report.csv"));
        assert_eq!(fs::read_to_string(&path).expect("read"), "a,b\n1,2");
        let _ = fs::remove_dir_all(&dir);
    }
}
