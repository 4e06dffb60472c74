//! Persistent on-disk cache of marketplace listings (24h TTL).

use std::{
    fs,
    path::PathBuf,
    sync::OnceLock,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};

use crate::domain::CarbonOffset;
use crate::util::version::APP_DIR_NAME;

const OFFSETS_CACHE_FILENAME: &str = "offsets_cache.json";

pub const OFFSETS_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffsetsCache {
    /// Unix timestamp (seconds) when this cache was created.
    pub cached_at: u64,
    pub offsets: Vec<CarbonOffset>,
}

impl OffsetsCache {
    pub fn new(offsets: Vec<CarbonOffset>) -> Self {
        Self {
            cached_at: unix_now(),
            offsets,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.age() > OFFSETS_CACHE_TTL
    }

    pub fn age(&self) -> Duration {
        Duration::from_secs(unix_now().saturating_sub(self.cached_at))
    }

    pub fn fetched_at(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(self.cached_at)
    }

    /// Human-readable age string.
    pub fn age_string(&self) -> String {
        age_string(self.age())
    }
}

pub fn age_string(age: Duration) -> String {
    let secs = age.as_secs();
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86400 {
        format!("{}h", secs / 3600)
    } else {
        format!("{}d", secs / 86400)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn offsets_cache_path() -> PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        let base = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME);
        let _ = fs::create_dir_all(&base);
        base.join(OFFSETS_CACHE_FILENAME)
    })
    .clone()
}

/// Loads the cache if it exists and has not expired.
pub fn load_offsets_cache() -> Option<OffsetsCache> {
    let path = offsets_cache_path();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no offsets cache");
        return None;
    }

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(error) => {
            tracing::warn!(%error, "failed to read offsets cache");
            return None;
        }
    };
    parse_offsets_cache(&content)
}

fn parse_offsets_cache(content: &str) -> Option<OffsetsCache> {
    match serde_json::from_str::<OffsetsCache>(content) {
        Ok(cache) if cache.is_expired() => {
            tracing::debug!(age = %cache.age_string(), "offsets cache expired");
            None
        }
        Ok(cache) => {
            tracing::debug!(
                offsets = cache.offsets.len(),
                age = %cache.age_string(),
                "loaded offsets cache"
            );
            Some(cache)
        }
        Err(error) => {
            tracing::warn!(%error, "failed to parse offsets cache");
            None
        }
    }
}

pub fn save_offsets_cache(cache: &OffsetsCache) -> Result<(), std::io::Error> {
    let path = offsets_cache_path();
    let content = serde_json::to_string(cache)?;
    fs::write(&path, content)?;
    tracing::debug!(offsets = cache.offsets.len(), path = %path.display(), "saved offsets cache");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::marketplace::sample_offsets;

    #[test]
    fn fresh_cache_parses_back() {
        let cache = OffsetsCache::new(sample_offsets());
        let text = serde_json::to_string(&cache).expect("encode");
        let parsed = parse_offsets_cache(&text).expect("fresh cache");
        assert_eq!(parsed, cache);
        assert!(!parsed.is_expired());
    }

    #[test]
    fn cache_older_than_a_day_is_ignored() {
        let mut cache = OffsetsCache::new(sample_offsets());
        cache.cached_at = cache.cached_at.saturating_sub(OFFSETS_CACHE_TTL.as_secs() + 60);
        assert!(cache.is_expired());
        let text = serde_json::to_string(&cache).expect("encode");
        assert!(parse_offsets_cache(&text).is_none());
    }

    #[test]
    fn corrupt_cache_is_ignored() {
        assert!(parse_offsets_cache("{not json").is_none());
    }

    #[test]
    fn age_string_units() {
        assert_eq!(age_string(Duration::from_secs(42)), "42s");
        assert_eq!(age_string(Duration::from_secs(120)), "2m");
        assert_eq!(age_string(Duration::from_secs(7200)), "2h");
        assert_eq!(age_string(Duration::from_secs(3 * 86400)), "3d");
    }
}
