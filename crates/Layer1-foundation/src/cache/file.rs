//! File-backed cache store.
//!
//! Persists one pretty-printed JSON file per key under a base directory, so
//! a compiled configuration written by one process run is served from disk
//! by the next. Each file records when it was written alongside the config.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cache::validate_key;
use crate::core::traits::CacheStore;
use crate::core::types::{CacheEntry, CompiledConfig};
use crate::error::CacheError;

/// On-disk record for a single cache entry.
#[derive(Debug, Serialize, Deserialize)]
struct StoredEntry {
    saved_at: DateTime<Utc>,
    config: CompiledConfig,
}

/// File-per-key `CacheStore` under a base directory.
///
/// Layout: `<base_dir>/<key>.json`. Keys have already passed
/// [`validate_key`](crate::cache::validate_key) before touching the
/// filesystem, so they never contain path separators.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Store under the platform cache directory (`<cache_dir>/<app>/`).
    pub fn for_app(app: &str) -> Result<Self, CacheError> {
        let dir = dirs::cache_dir().ok_or(CacheError::NoBaseDir)?.join(app);
        Ok(Self::new(dir))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }

    fn ensure_dir(&self) -> Result<(), CacheError> {
        if !self.base_dir.exists() {
            fs::create_dir_all(&self.base_dir)
                .map_err(|e| CacheError::io(&self.base_dir, e))?;
        }
        Ok(())
    }
}

impl CacheStore for FileStore {
    fn get(&self, key: &str) -> Result<CacheEntry, CacheError> {
        validate_key(key)?;
        let path = self.entry_path(key);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(CacheEntry::miss(key));
            }
            Err(e) => return Err(CacheError::io(path, e)),
        };

        match serde_json::from_str::<StoredEntry>(&content) {
            Ok(stored) => Ok(CacheEntry::hit(key, stored.config)),
            Err(e) => {
                // 손상된 엔트리는 미스로 처리하고 다음 저장이 덮어쓴다
                warn!("Ignoring corrupt cache entry {}: {}", path.display(), e);
                Ok(CacheEntry::miss(key))
            }
        }
    }

    fn save(&self, entry: CacheEntry) -> Result<(), CacheError> {
        validate_key(entry.key())?;
        let (key, value) = entry.into_parts();
        let path = self.entry_path(&key);

        match value {
            Some(config) => {
                self.ensure_dir()?;
                let stored = StoredEntry {
                    saved_at: Utc::now(),
                    config,
                };
                let content = serde_json::to_string_pretty(&stored)?;
                fs::write(&path, content).map_err(|e| CacheError::io(path, e))
            }
            None => {
                if path.exists() {
                    fs::remove_file(&path).map_err(|e| CacheError::io(path, e))?;
                }
                Ok(())
            }
        }
    }
}
