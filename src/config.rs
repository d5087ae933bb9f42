//! Store configuration
//!
//! ```json
//! {
//!   "storage_folder": ".data",
//!   "pretty_json": false
//! }
//! ```
//!
//! Version files live under `<storage_folder>/version`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sub-directory of the storage folder that holds version files.
pub const VERSION_DIR_NAME: &str = "version";

pub type StoreConfigResult<T> = Result<T, StoreConfigError>;

#[derive(Debug, Error)]
pub enum StoreConfigError {
    #[error("Failed to read config '{}': {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Root folder for all persisted data (required)
    pub storage_folder: String,

    /// Pretty-print written JSON (optional, default false)
    #[serde(default)]
    pub pretty_json: bool,
}

impl StoreConfig {
    pub fn new(storage_folder: impl Into<String>) -> Self {
        Self {
            storage_folder: storage_folder.into(),
            pretty_json: false,
        }
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> StoreConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| StoreConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: StoreConfig = serde_json::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> StoreConfigResult<()> {
        if self.storage_folder.trim().is_empty() {
            return Err(StoreConfigError::Invalid(
                "storage_folder must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Directory holding `version.json` and the version records.
    pub fn storage_root(&self) -> PathBuf {
        Path::new(&self.storage_folder).join(VERSION_DIR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_with_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("versionstore.json");
        fs::write(&path, r#"{"storage_folder": "/srv/app/.data"}"#).unwrap();

        let config = StoreConfig::load(&path).unwrap();

        assert!(!config.pretty_json);
        assert_eq!(config.storage_root(), PathBuf::from("/srv/app/.data/version"));
    }

    #[test]
    fn test_missing_storage_folder() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("versionstore.json");
        fs::write(&path, r#"{"pretty_json": true}"#).unwrap();

        assert!(matches!(StoreConfig::load(&path), Err(StoreConfigError::Parse(_))));
    }

    #[test]
    fn test_empty_storage_folder() {
        assert!(matches!(
            StoreConfig::new("  ").validate(),
            Err(StoreConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = StoreConfig::load(&tmp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, StoreConfigError::Read { .. }));
    }
}
