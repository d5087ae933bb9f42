//! Pointer document and its JSON file.
//!
//! Format:
//! ```json
//! {
//!   "latest_version": "v3",
//!   "development_version": "v3",
//!   "production_version": ["v1", "v2"]
//! }
//! ```
//!
//! Every write rewrites the whole file. There is no temp-file rename and no
//! lock, so a crash mid-write or a second writer can lose an update.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::VersionResult;

/// File name of the pointer document inside the storage root.
pub const POINTER_FILE_NAME: &str = "version.json";

/// Latest, development and production version ids.
///
/// All three keys are required when parsing. Any other keys found in the
/// file are kept and written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerDocument {
    #[serde(rename = "latest_version")]
    pub latest: String,

    /// "" when no development version is set
    #[serde(rename = "development_version")]
    pub development: String,

    /// In promotion order, no duplicates
    #[serde(rename = "production_version")]
    pub production: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PointerDocument {
    /// Document created by a latest-only update.
    pub fn with_latest(version_id: &str) -> Self {
        Self {
            latest: version_id.to_string(),
            development: String::new(),
            production: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Document created by a development update.
    pub fn with_development(version_id: &str) -> Self {
        Self {
            latest: version_id.to_string(),
            development: version_id.to_string(),
            production: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Document created by a production update.
    pub fn with_production(version_id: &str) -> Self {
        Self {
            latest: version_id.to_string(),
            development: String::new(),
            production: vec![version_id.to_string()],
            extra: Map::new(),
        }
    }

    pub fn is_production(&self, version_id: &str) -> bool {
        self.production.iter().any(|id| id == version_id)
    }

    /// Append to the production list. Returns false if already present.
    pub fn add_production(&mut self, version_id: &str) -> bool {
        if self.is_production(version_id) {
            return false;
        }
        self.production.push(version_id.to_string());
        true
    }

    /// Remove one occurrence from the production list. Returns false if absent.
    pub fn remove_production(&mut self, version_id: &str) -> bool {
        match self.production.iter().position(|id| id == version_id) {
            Some(idx) => {
                self.production.remove(idx);
                true
            }
            None => false,
        }
    }
}

/// Reads and writes the pointer document at a fixed path.
#[derive(Debug, Clone)]
pub struct PointerFile {
    path: PathBuf,
    pretty: bool,
}

impl PointerFile {
    /// Pointer file at `<storage_root>/version.json`.
    pub fn new(storage_root: &Path) -> Self {
        Self {
            path: storage_root.join(POINTER_FILE_NAME),
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the document, `None` if the file does not exist.
    pub fn load(&self) -> VersionResult<Option<PointerDocument>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Overwrite the file with `document`, creating parent directories.
    pub fn save(&self, document: &PointerDocument) -> VersionResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = if self.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };

        fs::write(&self.path, content)?;
        Ok(())
    }
}
