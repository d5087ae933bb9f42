//! Version pointer store.
//!
//! Tracks which version is latest, which is the development version, and
//! which versions are promoted to production. Each operation is one full
//! read-modify-write of the pointer file.
//!
//! Setters create the file with defaults when it is absent. Getters fail with
//! [`VersionError::PointerFileNotFound`] instead of substituting defaults.
//!
//! Re-promoting a production version is not an error: the store reports it
//! through its [`NoticeLog`] and leaves the list unchanged. Removing a version
//! that is not in production is an error, including when no pointer file
//! exists yet.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::observability::{JsonNoticeLog, NoticeLog};

use super::errors::{VersionError, VersionResult};
use super::pointer::{PointerDocument, PointerFile};

pub struct VersionPointerStore {
    file: PointerFile,
    notices: Arc<dyn NoticeLog>,
}

impl VersionPointerStore {
    /// Store rooted at `storage_root`, reporting notices as JSON log lines.
    pub fn new(storage_root: &Path) -> Self {
        Self::with_notice_log(storage_root, Arc::new(JsonNoticeLog::new()))
    }

    pub fn with_notice_log(storage_root: &Path, notices: Arc<dyn NoticeLog>) -> Self {
        Self {
            file: PointerFile::new(storage_root),
            notices,
        }
    }

    /// Write the pointer file pretty-printed.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.file = self.file.pretty(pretty);
        self
    }

    pub fn pointer_path(&self) -> &Path {
        self.file.path()
    }

    /// Whether any setter has created the pointer file yet.
    pub fn is_initialized(&self) -> bool {
        self.file.exists()
    }

    /// Full pointer document.
    pub fn document(&self) -> VersionResult<PointerDocument> {
        self.file
            .load()?
            .ok_or_else(|| VersionError::pointer_file_not_found(self.file.path()))
    }

    pub fn set_latest(&self, version_id: &str) -> VersionResult<()> {
        let document = match self.file.load()? {
            Some(mut document) => {
                document.latest = version_id.to_string();
                document
            }
            None => PointerDocument::with_latest(version_id),
        };

        self.file.save(&document)
    }

    pub fn get_latest(&self) -> VersionResult<String> {
        Ok(self.document()?.latest)
    }

    /// Set the development version. Also moves latest.
    pub fn set_development(&self, version_id: &str) -> VersionResult<()> {
        let document = match self.file.load()? {
            Some(mut document) => {
                document.development = version_id.to_string();
                document.latest = version_id.to_string();
                document
            }
            None => PointerDocument::with_development(version_id),
        };

        self.file.save(&document)
    }

    pub fn get_development(&self) -> VersionResult<String> {
        Ok(self.document()?.development)
    }

    /// Promote a version to production. Also moves latest.
    pub fn set_production(&self, version_id: &str) -> VersionResult<()> {
        let document = match self.file.load()? {
            Some(mut document) => {
                document.latest = version_id.to_string();
                if !document.add_production(version_id) {
                    self.notices.info(&format!(
                        "Version {} is already a production version.",
                        version_id
                    ));
                }
                document
            }
            None => PointerDocument::with_production(version_id),
        };

        self.file.save(&document)
    }

    /// Production versions in promotion order.
    pub fn get_production(&self) -> VersionResult<Vec<String>> {
        Ok(self.document()?.production)
    }

    pub fn is_production(&self, version_id: &str) -> VersionResult<bool> {
        Ok(self
            .file
            .load()?
            .map_or(false, |document| document.is_production(version_id)))
    }

    /// Remove a version from production. Other pointers are left as they are.
    pub fn remove_production(&self, version_id: &str) -> VersionResult<()> {
        let mut document = self
            .file
            .load()?
            .ok_or_else(|| VersionError::not_a_production_version(version_id))?;

        if !document.remove_production(version_id) {
            return Err(VersionError::not_a_production_version(version_id));
        }

        self.file.save(&document)
    }
}

impl fmt::Debug for VersionPointerStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionPointerStore")
            .field("pointer_path", &self.file.path())
            .finish()
    }
}
