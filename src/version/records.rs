//! One JSON file per version, stored next to the pointer file.
//!
//! Layout:
//! ```text
//! <storage_root>/
//!   version.json        pointer document (no "id" key)
//!   <version_id>.json   one record per version
//! ```
//!
//! [`VersionRecordStore::load_all`] only decodes files whose top-level object
//! has an `id` key, which is what keeps the pointer document out of listings.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::entity::{VersionCodec, VersionEntity, VersionRecord};
use super::errors::{VersionError, VersionResult};
use super::pointer::POINTER_FILE_NAME;
use super::serializer::ConfigSerializer;

const RECORD_EXTENSION: &str = "json";

pub struct VersionRecordStore<S> {
    root: PathBuf,
    codec: VersionCodec<S>,
    pretty: bool,
}

impl<S: ConfigSerializer> VersionRecordStore<S> {
    pub fn new(storage_root: &Path, serializer: S) -> Self {
        Self {
            root: storage_root.to_path_buf(),
            codec: VersionCodec::new(serializer),
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn codec(&self) -> &VersionCodec<S> {
        &self.codec
    }

    /// Path of the record file for `version_id`.
    pub fn record_path(&self, version_id: &str) -> VersionResult<PathBuf> {
        validate_id(version_id)?;
        Ok(self.root.join(format!("{}.{}", version_id, RECORD_EXTENSION)))
    }

    /// Write (or overwrite) the record of `entity`.
    pub fn save(&self, entity: &VersionEntity<S::Config>) -> VersionResult<()> {
        let path = self.record_path(&entity.id)?;
        let record = self.codec.to_record(entity)?;

        let content = if self.pretty {
            serde_json::to_string_pretty(&record)?
        } else {
            serde_json::to_string(&record)?
        };

        fs::create_dir_all(&self.root)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn exists(&self, version_id: &str) -> VersionResult<bool> {
        Ok(self.record_path(version_id)?.is_file())
    }

    pub fn load(&self, version_id: &str) -> VersionResult<VersionEntity<S::Config>> {
        let path = self.record_path(version_id)?;

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(VersionError::RecordNotFound(version_id.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let record: VersionRecord = serde_json::from_str(&content)?;
        self.codec.from_record(record)
    }

    /// Every stored version, oldest first (ties broken by id).
    pub fn load_all(&self) -> VersionResult<Vec<VersionEntity<S::Config>>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut versions = Vec::new();
        for entry in entries {
            let path = entry?.path();

            if !path.is_file() || path.extension().map_or(true, |ext| ext != RECORD_EXTENSION) {
                continue;
            }

            let value: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
            if value.get("id").is_none() {
                continue;
            }

            let record: VersionRecord = serde_json::from_value(value)?;
            versions.push(self.codec.from_record(record)?);
        }

        versions.sort_by(|a, b| {
            a.creation_date
                .cmp(&b.creation_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(versions)
    }

    pub fn delete(&self, version_id: &str) -> VersionResult<()> {
        let path = self.record_path(version_id)?;

        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(VersionError::RecordNotFound(version_id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn validate_id(version_id: &str) -> VersionResult<()> {
    let pointer_stem = POINTER_FILE_NAME.trim_end_matches(".json");

    if version_id.is_empty()
        || version_id.starts_with('.')
        || version_id.contains(|c: char| c == '/' || c == '\\')
        || version_id == pointer_stem
    {
        return Err(VersionError::InvalidVersionId(version_id.to_string()));
    }
    Ok(())
}
