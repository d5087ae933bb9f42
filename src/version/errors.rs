//! # Version Errors
//!
//! Error types for version records and the version pointer file.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for version operations
pub type VersionResult<T> = Result<T, VersionError>;

/// Boxed error raised by a [`ConfigSerializer`](super::ConfigSerializer).
pub type ConfigError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Version store errors
#[derive(Debug, Error)]
pub enum VersionError {
    /// A pointer getter ran before any setter created the pointer file
    #[error("Version pointer file not found: {}", .path.display())]
    PointerFileNotFound { path: PathBuf },

    /// Removal of an id that is not in the production list
    #[error("Version {0} is not a production version.")]
    NotAProductionVersion(String),

    /// Creation date is not an ISO-8601 timestamp
    #[error("Malformed timestamp '{value}': {reason}")]
    MalformedTimestamp { value: String, reason: String },

    /// Version record not found
    #[error("Version not found: {0}")]
    RecordNotFound(String),

    /// Id cannot be used as a record file name
    #[error("Invalid version id: '{0}'")]
    InvalidVersionId(String),

    #[error(transparent)]
    Config(ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl VersionError {
    pub fn pointer_file_not_found(path: impl Into<PathBuf>) -> Self {
        VersionError::PointerFileNotFound { path: path.into() }
    }

    pub fn not_a_production_version(version_id: impl Into<String>) -> Self {
        VersionError::NotAProductionVersion(version_id.into())
    }

    pub fn malformed_timestamp(value: impl Into<String>, reason: impl ToString) -> Self {
        VersionError::MalformedTimestamp {
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            VersionError::PointerFileNotFound { .. } => "VERSION_POINTER_FILE_NOT_FOUND",
            VersionError::NotAProductionVersion(_) => "VERSION_NOT_PRODUCTION",
            VersionError::MalformedTimestamp { .. } => "VERSION_MALFORMED_TIMESTAMP",
            VersionError::RecordNotFound(_) => "VERSION_NOT_FOUND",
            VersionError::InvalidVersionId(_) => "VERSION_INVALID_ID",
            VersionError::Config(_) => "VERSION_CONFIG_ERROR",
            VersionError::Io(_) => "VERSION_IO_ERROR",
            VersionError::Json(_) => "VERSION_JSON_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_production_message() {
        let err = VersionError::not_a_production_version("v3");
        assert_eq!(err.to_string(), "Version v3 is not a production version.");
        assert_eq!(err.code(), "VERSION_NOT_PRODUCTION");
    }

    #[test]
    fn test_pointer_not_found_display() {
        let err = VersionError::pointer_file_not_found("/data/version/version.json");
        assert!(err.to_string().contains("/data/version/version.json"));
        assert_eq!(err.code(), "VERSION_POINTER_FILE_NOT_FOUND");
    }

    #[test]
    fn test_io_error_passes_through() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: VersionError = io.into();
        assert_eq!(err.to_string(), "denied");
        assert_eq!(err.code(), "VERSION_IO_ERROR");
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err = VersionError::Config("bad section".into());
        assert_eq!(err.to_string(), "bad section");
    }
}
