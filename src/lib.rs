//! versionstore - file-backed application versions
//!
//! Persists version records and the pointer document that names the latest,
//! development and production versions of an application.

pub mod cli;
pub mod config;
pub mod observability;
pub mod version;
