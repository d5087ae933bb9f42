//! Version records and version pointers
//!
//! A storage root holds:
//! - `version.json`, the pointer document (latest, development, production)
//! - one `<id>.json` record per registered version
//!
//! The two are independent. Nothing checks that a pointer names a version
//! that has a record.
//!
//! The store assumes a single writer. Callers that share a storage root
//! between threads or processes must serialize access themselves.

mod entity;
mod errors;
mod pointer;
mod records;
mod serializer;
mod store;

pub use entity::{parse_timestamp, VersionCodec, VersionEntity, VersionRecord};
pub use errors::{ConfigError, VersionError, VersionResult};
pub use pointer::{PointerDocument, PointerFile, POINTER_FILE_NAME};
pub use records::VersionRecordStore;
pub use serializer::{ConfigSerializer, JsonConfigSerializer};
pub use store::VersionPointerStore;
