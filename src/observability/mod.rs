//! Observability for the version store
//!
//! - Structured JSON logging to stderr ([`Logger`])
//! - Injected notice sink ([`NoticeLog`]) for non-fatal informational messages
//!
//! ```ignore
//! use versionstore::observability::{Logger, MemoryNoticeLog, NoticeLog};
//!
//! Logger::info("VERSION_PROMOTED", &[("version", "v1")]);
//!
//! let notices = MemoryNoticeLog::new();
//! notices.info("Version v1 is already a production version.");
//! ```

mod logger;
mod notice;

pub use logger::Logger;
pub use notice::{JsonNoticeLog, MemoryNoticeLog, NoticeLog, NOTICE_EVENT};
