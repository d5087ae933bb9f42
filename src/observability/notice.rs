//! Injected informational notice sink.
//!
//! Stores take an `Arc<dyn NoticeLog>` instead of reaching for a global
//! logger, so tests can capture what was reported.

use std::sync::{Arc, Mutex};

use super::logger::Logger;

/// Event name used when notices are written as structured log lines.
pub const NOTICE_EVENT: &str = "VERSION_NOTICE";

/// Sink for informational, non-fatal notices.
pub trait NoticeLog: Send + Sync {
    /// Report an informational message.
    fn info(&self, message: &str);
}

/// Writes notices as structured JSON lines on stderr, keeping stdout free for
/// command output.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonNoticeLog;

impl JsonNoticeLog {
    pub fn new() -> Self {
        Self
    }
}

impl NoticeLog for JsonNoticeLog {
    fn info(&self, message: &str) {
        Logger::info(NOTICE_EVENT, &[("message", message)]);
    }
}

/// In-memory notice sink for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryNoticeLog {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemoryNoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.messages().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        match self.messages.lock() {
            Ok(mut messages) => messages.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl NoticeLog for MemoryNoticeLog {
    fn info(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}
