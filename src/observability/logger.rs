//! Structured JSON logger
//!
//! One line per event on stderr: `event` and `severity` first, remaining
//! fields sorted by key. Stdout is left to command output.

use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Severity {
    /// Normal operations
    Info,
    /// Operation failures
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct Logger;

impl Logger {
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Info, event, fields);
    }

    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Error, event, fields);
    }

    fn emit(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::format_line(severity, event, fields);

        // Logging never fails the caller.
        let mut stderr = io::stderr().lock();
        let _ = stderr.write_all(line.as_bytes());
        let _ = stderr.flush();
    }

    fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut sorted: Vec<&(&str, &str)> = fields.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let mut line = format!("{{\"event\":{},\"severity\":\"{}\"", quote(event), severity);
        for (key, value) in sorted {
            line.push_str(&format!(",{}:{}", quote(key), quote(value)));
        }
        line.push_str("}\n");
        line
    }
}

fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_is_json() {
        let line = Logger::format_line(Severity::Info, "VERSION_PROMOTED", &[("version", "v1")]);

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["event"], "VERSION_PROMOTED");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["version"], "v1");
        assert!(line.ends_with("}\n"));
    }

    #[test]
    fn test_fields_sorted_after_event() {
        let a = Logger::format_line(Severity::Error, "E", &[("version", "v2"), ("code", "X")]);
        let b = Logger::format_line(Severity::Error, "E", &[("code", "X"), ("version", "v2")]);

        assert_eq!(a, b);
        assert!(a.find("\"event\"").unwrap() < a.find("\"severity\"").unwrap());
        assert!(a.find("\"code\"").unwrap() < a.find("\"version\"").unwrap());
    }

    #[test]
    fn test_values_escaped() {
        let line = Logger::format_line(
            Severity::Info,
            "E",
            &[("message", "Version \"v1\"\nis odd")],
        );

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["message"], "Version \"v1\"\nis odd");
        assert_eq!(line.matches('\n').count(), 1);
    }
}
