//! Structured JSON logger
//!
//! One event per line. `event` comes first, `severity` second, then the
//! remaining fields sorted by key so identical events print identically.
//! Every line goes to stderr; stdout belongs to command output.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info = 1,
    /// Something unexpected the caller should know about; the operation went on
    Warn = 2,
    /// An operation failed; the process keeps serving
    Error = 3,
    /// The process cannot continue
    Fatal = 4,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::format_line(severity, event, fields);
        // A failed log write must never fail the operation being logged.
        let _ = Self::write_line(&mut io::stderr().lock(), &line);
    }

    fn write_line<W: Write>(writer: &mut W, line: &str) -> io::Result<()> {
        writer.write_all(line.as_bytes())?;
        writer.flush()
    }

    /// Render one log line, newline included
    pub(crate) fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut sorted: Vec<&(&str, &str)> = fields.iter().collect();
        sorted.sort_by_key(|(k, _)| *k);

        let mut line = String::with_capacity(128);
        line.push_str("{\"event\":");
        line.push_str(&quote(event));
        line.push_str(",\"severity\":\"");
        line.push_str(severity.as_str());
        line.push('"');

        for (key, value) in sorted {
            line.push(',');
            line.push_str(&quote(key));
            line.push(':');
            line.push_str(&quote(value));
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
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_write_line_flushes_whole_line() {
        let mut buffer = Vec::new();
        let line = Logger::format_line(Severity::Info, "SERVER_SERVING", &[("addr", "0.0.0.0:5000")]);
        Logger::write_line(&mut buffer, &line).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), line);
    }

    #[test]
    fn test_line_is_valid_json() {
        let line = Logger::format_line(
            Severity::Info,
            "OPERATION_COMPLETE",
            &[("op", "addBook"), ("elapsed_ms", "0")],
        );
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["event"], "OPERATION_COMPLETE");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["op"], "addBook");
    }

    #[test]
    fn test_fields_sorted_and_event_first() {
        let a = Logger::format_line(Severity::Warn, "E", &[("zeta", "1"), ("alpha", "2")]);
        let b = Logger::format_line(Severity::Warn, "E", &[("alpha", "2"), ("zeta", "1")]);
        assert_eq!(a, b);
        assert!(a.starts_with("{\"event\":\"E\",\"severity\":\"WARN\""));
        assert!(a.find("alpha").unwrap() < a.find("zeta").unwrap());
    }

    #[test]
    fn test_escapes_and_single_line() {
        let line = Logger::format_line(
            Severity::Error,
            "OPERATION_FAILED",
            &[("reason", "name \"Ghost\"\nnot found")],
        );
        assert_eq!(line.matches('\n').count(), 1);
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["reason"], "name \"Ghost\"\nnot found");
    }
}
