//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::panic::Location;
use std::path::Path;

/// Rendered in place of a location that could not be resolved.
pub const UNKNOWN_LOCATION: &str = "???:0";

/// One log call: what was said, how severe, when and from where.
///
/// The timestamp is taken when the entry is created so that every sink of a
/// fan-out logger renders the same instant.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Local::now(),
            file: None,
            line: None,
        }
    }

    /// Entry located at whoever called the enclosing `#[track_caller]` chain.
    #[track_caller]
    pub fn at_caller(level: LogLevel, message: impl Into<String>) -> Self {
        Self::new(level, message).with_caller(Location::caller())
    }

    #[must_use]
    pub fn with_location(mut self, file: &str, line: u32) -> Self {
        self.file = Some(file.to_string());
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn with_caller(self, location: &Location<'_>) -> Self {
        self.with_location(location.file(), location.line())
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// `basename:line`, or `???:0` when the location is unknown.
    pub fn short_location(&self) -> String {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => {
                let base = Path::new(file)
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or(file.as_str());
                format!("{}:{}", base, line)
            }
            _ => UNKNOWN_LOCATION.to_string(),
        }
    }

    /// `path:line`, or `???:0` when the location is unknown.
    pub fn long_location(&self) -> String {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => format!("{}:{}", file, line),
            _ => UNKNOWN_LOCATION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations() {
        let entry = LogEntry::new(LogLevel::INFO, "hi").with_location("src/net/server.rs", 42);
        assert_eq!(entry.short_location(), "server.rs:42");
        assert_eq!(entry.long_location(), "src/net/server.rs:42");
    }

    #[test]
    fn test_unknown_location() {
        let entry = LogEntry::new(LogLevel::INFO, "hi");
        assert_eq!(entry.short_location(), UNKNOWN_LOCATION);
        assert_eq!(entry.long_location(), UNKNOWN_LOCATION);
    }

    #[test]
    fn test_at_caller_points_here() {
        let line = line!() + 1;
        let entry = LogEntry::at_caller(LogLevel::DEBUG, "x");
        assert_eq!(entry.line, Some(line));
        assert_eq!(entry.file.as_deref(), Some(file!()));
    }
}
