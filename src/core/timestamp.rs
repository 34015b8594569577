//! Timestamp formatting utilities
//!
//! Renders the `$t` token of a template. The default is a reference-date
//! layout (`YYYY-MM-DD hh:mm:ss`); ISO 8601, RFC 3339, Unix and raw strftime
//! formats are available as well.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Layout used when nothing else is configured.
pub const DEFAULT_LAYOUT: &str = "YYYY-MM-DD hh:mm:ss";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use leveled_log::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).single().unwrap();
/// let format = TimestampFormat::layout("DD/MM/YYYY hh:mm");
/// assert_eq!(format.format(&at), "02/01/2024 03:04");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Reference-date layout built from `YYYY`, `YY`, `MM`, `DD`, `hh`, `mm`,
    /// `ss` and `SSS`; every other character is copied literally.
    Layout(String),

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+01:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// ```
    /// use leveled_log::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl Default for TimestampFormat {
    fn default() -> Self {
        TimestampFormat::Layout(DEFAULT_LAYOUT.to_string())
    }
}

impl TimestampFormat {
    pub fn layout(layout: impl Into<String>) -> Self {
        TimestampFormat::Layout(layout.into())
    }

    /// Format a local timestamp according to this format.
    ///
    /// Never fails: a strftime pattern chrono cannot render is echoed back
    /// verbatim.
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Layout(layout) => {
                if layout.is_empty() {
                    return String::new();
                }
                strftime(datetime, &layout_to_strftime(layout))
            }
            TimestampFormat::Iso8601 => strftime(datetime, "%Y-%m-%dT%H:%M:%S%.3f%:z"),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(pattern) => strftime(datetime, pattern),
        }
    }

    /// Reject a custom strftime pattern chrono cannot render.
    pub fn validate(&self) -> Result<()> {
        match self {
            TimestampFormat::Custom(pattern)
                if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) =>
            {
                Err(LoggerError::config(
                    "TimestampFormat",
                    format!("unsupported strftime pattern '{}'", pattern),
                ))
            }
            _ => Ok(()),
        }
    }
}

fn strftime(datetime: &DateTime<Local>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", datetime.format(pattern)).is_err() {
        return pattern.to_string();
    }
    out
}

const LAYOUT_TOKENS: [(&str, &str); 8] = [
    ("YYYY", "%Y"),
    ("SSS", "%3f"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("hh", "%H"),
    ("mm", "%M"),
    ("ss", "%S"),
];

/// Translate a reference-date layout into an equivalent strftime pattern.
fn layout_to_strftime(layout: &str) -> String {
    let mut out = String::with_capacity(layout.len() * 2);
    let mut rest = layout;
    'outer: while let Some(c) = rest.chars().next() {
        for (token, spec) in LAYOUT_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(spec);
                rest = tail;
                continue 'outer;
            }
        }
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }
    out
}
