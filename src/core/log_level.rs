//! Log level definitions

use super::color::Color;
use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity rank of a log call.
///
/// Levels are plain integer ranks so that a misconfigured rank can still be
/// carried around: everything outside `DEBUG..=FATAL` renders with an empty
/// symbol and name and the default color instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct LogLevel(i32);

const SYMBOLS: [&str; 5] = ["[+]", "[*]", "[~]", "[!]", "[x]"];
const NAMES: [&str; 5] = ["DEBUG", "INFO", "WARN", "ERROR", "FATAL"];
const COLORS: [Color; 5] = [
    Color::Cyan,
    Color::White,
    Color::Yellow,
    Color::Red,
    Color::BrightRed,
];

impl LogLevel {
    pub const DEBUG: LogLevel = LogLevel(0);
    pub const INFO: LogLevel = LogLevel(1);
    pub const WARN: LogLevel = LogLevel(2);
    pub const ERROR: LogLevel = LogLevel(3);
    pub const FATAL: LogLevel = LogLevel(4);

    /// The five canonical levels, lowest first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::DEBUG,
        LogLevel::INFO,
        LogLevel::WARN,
        LogLevel::ERROR,
        LogLevel::FATAL,
    ];

    /// Build a level from any rank, canonical or not.
    #[must_use]
    pub const fn from_rank(rank: i32) -> Self {
        LogLevel(rank)
    }

    #[must_use]
    pub const fn rank(self) -> i32 {
        self.0
    }

    /// Whether the rank is one of the five canonical levels.
    #[must_use]
    pub const fn is_known(self) -> bool {
        self.0 >= LogLevel::DEBUG.0 && self.0 <= LogLevel::FATAL.0
    }

    fn index(self) -> Option<usize> {
        if self.is_known() {
            Some(self.0 as usize)
        } else {
            None
        }
    }

    /// Short glyph such as `[*]`, empty for unknown ranks.
    pub fn symbol(self) -> &'static str {
        self.index().map_or("", |i| SYMBOLS[i])
    }

    /// Upper-case level name, empty for unknown ranks.
    pub fn name(self) -> &'static str {
        self.index().map_or("", |i| NAMES[i])
    }

    /// Display color, white for unknown ranks.
    pub fn color(self) -> Color {
        self.index().map_or(Color::White, |i| COLORS[i])
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::INFO
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::DEBUG),
            "INFO" => Ok(LogLevel::INFO),
            "WARN" | "WARNING" => Ok(LogLevel::WARN),
            "ERROR" => Ok(LogLevel::ERROR),
            "FATAL" | "CRITICAL" => Ok(LogLevel::FATAL),
            other => other
                .parse::<i32>()
                .map(LogLevel::from_rank)
                .map_err(|_| LoggerError::invalid_level(s)),
        }
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        if level.is_known() {
            level.name().to_string()
        } else {
            level.rank().to_string()
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
