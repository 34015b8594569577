//! Core logger types and traits

pub mod color;
pub mod error;
pub mod fanout;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod template;
pub mod timestamp;

pub use color::{paint, strip_ansi, Color, RESET};
pub use error::{LoggerError, Result};
pub use fanout::FanoutLogger;
pub use formatter::{
    ColorFormatter, Formatter, FormatterConfig, FormatterExt, TextFormatter, DEFAULT_LINE_END,
    DEFAULT_TEMPLATE,
};
pub use log_entry::{LogEntry, UNKNOWN_LOCATION};
pub use log_level::LogLevel;
pub use logger::{ExitHook, Logger, LoggerExt, SinkLogger, SinkLoggerBuilder, FATAL_EXIT_CODE};
pub use template::{Placeholder, Segment, Template};
pub use timestamp::{TimestampFormat, DEFAULT_LAYOUT};
