//! # Leveled Log
//!
//! A leveled, template-formatted logging facade for command-line tools and
//! services that want readable, optionally colorized console output.
//!
//! ## Features
//!
//! - **Severity levels**: `DEBUG < INFO < WARN < ERROR < FATAL`, each with a
//!   symbol, a name and a color
//! - **Templates**: `$t` time, `$l` symbol, `$L` name, `$m` message, `$f`/`$F`
//!   caller location
//! - **Plain and color formatters** sharing one capability
//! - **Single-sink and fan-out loggers**, safe to share between threads
//! - **A process-wide default logger** reachable through free functions and
//!   macros
//!
//! ```
//! use leveled_log::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = SinkLogger::builder()
//!     .threshold(LogLevel::DEBUG)
//!     .formatter(TextFormatter::new("$l [$L] :: $m", TimestampFormat::layout(""), "\n"))
//!     .sink(sink.clone())
//!     .build();
//!
//! logger.info("hallo").unwrap();
//! assert_eq!(sink.contents(), "[*] [INFO] :: hallo\n");
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Color, ColorFormatter, ExitHook, FanoutLogger, Formatter, FormatterConfig, FormatterExt,
        LogEntry, LogLevel, Logger, LoggerError, LoggerExt, Result, SinkLogger, SinkLoggerBuilder,
        TextFormatter, TimestampFormat,
    };
    pub use crate::sinks::{ConsoleSink, MemorySink, Sink, WriterSink};
}

pub use core::{
    paint, strip_ansi, Color, ColorFormatter, ExitHook, FanoutLogger, Formatter, FormatterConfig,
    FormatterExt, LogEntry, LogLevel, Logger, LoggerError, LoggerExt, Placeholder, Result, Segment,
    SinkLogger, SinkLoggerBuilder, Template, TextFormatter, TimestampFormat, DEFAULT_LAYOUT, DEFAULT_LINE_END,
    DEFAULT_TEMPLATE, FATAL_EXIT_CODE, RESET, UNKNOWN_LOCATION,
};
pub use sinks::{ConsoleSink, ConsoleTarget, MemorySink, Sink, WriterSink};
