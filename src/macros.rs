//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide the formatted variants of the per-level calls: the
//! message is built with `format!` first and then handed to the logger.
//! Given a logger expression as the first argument they log through it;
//! starting directly with the format string they use the process-wide
//! default logger from [`crate::global`].
//!
//! # Examples
//!
//! ```
//! use leveled_log::prelude::*;
//! use leveled_log::info;
//!
//! let sink = MemorySink::new();
//! let logger = SinkLogger::new(sink.clone());
//!
//! // Explicit logger
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//!
//! // Default logger
//! info!("Server listening on port {}", port).unwrap();
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use leveled_log::prelude::*;
/// # let logger = SinkLogger::new(MemorySink::new());
/// use leveled_log::log;
/// log!(logger, LogLevel::INFO, "Simple message").unwrap();
/// log!(logger, LogLevel::ERROR, "Error code: {}", 500).unwrap();
/// log!(LogLevel::WARN, "Default logger, attempt {}", 2).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::global::log($level, &format!($fmt $(, $arg)*))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::LoggerExt as _;
        $logger.log($level, &format!($($arg)+))
    }};
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use leveled_log::prelude::*;
/// # let logger = SinkLogger::builder().threshold(LogLevel::DEBUG).sink(MemorySink::new()).build();
/// use leveled_log::debug;
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::global::debug(&format!($fmt $(, $arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::DEBUG, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use leveled_log::prelude::*;
/// # let logger = SinkLogger::new(MemorySink::new());
/// use leveled_log::info;
/// info!(logger, "Processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::global::info(&format!($fmt $(, $arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::INFO, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use leveled_log::prelude::*;
/// # let logger = SinkLogger::new(MemorySink::new());
/// use leveled_log::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warn {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::global::warn(&format!($fmt $(, $arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::WARN, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use leveled_log::prelude::*;
/// # let logger = SinkLogger::new(MemorySink::new());
/// use leveled_log::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::global::error(&format!($fmt $(, $arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::ERROR, $($arg)+)
    };
}

/// Log a fatal-level message and terminate the process with status 1.
///
/// # Examples
///
/// ```no_run
/// # use leveled_log::prelude::*;
/// # let logger = SinkLogger::new(MemorySink::new());
/// use leveled_log::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::global::fatal(&format!($fmt $(, $arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::LoggerExt as _;
        $logger.fatal(&format!($($arg)+))
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, SinkLogger, TextFormatter, TimestampFormat};
    use crate::sinks::MemorySink;

    fn logger(sink: &MemorySink) -> SinkLogger {
        SinkLogger::builder()
            .threshold(LogLevel::DEBUG)
            .formatter(TextFormatter::new("$L $m", TimestampFormat::layout(""), "\n"))
            .sink(sink.clone())
            .build()
    }

    #[test]
    fn test_log_macro() {
        let sink = MemorySink::new();
        let logger = logger(&sink);
        log!(logger, LogLevel::WARN, "Formatted: {}", 42).unwrap();
        log!(logger, LogLevel::INFO, "Plain").unwrap();
        assert_eq!(sink.lines(), vec!["WARN Formatted: 42", "INFO Plain"]);
    }

    #[test]
    fn test_level_macros() {
        let sink = MemorySink::new();
        let logger = logger(&sink);
        debug!(logger, "Count: {}", 5).unwrap();
        info!(logger, "Items: {}", 100).unwrap();
        warn!(logger, "Retry {} of {}", 1, 3).unwrap();
        error!(logger, "Code: {}", 500).unwrap();
        assert_eq!(
            sink.lines(),
            vec!["DEBUG Count: 5", "INFO Items: 100", "WARN Retry 1 of 3", "ERROR Code: 500"]
        );
    }

    #[test]
    fn test_macro_through_reference() {
        let sink = MemorySink::new();
        let logger = std::sync::Arc::new(logger(&sink));
        let by_ref = &logger;
        info!(by_ref, "via {}", "arc").unwrap();
        assert_eq!(sink.contents(), "INFO via arc\n");
    }

    fn panicking_exit(code: i32) -> ! {
        panic!("exit({})", code)
    }

    #[test]
    fn test_fatal_macro_writes_before_exit() {
        let sink = MemorySink::new();
        let logger = SinkLogger::builder()
            .formatter(TextFormatter::new("$L $m", TimestampFormat::layout(""), "\n"))
            .sink(sink.clone())
            .exit_hook(panicking_exit)
            .build();

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            fatal!(logger, "cannot recover: {}", "disk full");
        }));

        let payload = outcome.unwrap_err();
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("exit(1)"));
        assert_eq!(sink.contents(), "FATAL cannot recover: disk full\n");
    }

    #[test]
    fn test_macro_location_is_invocation_site() {
        let sink = MemorySink::new();
        let logger = SinkLogger::builder()
            .formatter(TextFormatter::new("$f", TimestampFormat::layout(""), ""))
            .sink(sink.clone())
            .build();
        let line = line!() + 1;
        info!(logger, "where").unwrap();
        assert_eq!(sink.contents(), format!("macros.rs:{}", line));
    }
}
