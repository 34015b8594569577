//! Logger capability and the single-sink logger

use super::{
    error::Result,
    formatter::{Formatter, TextFormatter},
    log_entry::LogEntry,
    log_level::LogLevel,
};
use crate::sinks::{ConsoleSink, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Exit status used by every `fatal` call.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Terminal action run after a fatal message has been dispatched.
///
/// The hook diverges, so a `fatal` call can never hand control back to its
/// caller. Production loggers use [`std::process::exit`].
pub type ExitHook = fn(i32) -> !;

/// Gating and dispatch, the part of a logger that varies per variant.
///
/// The per-level calls live in [`LoggerExt`], which every `Logger` gets for
/// free.
pub trait Logger: Send + Sync {
    /// Lowest level this logger emits.
    fn threshold(&self) -> LogLevel;

    /// Dispatch an entry, or do nothing if it is below the threshold.
    ///
    /// Sink failures are returned unchanged.
    fn log_entry(&self, entry: &LogEntry) -> Result<()>;

    fn exit_hook(&self) -> ExitHook {
        std::process::exit
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.threshold()
    }
}

/// Per-level logging calls.
///
/// Each call records the location of its caller, which is what `$f` and `$F`
/// render. The blanket impl is resolved statically even for `dyn Logger`, so
/// the location is the call site and never a frame inside this crate.
pub trait LoggerExt: Logger {
    fn log(&self, level: LogLevel, message: &str) -> Result<()>;
    fn debug(&self, message: &str) -> Result<()>;
    fn info(&self, message: &str) -> Result<()>;
    /// Same as [`LoggerExt::info`].
    fn print(&self, message: &str) -> Result<()>;
    fn warn(&self, message: &str) -> Result<()>;
    fn error(&self, message: &str) -> Result<()>;
    /// Log at FATAL, flush, then terminate through the exit hook with
    /// status 1.
    fn fatal(&self, message: &str) -> !;
}

impl<L: Logger + ?Sized> LoggerExt for L {
    #[track_caller]
    fn log(&self, level: LogLevel, message: &str) -> Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        self.log_entry(&LogEntry::at_caller(level, message))
    }

    #[track_caller]
    fn debug(&self, message: &str) -> Result<()> {
        self.log(LogLevel::DEBUG, message)
    }

    #[track_caller]
    fn info(&self, message: &str) -> Result<()> {
        self.log(LogLevel::INFO, message)
    }

    #[track_caller]
    fn print(&self, message: &str) -> Result<()> {
        self.log(LogLevel::INFO, message)
    }

    #[track_caller]
    fn warn(&self, message: &str) -> Result<()> {
        self.log(LogLevel::WARN, message)
    }

    #[track_caller]
    fn error(&self, message: &str) -> Result<()> {
        self.log(LogLevel::ERROR, message)
    }

    // A failed write cannot be returned from here, so it goes to stderr.
    #[track_caller]
    fn fatal(&self, message: &str) -> ! {
        if let Err(e) = self.log(LogLevel::FATAL, message) {
            eprintln!("[LOGGER ERROR] Failed to write fatal message: {}", e);
        }
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        (self.exit_hook())(FATAL_EXIT_CODE)
    }
}

/// Logger writing to exactly one sink.
///
/// Rendering happens on the caller's thread; only the write itself is
/// serialized, so bytes reach the sink one whole line at a time in lock
/// acquisition order.
pub struct SinkLogger {
    threshold: LogLevel,
    formatter: Arc<dyn Formatter>,
    sink: Mutex<Box<dyn Sink>>,
    exit_hook: ExitHook,
}

impl SinkLogger {
    /// INFO threshold and the default formatter, writing to `sink`.
    #[must_use]
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self::with_config(LogLevel::INFO, Arc::new(TextFormatter::default()), sink)
    }

    #[must_use]
    pub fn with_config(
        threshold: LogLevel,
        formatter: Arc<dyn Formatter>,
        sink: impl Sink + 'static,
    ) -> Self {
        Self {
            threshold,
            formatter,
            sink: Mutex::new(Box::new(sink)),
            exit_hook: std::process::exit,
        }
    }

    /// Create a builder for SinkLogger
    ///
    /// # Example
    /// ```
    /// use leveled_log::prelude::*;
    ///
    /// let logger = SinkLogger::builder()
    ///     .threshold(LogLevel::DEBUG)
    ///     .formatter(ColorFormatter::default())
    ///     .sink(ConsoleSink::stderr())
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> SinkLoggerBuilder {
        SinkLoggerBuilder::new()
    }

    pub fn set_threshold(&mut self, level: LogLevel) {
        self.threshold = level;
    }

    pub fn set_formatter(&mut self, formatter: Arc<dyn Formatter>) {
        self.formatter = formatter;
    }

    /// Replace the sink. The previous sink is flushed and dropped.
    pub fn set_sink(&mut self, sink: impl Sink + 'static) {
        let mut slot = self.sink.lock();
        if let Err(e) = slot.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush replaced sink '{}': {}", slot.name(), e);
        }
        *slot = Box::new(sink);
    }

    pub fn set_exit_hook(&mut self, hook: ExitHook) {
        self.exit_hook = hook;
    }

    pub fn formatter(&self) -> &Arc<dyn Formatter> {
        &self.formatter
    }

    pub fn sink_name(&self) -> String {
        self.sink.lock().name().to_string()
    }
}

impl Default for SinkLogger {
    fn default() -> Self {
        Self::new(ConsoleSink::stdout())
    }
}

impl Logger for SinkLogger {
    fn threshold(&self) -> LogLevel {
        self.threshold
    }

    fn log_entry(&self, entry: &LogEntry) -> Result<()> {
        if entry.level < self.threshold {
            return Ok(());
        }

        let line = self.formatter.format(entry);
        let mut sink = self.sink.lock();
        sink.write_str(&line)
    }

    fn exit_hook(&self) -> ExitHook {
        self.exit_hook
    }

    fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }
}

/// Builder for constructing a [`SinkLogger`] with a fluent API
pub struct SinkLoggerBuilder {
    threshold: LogLevel,
    formatter: Arc<dyn Formatter>,
    sink: Option<Box<dyn Sink>>,
    exit_hook: ExitHook,
}

impl SinkLoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            threshold: LogLevel::INFO,
            formatter: Arc::new(TextFormatter::default()),
            sink: None,
            exit_hook: std::process::exit,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: LogLevel) -> Self {
        self.threshold = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    /// Use a formatter that is shared with other loggers.
    #[must_use = "builder methods return a new value"]
    pub fn shared_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Set the sink; standard output is used when never called.
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn exit_hook(mut self, hook: ExitHook) -> Self {
        self.exit_hook = hook;
        self
    }

    pub fn build(self) -> SinkLogger {
        SinkLogger {
            threshold: self.threshold,
            formatter: self.formatter,
            sink: Mutex::new(
                self.sink
                    .unwrap_or_else(|| Box::new(ConsoleSink::stdout())),
            ),
            exit_hook: self.exit_hook,
        }
    }
}

impl Default for SinkLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, ColorFormatter, LoggerError, TimestampFormat};
    use crate::sinks::MemorySink;

    fn bare_formatter(template: &str) -> TextFormatter {
        TextFormatter::new(template, TimestampFormat::layout(""), "\n")
    }

    fn logger_at(level: LogLevel, sink: &MemorySink) -> SinkLogger {
        SinkLogger::builder()
            .threshold(level)
            .formatter(bare_formatter("$L $m"))
            .sink(sink.clone())
            .build()
    }

    #[test]
    fn test_builder_defaults() {
        let logger = SinkLogger::builder().build();
        assert_eq!(logger.threshold(), LogLevel::INFO);
        assert_eq!(logger.sink_name(), "stdout");
    }

    #[test]
    fn test_gating() {
        let sink = MemorySink::new();
        let logger = logger_at(LogLevel::WARN, &sink);

        logger.debug("d").unwrap();
        logger.info("i").unwrap();
        logger.warn("w").unwrap();
        logger.error("e").unwrap();

        assert_eq!(sink.lines(), vec!["WARN w", "ERROR e"]);
    }

    #[test]
    fn test_print_is_info() {
        let sink = MemorySink::new();
        let logger = logger_at(LogLevel::INFO, &sink);
        logger.print("p").unwrap();
        assert_eq!(sink.contents(), "INFO p\n");
    }

    #[test]
    fn test_log_entry_is_gated_too() {
        let sink = MemorySink::new();
        let logger = logger_at(LogLevel::ERROR, &sink);
        logger
            .log_entry(&LogEntry::new(LogLevel::WARN, "skipped"))
            .unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_setters() {
        let first = MemorySink::new();
        let second = MemorySink::new();
        let mut logger = logger_at(LogLevel::ERROR, &first);

        logger.info("dropped").unwrap();
        logger.set_threshold(LogLevel::DEBUG);
        logger.info("kept").unwrap();

        logger.set_formatter(Arc::new(bare_formatter("<$m>")));
        logger.set_sink(second.clone());
        logger.debug("moved").unwrap();

        assert_eq!(first.contents(), "INFO kept\n");
        assert_eq!(second.contents(), "<moved>\n");
    }

    #[test]
    fn test_location_is_call_site() {
        let sink = MemorySink::new();
        let logger = SinkLogger::builder()
            .formatter(bare_formatter("$f"))
            .sink(sink.clone())
            .build();

        let line = line!() + 1;
        logger.info("here").unwrap();
        assert_eq!(sink.contents(), format!("logger.rs:{}\n", line));
    }

    #[test]
    fn test_location_through_dyn() {
        let sink = MemorySink::new();
        let logger: Arc<dyn Logger> = Arc::new(
            SinkLogger::builder()
                .formatter(bare_formatter("$F"))
                .sink(sink.clone())
                .build(),
        );

        let line = line!() + 1;
        logger.warn("here").unwrap();
        assert_eq!(sink.contents(), format!("{}:{}\n", file!(), line));
    }

    #[test]
    fn test_color_formatter_through_logger() {
        let sink = MemorySink::new();
        let logger = SinkLogger::builder()
            .formatter(ColorFormatter::new(bare_formatter("$m"), Color::White))
            .sink(sink.clone())
            .build();
        logger.error("red").unwrap();
        assert!(sink.contents().contains(&format!("{}red", Color::Red.escape())));
    }

    struct FailingSink;

    impl Sink for FailingSink {
        fn write_str(&mut self, _line: &str) -> Result<()> {
            Err(LoggerError::sink("rejected"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_sink_error_propagates() {
        let logger = SinkLogger::new(FailingSink);
        let err = logger.info("lost").unwrap_err();
        assert!(matches!(err, LoggerError::SinkError(_)));

        // Filtered calls never reach the sink.
        assert!(logger.debug("filtered").is_ok());
    }

    fn panicking_exit(code: i32) -> ! {
        panic!("exit({})", code)
    }

    #[test]
    fn test_fatal_writes_before_exit() {
        let sink = MemorySink::new();
        let logger = SinkLogger::builder()
            .threshold(LogLevel::DEBUG)
            .formatter(bare_formatter("$l $m"))
            .sink(sink.clone())
            .exit_hook(panicking_exit)
            .build();

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.fatal("giving up");
        }));

        let payload = outcome.expect_err("fatal must not return");
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("exit(1)"));
        assert_eq!(sink.contents(), "[x] giving up\n");
    }
}
