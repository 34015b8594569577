//! Process-wide default logger
//!
//! A [`SinkLogger`] created on first use with the INFO threshold, the default
//! [`TextFormatter`] and standard output. Logging calls take a shared lock and
//! run concurrently; the setters take the exclusive lock, so a
//! reconfiguration never races an in-flight call and is seen by the next one.
//!
//! ```no_run
//! use leveled_log::{global, ColorFormatter, ConsoleSink, LogLevel};
//!
//! global::set_threshold(LogLevel::DEBUG);
//! global::set_formatter(ColorFormatter::default());
//! global::set_sink(ConsoleSink::stderr());
//!
//! global::info("ready").unwrap();
//! ```

use crate::core::{
    ExitHook, Formatter, LogEntry, LogLevel, Logger, LoggerExt, Result, SinkLogger,
};
use crate::sinks::Sink;
use parking_lot::RwLock;
use std::sync::{Arc, LazyLock};

static DEFAULT_LOGGER: LazyLock<RwLock<SinkLogger>> =
    LazyLock::new(|| RwLock::new(SinkLogger::default()));

pub fn set_threshold(level: LogLevel) {
    DEFAULT_LOGGER.write().set_threshold(level);
}

pub fn set_formatter<F: Formatter + 'static>(formatter: F) {
    set_shared_formatter(Arc::new(formatter));
}

pub fn set_shared_formatter(formatter: Arc<dyn Formatter>) {
    DEFAULT_LOGGER.write().set_formatter(formatter);
}

pub fn set_sink<S: Sink + 'static>(sink: S) {
    DEFAULT_LOGGER.write().set_sink(sink);
}

pub fn set_exit_hook(hook: ExitHook) {
    DEFAULT_LOGGER.write().set_exit_hook(hook);
}

/// Restore the configuration the default logger starts with.
pub fn reset() {
    let mut logger = DEFAULT_LOGGER.write();
    if let Err(e) = logger.flush() {
        eprintln!("[LOGGER ERROR] Failed to flush during reset: {}", e);
    }
    *logger = SinkLogger::default();
}

pub fn threshold() -> LogLevel {
    DEFAULT_LOGGER.read().threshold()
}

pub fn enabled(level: LogLevel) -> bool {
    DEFAULT_LOGGER.read().enabled(level)
}

pub fn log_entry(entry: &LogEntry) -> Result<()> {
    DEFAULT_LOGGER.read().log_entry(entry)
}

#[track_caller]
pub fn log(level: LogLevel, message: &str) -> Result<()> {
    DEFAULT_LOGGER.read().log(level, message)
}

#[track_caller]
pub fn debug(message: &str) -> Result<()> {
    DEFAULT_LOGGER.read().debug(message)
}

#[track_caller]
pub fn info(message: &str) -> Result<()> {
    DEFAULT_LOGGER.read().info(message)
}

#[track_caller]
pub fn print(message: &str) -> Result<()> {
    DEFAULT_LOGGER.read().print(message)
}

#[track_caller]
pub fn warn(message: &str) -> Result<()> {
    DEFAULT_LOGGER.read().warn(message)
}

#[track_caller]
pub fn error(message: &str) -> Result<()> {
    DEFAULT_LOGGER.read().error(message)
}

/// Log at FATAL through the default logger and terminate with status 1.
#[track_caller]
pub fn fatal(message: &str) -> ! {
    // Dispatch under the shared lock, then release it before exiting.
    let hook = {
        let logger = DEFAULT_LOGGER.read();
        if let Err(e) = logger.log(LogLevel::FATAL, message) {
            eprintln!("[LOGGER ERROR] Failed to write fatal message: {}", e);
        }
        if let Err(e) = logger.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        logger.exit_hook()
    };
    hook(crate::core::FATAL_EXIT_CODE)
}

pub fn flush() -> Result<()> {
    DEFAULT_LOGGER.read().flush()
}
