//! Fan-out logger composing several loggers under one threshold

use super::{
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_level::LogLevel,
    logger::{ExitHook, Logger},
};
use std::sync::Arc;

/// Forwards every entry that passes its own threshold to each child logger,
/// in registration order.
///
/// Children still apply their own thresholds, so a child only emits entries
/// that pass both. The fan-out holds no lock: each child serializes its own
/// sink, but writes of different children may interleave.
///
/// # Example
///
/// ```
/// use leveled_log::prelude::*;
/// use std::sync::Arc;
///
/// let everything = MemorySink::new();
/// let problems = MemorySink::new();
///
/// let logger = FanoutLogger::new(LogLevel::INFO)
///     .with(Arc::new(SinkLogger::builder().threshold(LogLevel::DEBUG).sink(everything.clone()).build()))
///     .with(Arc::new(SinkLogger::builder().threshold(LogLevel::ERROR).sink(problems.clone()).build()));
///
/// logger.info("started").unwrap();
/// assert!(everything.contents().contains("started"));
/// assert!(problems.is_empty());
/// ```
pub struct FanoutLogger {
    threshold: LogLevel,
    loggers: Vec<Arc<dyn Logger>>,
    exit_hook: ExitHook,
}

impl FanoutLogger {
    #[must_use]
    pub fn new(threshold: LogLevel) -> Self {
        Self::with_loggers(threshold, Vec::new())
    }

    #[must_use]
    pub fn with_loggers(threshold: LogLevel, loggers: Vec<Arc<dyn Logger>>) -> Self {
        Self {
            threshold,
            loggers,
            exit_hook: std::process::exit,
        }
    }

    /// Register another child, after all existing ones.
    #[must_use = "builder methods return a new value"]
    pub fn with(mut self, logger: Arc<dyn Logger>) -> Self {
        self.loggers.push(logger);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_exit_hook(mut self, hook: ExitHook) -> Self {
        self.exit_hook = hook;
        self
    }

    pub fn add_logger(&mut self, logger: Arc<dyn Logger>) {
        self.loggers.push(logger);
    }

    pub fn set_threshold(&mut self, level: LogLevel) {
        self.threshold = level;
    }

    pub fn loggers(&self) -> &[Arc<dyn Logger>] {
        &self.loggers
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    /// Run `op` on every child; a failing child does not stop the rest and
    /// the first failure is returned.
    fn for_each_child<F>(&self, mut op: F) -> Result<()>
    where
        F: FnMut(&dyn Logger) -> Result<()>,
    {
        let mut first_error: Option<LoggerError> = None;
        for logger in &self.loggers {
            if let Err(e) = op(logger.as_ref()) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

impl Logger for FanoutLogger {
    fn threshold(&self) -> LogLevel {
        self.threshold
    }

    fn log_entry(&self, entry: &LogEntry) -> Result<()> {
        if entry.level < self.threshold {
            return Ok(());
        }
        self.for_each_child(|logger| logger.log_entry(entry))
    }

    fn exit_hook(&self) -> ExitHook {
        self.exit_hook
    }

    fn flush(&self) -> Result<()> {
        self.for_each_child(|logger| logger.flush())
    }
}
