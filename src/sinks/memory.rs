//! In-memory sink

use super::Sink;
use crate::core::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects lines in a shared buffer.
///
/// Clones share the same buffer, so one handle can be given to a logger while
/// another inspects what was written.
///
/// # Examples
///
/// ```
/// use leveled_log::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = SinkLogger::builder()
///     .formatter(TextFormatter::default().with_template("$L $m"))
///     .sink(sink.clone())
///     .build();
///
/// logger.warn("low disk").unwrap();
/// assert_eq!(sink.contents(), "WARN low disk\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_str(&mut self, line: &str) -> Result<()> {
        self.buffer.lock().push_str(line);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
