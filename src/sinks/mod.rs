//! Sink implementations
//!
//! A sink is the append-only destination of rendered lines. Sinks never
//! decide what to write; loggers hand them finished lines under their lock.

pub mod console;
pub mod memory;
pub mod writer;

pub use console::{ConsoleSink, ConsoleTarget};
pub use memory::MemorySink;
pub use writer::WriterSink;

use crate::core::Result;

pub trait Sink: Send {
    /// Append one rendered line exactly as given.
    fn write_str(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_str(&mut self, line: &str) -> Result<()> {
        (**self).write_str(line)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
