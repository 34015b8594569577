//! Console sink implementation

use super::Sink;
use crate::core::{LoggerError, Result};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Writes lines to the process's standard output or standard error.
///
/// Lines are written verbatim: the formatter owns the line terminator and
/// any color codes.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink {
    target: ConsoleTarget,
}

impl ConsoleSink {
    pub fn new(target: ConsoleTarget) -> Self {
        Self { target }
    }

    pub fn stdout() -> Self {
        Self::new(ConsoleTarget::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(ConsoleTarget::Stderr)
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }
}

impl Sink for ConsoleSink {
    fn write_str(&mut self, line: &str) -> Result<()> {
        let result = match self.target {
            ConsoleTarget::Stdout => std::io::stdout().lock().write_all(line.as_bytes()),
            ConsoleTarget::Stderr => std::io::stderr().lock().write_all(line.as_bytes()),
        };
        result.map_err(|e| LoggerError::io_operation("writing to console", self.name(), e))
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => std::io::stdout().flush()?,
            ConsoleTarget::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.target {
            ConsoleTarget::Stdout => "stdout",
            ConsoleTarget::Stderr => "stderr",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_stdout() {
        let sink = ConsoleSink::default();
        assert_eq!(sink.target(), ConsoleTarget::Stdout);
        assert_eq!(sink.name(), "stdout");
    }

    #[test]
    fn test_stderr_write() {
        let mut sink = ConsoleSink::stderr();
        assert_eq!(sink.name(), "stderr");
        sink.write_str("").expect("empty write succeeds");
        sink.flush().expect("flush succeeds");
    }
}
