//! Sink over any `io::Write`

use super::Sink;
use crate::core::Result;
use std::io::Write;

/// Adapts an already-open writer (a `File`, a socket, a `Vec<u8>`) into a
/// sink. Opening and closing the underlying resource is the caller's job.
///
/// # Examples
///
/// ```no_run
/// use leveled_log::{SinkLogger, WriterSink};
/// use std::fs::OpenOptions;
///
/// let file = OpenOptions::new().create(true).append(true).open("/var/log/app.log").unwrap();
/// let logger = SinkLogger::new(WriterSink::new(file));
/// ```
pub struct WriterSink<W: Write + Send> {
    writer: W,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            name: "writer".to_string(),
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_str(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;

    #[test]
    fn test_writes_verbatim() {
        let mut sink = WriterSink::new(Vec::new()).named("buffer");
        sink.write_str("one\n").unwrap();
        sink.write_str("two").unwrap();
        assert_eq!(sink.name(), "buffer");
        assert_eq!(sink.into_inner(), b"one\ntwo");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_propagates() {
        let mut sink = WriterSink::new(Broken);
        let err = sink.write_str("lost").unwrap_err();
        match err {
            LoggerError::IoError(e) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other}"),
        }
    }
}
