//! Sink trait for log output destinations

use super::error::Result;

/// Append-only destination for formatted, newline-terminated lines
pub trait Sink: Send + Sync {
    /// Write one complete line; a single call is never interleaved with another
    fn append(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn append(&mut self, line: &str) -> Result<()> {
        (**self).append(line)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
