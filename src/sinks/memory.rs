//! In-memory sink for capturing output

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects lines in a shared buffer; clones see the same buffer
///
/// # Example
///
/// ```
/// use dual_sink_logger::prelude::*;
///
/// let captured = MemorySink::new();
/// let logger = Logger::builder()
///     .console_sink(captured.clone())
///     .renderer(PlainRenderer)
///     .build()
///     .unwrap();
///
/// logger.info(msg!["hello", "world"]);
/// assert_eq!(captured.contents(), "INFO  hello world\n");
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

    /// Captured lines without their terminators
    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Return the captured text and reset the buffer
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }
}

impl Sink for MemorySink {
    fn append(&mut self, line: &str) -> Result<()> {
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
