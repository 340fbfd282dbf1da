//! Sink implementations

pub mod async_sink;
pub mod console;
pub mod file;
pub mod memory;

pub use async_sink::{AsyncSink, ErrorCallback, DEFAULT_SHUTDOWN_TIMEOUT};
pub use console::{ConsoleSink, ConsoleTarget};
pub use file::FileSink;
pub use memory::MemorySink;

pub use crate::core::Sink;
