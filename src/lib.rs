//! # Dual Sink Logger
//!
//! A leveled logger that writes colored lines to the console and, optionally,
//! plain lines to an append-only log file. Each sink has its own threshold.
//!
//! ## Features
//!
//! - **Independent thresholds**: console and file filter separately
//! - **Configurable levels**: ordered level table with per-level colors
//! - **Prefixed delegates**: component loggers that share one base logger
//! - **Non-blocking file writes**: file lines go through a background writer
//!
//! ## Example
//!
//! ```
//! use dual_sink_logger::prelude::*;
//!
//! let logger = Logger::builder().level("warn").build()?;
//! logger.info("filtered out");
//! logger.warn(msg!["disk usage at", 91, "percent"]);
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::core::AnsiRenderer;
    pub use crate::core::{
        ColorMode, ColorRenderer, DelegateOptions, DelegatedLogger, Level, LevelDef, LevelTable,
        Log, LogExt, Logger, LoggerBuilder, LoggerConfig, LoggerError, Message, Part,
        PlainRenderer, Result, Sink, TimestampFormat,
    };
    pub use crate::msg;
    pub use crate::sinks::{ConsoleSink, FileSink, MemorySink};
}

#[cfg(feature = "console")]
pub use crate::core::AnsiRenderer;
pub use crate::core::{
    strip_ansi, ColorMode, ColorRenderer, DelegateOptions, DelegatedLogger, Level, LevelArg,
    LevelDef, LevelTable, Log, LogExt, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, Message, Part, PlainRenderer, Prefix, Result, Sink, TimestampFormat, SILENT,
};
pub use sinks::{AsyncSink, ConsoleSink, FileSink, MemorySink};
