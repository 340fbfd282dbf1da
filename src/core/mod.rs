//! Core logger types and traits

pub mod color;
pub mod config;
pub mod delegated;
pub mod error;
pub mod log;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod sink;
pub mod timestamp;

#[cfg(feature = "console")]
pub use color::AnsiRenderer;
pub use color::{default_renderer, strip_ansi, ColorMode, ColorRenderer, PlainRenderer};
pub use config::LoggerConfig;
pub use delegated::{DelegateOptions, DelegatedLogger};
pub use error::{LoggerError, Result};
pub use log::{Log, LogExt};
pub use log_level::{Level, LevelArg, LevelDef, LevelTable, SILENT};
pub use logger::{Logger, LoggerBuilder};
pub use message::{Message, Part, Prefix};
pub use metrics::LoggerMetrics;
pub use sink::Sink;
pub use timestamp::TimestampFormat;
