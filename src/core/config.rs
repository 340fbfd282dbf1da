//! Construction-time configuration
//!
//! ```json
//! {
//!   "level": "info",
//!   "fileLevel": "debug",
//!   "logFile": "/var/log/app.log",
//!   "colorizeFile": false,
//!   "color": "auto",
//!   "timestamp": "iso8601",
//!   "levels": [
//!     { "name": "debug", "color": "blue" },
//!     { "name": "info", "color": "cyan" },
//!     { "name": "warn", "color": "yellow", "aliases": ["warning"] },
//!     { "name": "error", "color": "red" }
//!   ]
//! }
//! ```
//!
//! Every key is optional. `fileLevel` is also accepted as `logFileLevel` or
//! `fileLogLevel`; the three spellings name one field, so giving more than
//! one of them is a duplicate-field error rather than a precedence rule.
//! Level names and timestamp patterns are validated when the logger is
//! built, not when the configuration is parsed.

use super::{
    color::ColorMode,
    error::Result,
    log_level::{LevelDef, LevelTable},
    timestamp::TimestampFormat,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoggerConfig {
    /// Console threshold; `info` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// File threshold; the console threshold when absent
    #[serde(
        default,
        alias = "logFileLevel",
        alias = "fileLogLevel",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_level: Option<String>,

    /// Enables the file sink
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Keep color escapes in file output
    #[serde(default)]
    pub colorize_file: bool,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<TimestampFormat>,

    /// Replaces the built-in level table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<LevelDef>>,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    #[must_use]
    pub fn with_file_level(mut self, level: impl Into<String>) -> Self {
        self.file_level = Some(level.into());
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// The level table this configuration asks for
    pub fn level_table(&self) -> Result<LevelTable> {
        match &self.levels {
            Some(defs) => LevelTable::from_defs(defs.clone()),
            None => Ok(LevelTable::default()),
        }
    }
}
