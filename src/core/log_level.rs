//! Log level definitions and the level table

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Name of the level that sits above every real level
pub const SILENT: &str = "silent";

/// Names every level table has to provide
pub const REQUIRED_LEVELS: [&str; 4] = ["debug", "info", "warn", "error"];

/// A named severity with its rank and symbolic color
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Level {
    name: String,
    rank: u32,
    color: String,
}

impl Level {
    pub fn new(name: impl Into<String>, rank: u32, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rank,
            color: color.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn is_silent(&self) -> bool {
        self.name == SILENT
    }

    /// Whether a message at this level passes `threshold`
    #[inline]
    pub fn passes(&self, threshold: &Level) -> bool {
        !self.is_silent() && self.rank >= threshold.rank
    }

    /// Upper-cased name right-padded to `width`
    pub fn label(&self, width: usize) -> String {
        format!("{:<width$}", self.name.to_uppercase(), width = width)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Either a level name to look up or an already-resolved level
#[derive(Debug, Clone, Copy)]
pub enum LevelArg<'a> {
    Name(&'a str),
    Level(&'a Level),
}

impl<'a> From<&'a str> for LevelArg<'a> {
    fn from(name: &'a str) -> Self {
        LevelArg::Name(name)
    }
}

impl<'a> From<&'a String> for LevelArg<'a> {
    fn from(name: &'a String) -> Self {
        LevelArg::Name(name.as_str())
    }
}

impl<'a> From<&'a Level> for LevelArg<'a> {
    fn from(level: &'a Level) -> Self {
        LevelArg::Level(level)
    }
}

/// Configuration entry for one level; rank is its position in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDef {
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl LevelDef {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            aliases: Vec::new(),
        }
    }

    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }
}

/// Ordered, read-only table of recognized levels
///
/// Built once at startup and shared by reference between loggers.
///
/// # Example
///
/// ```
/// use dual_sink_logger::LevelTable;
///
/// let table = LevelTable::default();
/// let warn = table.resolve("WARNING").unwrap();
/// assert_eq!(warn.name(), "warn");
/// assert!(table.resolve("verbose").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct LevelTable {
    levels: Vec<Level>,
    index: HashMap<String, usize>,
    label_width: usize,
}

impl LevelTable {
    /// Build a table from definitions ordered least to most severe
    ///
    /// `silent` is appended automatically and may not be defined.
    pub fn from_defs(defs: Vec<LevelDef>) -> Result<Self> {
        let mut levels = Vec::with_capacity(defs.len() + 1);
        let mut index = HashMap::new();

        for (rank, def) in defs.into_iter().enumerate() {
            let name = def.name.to_lowercase();
            if name.is_empty() {
                return Err(LoggerError::config("LevelTable", "level name is empty"));
            }

            let position = levels.len();
            let aliases = def.aliases.iter().map(|a| a.to_lowercase());
            for key in std::iter::once(name.clone()).chain(aliases) {
                if key == SILENT {
                    return Err(LoggerError::config(
                        "LevelTable",
                        "'silent' is reserved and always ranked last",
                    ));
                }
                if index.insert(key.clone(), position).is_some() {
                    return Err(LoggerError::config(
                        "LevelTable",
                        format!("duplicate level name or alias '{}'", key),
                    ));
                }
            }
            levels.push(Level::new(name, rank as u32, def.color));
        }

        for required in REQUIRED_LEVELS {
            if !index.contains_key(required) {
                return Err(LoggerError::config(
                    "LevelTable",
                    format!("missing required level '{}'", required),
                ));
            }
        }

        let label_width = levels.iter().map(|l| l.name().len()).max().unwrap_or(0);

        index.insert(SILENT.to_string(), levels.len());
        levels.push(Level::new(SILENT, levels.len() as u32, "white"));

        Ok(Self {
            levels,
            index,
            label_width,
        })
    }

    /// Resolve a name or alias (case-insensitive); resolved levels pass through
    pub fn resolve<'a>(&self, level: impl Into<LevelArg<'a>>) -> Result<Level> {
        match level.into() {
            LevelArg::Level(level) => Ok(level.clone()),
            LevelArg::Name(name) => self
                .get(name)
                .cloned()
                .ok_or_else(|| LoggerError::unknown_level(name)),
        }
    }

    /// Look up a level by name or alias without cloning
    pub fn get(&self, name: &str) -> Option<&Level> {
        let key = name.trim().to_lowercase();
        self.index.get(&key).map(|&i| &self.levels[i])
    }

    pub fn silent(&self) -> &Level {
        // from_defs always appends silent last
        &self.levels[self.levels.len() - 1]
    }

    /// Width every label is padded to (longest non-silent name)
    pub fn label_width(&self) -> usize {
        self.label_width
    }

    /// Levels in ascending rank, `silent` included
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Symbolic color for a level name
    pub fn color_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(Level::color)
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        let defs = vec![
            LevelDef::new("debug", "blue"),
            LevelDef::new("info", "cyan"),
            LevelDef::new("warn", "yellow").alias("warning"),
            LevelDef::new("error", "red"),
        ];
        // the built-in definitions satisfy every table rule
        match Self::from_defs(defs) {
            Ok(table) => table,
            Err(e) => unreachable!("built-in level table is invalid: {}", e),
        }
    }
}
