//! Color rendering for level labels and prefixes
//!
//! Colors are referred to by symbolic name (`"cyan"`, `"bright red"`, ...).
//! A [`ColorRenderer`] turns a name into terminal output; unknown names and
//! disabled colors render the text unchanged.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// Wraps text in the escape sequence for a symbolic color name
pub trait ColorRenderer: Send + Sync {
    fn paint(&self, text: &str, color: &str) -> String;
}

/// Renderer that never colors
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl ColorRenderer for PlainRenderer {
    fn paint(&self, text: &str, _color: &str) -> String {
        text.to_string()
    }
}

/// When to emit ANSI escapes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow the terminal and the `NO_COLOR` / `CLICOLOR` environment
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(format!("Invalid color mode: '{}'", s)),
        }
    }
}

#[cfg(feature = "console")]
pub use ansi::AnsiRenderer;

#[cfg(feature = "console")]
mod ansi {
    use super::{ColorMode, ColorRenderer};
    use colored::{Color, Colorize};
    use std::str::FromStr;

    /// ANSI renderer backed by `colored`
    #[derive(Debug, Clone, Copy, Default)]
    pub struct AnsiRenderer {
        mode: ColorMode,
    }

    impl AnsiRenderer {
        pub fn new(mode: ColorMode) -> Self {
            Self { mode }
        }

        /// Always emit escapes, regardless of terminal detection
        pub fn always() -> Self {
            Self::new(ColorMode::Always)
        }

        pub fn mode(&self) -> ColorMode {
            self.mode
        }
    }

    impl ColorRenderer for AnsiRenderer {
        fn paint(&self, text: &str, color: &str) -> String {
            let Ok(color) = Color::from_str(color) else {
                return text.to_string();
            };

            match self.mode {
                ColorMode::Never => text.to_string(),
                ColorMode::Auto => text.color(color).to_string(),
                ColorMode::Always => format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), text),
            }
        }
    }
}

/// Renderer used when none is configured
pub fn default_renderer(mode: ColorMode) -> Arc<dyn ColorRenderer> {
    #[cfg(feature = "console")]
    {
        Arc::new(AnsiRenderer::new(mode))
    }
    #[cfg(not(feature = "console"))]
    {
        let _ = mode;
        Arc::new(PlainRenderer)
    }
}

/// Remove ANSI SGR sequences from `text`
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
