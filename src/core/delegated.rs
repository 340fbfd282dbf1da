//! Prefixed loggers for component-scoped output
//!
//! A [`DelegatedLogger`] owns no level or sink state. It adds its prefix to
//! each message and hands the call to the logger it wraps, so filtering,
//! coloring and sink fan-out all stay with the base [`Logger`](super::Logger).

use super::{
    error::Result,
    log::Log,
    log_level::LevelArg,
    message::{Message, Prefix},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Prefix and prefix color for a [`DelegatedLogger`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegateOptions {
    pub prefix: String,
    #[serde(default = "DelegateOptions::default_color")]
    pub prefix_color: String,
}

impl DelegateOptions {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            prefix_color: Self::default_color(),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.prefix_color = color.into();
        self
    }

    fn default_color() -> String {
        "white".to_string()
    }
}

/// Wraps another logger with a fixed colored prefix
///
/// The wrapped logger is shared, not owned. Wrapping a delegate again adds a
/// second prefix; the outermost wrapper's prefix is printed first.
///
/// # Example
///
/// ```
/// use dual_sink_logger::prelude::*;
/// use std::sync::Arc;
///
/// let captured = MemorySink::new();
/// let base = Arc::new(
///     Logger::builder()
///         .console_sink(captured.clone())
///         .renderer(PlainRenderer)
///         .build()
///         .unwrap(),
/// );
///
/// let http = DelegatedLogger::new(base.clone(), DelegateOptions::new("http"));
/// let router = DelegatedLogger::new(Arc::new(http), DelegateOptions::new("router"));
///
/// router.info("matched /health");
/// assert_eq!(captured.contents(), "router http INFO  matched /health\n");
/// ```
#[derive(Clone)]
pub struct DelegatedLogger {
    inner: Arc<dyn Log>,
    prefix: Prefix,
}

impl DelegatedLogger {
    pub fn new(inner: Arc<dyn Log>, options: DelegateOptions) -> Self {
        Self {
            inner,
            prefix: Prefix::new(options.prefix, options.prefix_color),
        }
    }

    /// Shorthand for a prefix in the default color
    pub fn with_prefix(inner: Arc<dyn Log>, prefix: impl Into<String>) -> Self {
        Self::new(inner, DelegateOptions::new(prefix))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix.text
    }

    pub fn prefix_color(&self) -> &str {
        &self.prefix.color
    }

    pub fn inner(&self) -> &Arc<dyn Log> {
        &self.inner
    }
}

impl Log for DelegatedLogger {
    fn log_message(&self, level: LevelArg<'_>, mut message: Message) -> Result<()> {
        message.push_prefix(self.prefix.clone());
        self.inner.log_message(level, message)
    }
}

impl std::fmt::Debug for DelegatedLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelegatedLogger")
            .field("prefix", &self.prefix.text)
            .field("prefix_color", &self.prefix.color)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogExt, Logger, LoggerError, PlainRenderer};
    use crate::msg;
    use crate::sinks::MemorySink;
    use parking_lot::Mutex;

    /// Records what reaches it instead of printing
    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(String, Vec<String>, String)>>,
    }

    impl Log for Recorder {
        fn log_message(&self, level: LevelArg<'_>, message: Message) -> Result<()> {
            let level = match level {
                LevelArg::Name(name) => name.to_string(),
                LevelArg::Level(level) => level.name().to_string(),
            };
            let prefixes = message.prefixes().iter().map(|p| p.text.clone()).collect();
            self.calls.lock().push((level, prefixes, message.body()));
            Ok(())
        }
    }

    fn base() -> (Arc<Logger>, MemorySink) {
        let console = MemorySink::new();
        let logger = Logger::builder()
            .console_sink(console.clone())
            .renderer(PlainRenderer)
            .build()
            .unwrap();
        (Arc::new(logger), console)
    }

    #[test]
    fn test_forwards_level_and_parts() {
        let recorder = Arc::new(Recorder::default());
        let wrapped = DelegatedLogger::with_prefix(recorder.clone(), "db");

        wrapped.warn(msg!["slow query", 250, "ms"]);

        let calls = recorder.calls.lock();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "warn");
        assert_eq!(calls[0].1, ["db"]);
        assert_eq!(calls[0].2, "slow query 250 ms");
    }

    #[test]
    fn test_prefix_precedes_label() {
        let (logger, console) = base();
        let wrapped = DelegatedLogger::new(
            logger.clone(),
            DelegateOptions::new("wrapped").with_color("white"),
        );

        wrapped.info("hello world");
        assert_eq!(console.contents(), "wrapped INFO  hello world\n");
    }

    #[test]
    fn test_filtering_stays_with_inner() {
        let (logger, console) = base();
        let wrapped = DelegatedLogger::with_prefix(logger, "quiet");

        wrapped.debug("not shown");
        assert!(console.is_empty());
        assert!(matches!(
            wrapped.log("verbose", "x"),
            Err(LoggerError::UnknownLevel { .. })
        ));
    }

    #[test]
    fn test_nesting_composes() {
        let (logger, console) = base();
        let first = DelegatedLogger::with_prefix(logger, "a");
        let nested = DelegatedLogger::with_prefix(Arc::new(first.clone()), "b");
        let deeper = DelegatedLogger::with_prefix(Arc::new(nested.clone()), "c");

        first.error("one");
        nested.error("two");
        deeper.error("three");

        assert_eq!(
            console.lines(),
            ["a ERROR one", "b a ERROR two", "c b a ERROR three"]
        );
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_prefix_colored_independently() {
        use crate::core::{AnsiRenderer, ColorRenderer};

        let console = MemorySink::new();
        let renderer = AnsiRenderer::always();
        let logger = Logger::builder()
            .console_sink(console.clone())
            .renderer(renderer)
            .build()
            .unwrap();
        let wrapped = DelegatedLogger::new(
            Arc::new(logger),
            DelegateOptions::new("wrapped").with_color("white"),
        );

        wrapped.info("hello world");
        assert_eq!(
            console.contents(),
            format!(
                "{} {} hello world\n",
                renderer.paint("wrapped", "white"),
                renderer.paint("INFO ", "cyan")
            )
        );
    }

    #[test]
    fn test_options_deserialize() {
        let options: DelegateOptions =
            serde_json::from_str(r#"{"prefix": "worker", "prefixColor": "magenta"}"#).unwrap();
        assert_eq!(options, DelegateOptions::new("worker").with_color("magenta"));

        let options: DelegateOptions = serde_json::from_str(r#"{"prefix": "worker"}"#).unwrap();
        assert_eq!(options.prefix_color, "white");
    }
}
