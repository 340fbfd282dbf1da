//! Main logger implementation
//!
//! A [`Logger`] holds two independent thresholds, one for the console sink
//! and one for the optional file sink. A message is formatted once per sink
//! that accepts it: colored for the console, plain for the file.

use super::{
    color::{default_renderer, ColorMode, ColorRenderer, PlainRenderer},
    config::LoggerConfig,
    error::{LoggerError, Result},
    log::Log,
    log_level::{Level, LevelArg, LevelTable},
    message::Message,
    metrics::LoggerMetrics,
    sink::Sink,
    timestamp::TimestampFormat,
};
use crate::sinks::{AsyncSink, ConsoleSink, ErrorCallback, FileSink};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type SharedSink = Arc<Mutex<Box<dyn Sink>>>;

pub struct Logger {
    table: Arc<LevelTable>,
    console_level: Level,
    file_level: Level,
    /// Lower of the two thresholds, checked before any formatting
    effective_level: Level,
    console: SharedSink,
    file: Option<Mutex<Box<dyn Sink>>>,
    renderer: Arc<dyn ColorRenderer>,
    colorize_file: bool,
    timestamp: Option<TimestampFormat>,
    metrics: Arc<LoggerMetrics>,
    reporter: Arc<FailureReporter>,
}

impl Logger {
    /// Console threshold `info`, no file sink
    #[must_use]
    pub fn new() -> Self {
        match Self::builder().build() {
            Ok(logger) => logger,
            Err(e) => unreachable!("default logger configuration is invalid: {}", e),
        }
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Build a logger from a configuration snapshot
    ///
    /// Fails with [`LoggerError::UnknownLevel`] if either threshold names an
    /// unknown level, and with [`LoggerError::InvalidConfiguration`] for a
    /// timestamp pattern that cannot be rendered.
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        LoggerBuilder::from_config(config)?.build()
    }

    /// Console threshold
    pub fn level(&self) -> &Level {
        &self.console_level
    }

    /// File threshold, kept even when no file sink is configured
    pub fn file_level(&self) -> &Level {
        &self.file_level
    }

    pub fn effective_level(&self) -> &Level {
        &self.effective_level
    }

    pub fn has_file_sink(&self) -> bool {
        self.file.is_some()
    }

    pub fn level_table(&self) -> &Arc<LevelTable> {
        &self.table
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Block until every line logged so far has reached its sink
    pub fn flush(&self) -> Result<()> {
        if let Some(file) = &self.file {
            file.lock().flush()?;
        }
        self.console.lock().flush()
    }

    /// Change the console threshold; the file threshold is left alone
    pub fn set_level<'a>(&mut self, level: impl Into<LevelArg<'a>>) -> Result<()> {
        self.console_level = self.table.resolve(level)?;
        self.reporter
            .console_silent
            .store(self.console_level.is_silent(), Ordering::Relaxed);
        self.update_effective_level();
        Ok(())
    }

    /// Change the file threshold; the console threshold is left alone
    pub fn set_file_level<'a>(&mut self, level: impl Into<LevelArg<'a>>) -> Result<()> {
        self.file_level = self.table.resolve(level)?;
        self.update_effective_level();
        Ok(())
    }

    fn update_effective_level(&mut self) {
        self.effective_level = lower_of(&self.console_level, &self.file_level).clone();
    }

    /// Render one output line
    ///
    /// `[<timestamp> ][<prefix> ...]<LABEL>[ <body>]\n`
    fn format_line(
        &self,
        level: &Level,
        message: &Message,
        body: &str,
        timestamp: Option<&str>,
        renderer: &dyn ColorRenderer,
    ) -> String {
        let mut line = String::with_capacity(body.len() + 32);

        if let Some(timestamp) = timestamp {
            line.push_str(timestamp);
            line.push(' ');
        }
        for prefix in message.prefixes() {
            line.push_str(&renderer.paint(&prefix.text, &prefix.color));
            line.push(' ');
        }
        line.push_str(&renderer.paint(&level.label(self.table.label_width()), level.color()));
        if !body.is_empty() {
            line.push(' ');
            line.push_str(body);
        }
        line.push('\n');
        line
    }

    fn write_console(&self, line: &str) {
        match self.console.lock().append(line) {
            Ok(()) => {
                self.metrics.record_console_line();
            }
            Err(_) => {
                // nowhere left to report a console failure
                self.metrics.record_write_failure();
            }
        }
    }

    fn write_file(&self, file: &Mutex<Box<dyn Sink>>, line: &str) {
        match file.lock().append(line) {
            Ok(()) => {
                self.metrics.record_file_line();
            }
            Err(e) => self.reporter.report(&e),
        }
    }
}

impl Log for Logger {
    fn log_message(&self, level: LevelArg<'_>, message: Message) -> Result<()> {
        let level = self.table.resolve(level)?;

        if !level.passes(&self.effective_level) {
            self.metrics.record_filtered();
            return Ok(());
        }

        let to_console = level.passes(&self.console_level);
        let file = self.file.as_ref().filter(|_| level.passes(&self.file_level));
        if !to_console && file.is_none() {
            self.metrics.record_filtered();
            return Ok(());
        }

        let body = message.body();
        let timestamp = self.timestamp.as_ref().map(TimestampFormat::now);

        let timestamp = timestamp.as_deref();

        if to_console {
            let line = self.format_line(&level, &message, &body, timestamp, &*self.renderer);
            self.write_console(&line);
        }

        if let Some(file) = file {
            let renderer: &dyn ColorRenderer = if self.colorize_file {
                &*self.renderer
            } else {
                &PlainRenderer
            };
            let line = self.format_line(&level, &message, &body, timestamp, renderer);
            self.write_file(file, &line);
        }

        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.console_level.name())
            .field("file_level", &self.file_level.name())
            .field("has_file_sink", &self.has_file_sink())
            .field("colorize_file", &self.colorize_file)
            .finish()
    }
}

fn lower_of<'a>(a: &'a Level, b: &'a Level) -> &'a Level {
    if b.rank() < a.rank() {
        b
    } else {
        a
    }
}

/// Surfaces the first file-sink failure as a single console warning
///
/// Later failures are only counted, so a broken disk cannot flood the
/// console or loop back into the logging path.
struct FailureReporter {
    console: SharedSink,
    warn_label: String,
    target: String,
    console_silent: AtomicBool,
    reported: AtomicBool,
    metrics: Arc<LoggerMetrics>,
}

impl FailureReporter {
    fn report(&self, error: &LoggerError) {
        self.metrics.record_write_failure();

        if self.reported.swap(true, Ordering::AcqRel) {
            return;
        }
        if self.console_silent.load(Ordering::Relaxed) {
            return;
        }

        let line = format!(
            "{} failed to write to log file {}: {}; further file errors are suppressed\n",
            self.warn_label, self.target, error
        );
        if self.console.lock().append(&line).is_ok() {
            self.metrics.record_failure_reported();
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```no_run
/// use dual_sink_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .level("error")
///     .file_level("debug")
///     .log_file("/var/log/app.log")
///     .build()?;
///
/// logger.debug("only in the file");
/// logger.error("in both");
/// # Ok::<(), LoggerError>(())
/// ```
pub struct LoggerBuilder {
    level: Option<String>,
    file_level: Option<String>,
    log_file: Option<PathBuf>,
    file_sink: Option<Box<dyn Sink>>,
    console_sink: Option<Box<dyn Sink>>,
    table: Option<Arc<LevelTable>>,
    renderer: Option<Arc<dyn ColorRenderer>>,
    color_mode: ColorMode,
    colorize_file: bool,
    async_file: bool,
    timestamp: Option<TimestampFormat>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: None,
            file_level: None,
            log_file: None,
            file_sink: None,
            console_sink: None,
            table: None,
            renderer: None,
            color_mode: ColorMode::Auto,
            colorize_file: false,
            async_file: true,
            timestamp: None,
        }
    }

    /// Start from a configuration snapshot
    ///
    /// Fails only if the configured level table is invalid.
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        let mut builder = Self::new()
            .color_mode(config.color)
            .colorize_file(config.colorize_file);
        builder.level = config.level.clone();
        builder.file_level = config.file_level.clone();
        builder.log_file = config.log_file.clone();
        builder.timestamp = config.timestamp.clone();
        if config.levels.is_some() {
            builder.table = Some(Arc::new(config.level_table()?));
        }
        Ok(builder)
    }

    /// Console threshold (default `info`)
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// File threshold (default: the console threshold)
    #[must_use = "builder methods return a new value"]
    pub fn file_level(mut self, level: impl Into<String>) -> Self {
        self.file_level = Some(level.into());
        self
    }

    /// Append to this path, creating it if absent
    #[must_use = "builder methods return a new value"]
    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Use a custom sink as the file sink; takes precedence over `log_file`
    #[must_use = "builder methods return a new value"]
    pub fn file_sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.file_sink = Some(Box::new(sink));
        self
    }

    /// Replace stdout as the console sink
    #[must_use = "builder methods return a new value"]
    pub fn console_sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.console_sink = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level_table(mut self, table: impl Into<Arc<LevelTable>>) -> Self {
        self.table = Some(table.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn renderer<R: ColorRenderer + 'static>(mut self, renderer: R) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_renderer(mut self, renderer: Arc<dyn ColorRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Color mode for the default renderer; ignored when a renderer is set
    #[must_use = "builder methods return a new value"]
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Keep color escapes in file output
    #[must_use = "builder methods return a new value"]
    pub fn colorize_file(mut self, colorize: bool) -> Self {
        self.colorize_file = colorize;
        self
    }

    /// Write the file sink from a background thread (default `true`)
    ///
    /// When disabled, each file line is written and flushed before the log
    /// call returns.
    #[must_use = "builder methods return a new value"]
    pub fn async_file(mut self, enabled: bool) -> Self {
        self.async_file = enabled;
        self
    }

    /// Prefix every line with a timestamp
    #[must_use = "builder methods return a new value"]
    pub fn timestamp(mut self, format: TimestampFormat) -> Self {
        self.timestamp = Some(format);
        self
    }

    /// Build the Logger
    ///
    /// Unknown level names and unrenderable timestamp patterns fail here. A
    /// log file that cannot be opened does not: the logger is built without a
    /// file sink and the failure is reported once on the console.
    pub fn build(self) -> Result<Logger> {
        if let Some(format) = &self.timestamp {
            format.validate()?;
        }
        let table = self.table.unwrap_or_else(|| Arc::new(LevelTable::default()));

        let console_level = table.resolve(self.level.as_deref().unwrap_or("info"))?;
        let file_level = match self.file_level.as_deref() {
            Some(name) => table.resolve(name)?,
            None => console_level.clone(),
        };
        let effective_level = lower_of(&console_level, &file_level).clone();

        let renderer = self
            .renderer
            .unwrap_or_else(|| default_renderer(self.color_mode));
        let console: SharedSink = Arc::new(Mutex::new(
            self.console_sink
                .unwrap_or_else(|| Box::new(ConsoleSink::stdout())),
        ));
        let metrics = Arc::new(LoggerMetrics::new());

        let warn = table.resolve("warn")?;
        let target = match (&self.file_sink, &self.log_file) {
            (Some(sink), _) => format!("sink '{}'", sink.name()),
            (None, Some(path)) => format!("'{}'", path.display()),
            (None, None) => String::new(),
        };
        let reporter = Arc::new(FailureReporter {
            console: Arc::clone(&console),
            warn_label: renderer.paint(&warn.label(table.label_width()), warn.color()),
            target,
            console_silent: AtomicBool::new(console_level.is_silent()),
            reported: AtomicBool::new(false),
            metrics: Arc::clone(&metrics),
        });

        let file = Self::open_file_sink(self.file_sink, self.log_file, self.async_file, &reporter)
            .map(Mutex::new);

        Ok(Logger {
            table,
            console_level,
            file_level,
            effective_level,
            console,
            file,
            renderer,
            colorize_file: self.colorize_file,
            timestamp: self.timestamp,
            metrics,
            reporter,
        })
    }

    fn open_file_sink(
        custom: Option<Box<dyn Sink>>,
        path: Option<PathBuf>,
        async_file: bool,
        reporter: &Arc<FailureReporter>,
    ) -> Option<Box<dyn Sink>> {
        let sink: Box<dyn Sink> = match (custom, path) {
            (Some(sink), _) => sink,
            (None, Some(path)) => match FileSink::new(&path) {
                Ok(sink) => Box::new(sink.with_auto_flush(!async_file)),
                Err(e) => {
                    reporter.report(&e);
                    return None;
                }
            },
            (None, None) => return None,
        };

        if !async_file {
            return Some(sink);
        }

        let callback_reporter = Arc::clone(reporter);
        let on_error: ErrorCallback = Arc::new(move |e: &LoggerError| callback_reporter.report(e));
        match AsyncSink::spawn_with(sink, Some(on_error)) {
            Ok(sink) => Some(Box::new(sink)),
            Err(e) => {
                reporter.report(&e);
                None
            }
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
