//! Integration tests for the dual sink logger
//!
//! These tests verify:
//! - Default console output
//! - Independent console and file thresholds
//! - Prefixed delegates writing through a shared base logger
//! - File output matching console output minus color codes
//! - Construction from JSON configuration

#![cfg(feature = "console")]

use dual_sink_logger::prelude::*;
use dual_sink_logger::{strip_ansi, LevelArg};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn capture(builder: LoggerBuilder) -> (Logger, MemorySink) {
    let console = MemorySink::new();
    let logger = builder
        .console_sink(console.clone())
        .build()
        .expect("Failed to build logger");
    (logger, console)
}

/// File writes are scheduled in the background; poll until `expected` shows up
fn wait_for_file(path: &Path, expected: &str) -> String {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let content = fs::read_to_string(path).unwrap_or_default();
        if content.contains(expected) || Instant::now() > deadline {
            return content;
        }
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn test_default_logger_info_line() {
    let renderer = AnsiRenderer::always();
    let (logger, console) = capture(Logger::builder().renderer(renderer));

    assert_eq!(logger.level().name(), "info");
    assert!(!logger.has_file_sink());

    logger.log("info", msg!["hello", "world"]).unwrap();
    assert_eq!(
        console.contents(),
        format!("{} hello world\n", renderer.paint("INFO ", "cyan"))
    );
}

#[test]
fn test_error_against_thresholds() {
    let (logger, console) = capture(Logger::builder().level("silent"));
    logger.log("error", msg!["hello", "world"]).unwrap();
    assert!(console.is_empty());

    for threshold in ["debug", "info", "warn", "error"] {
        let (logger, console) = capture(Logger::builder().level(threshold));
        logger.log("error", msg!["hello", "world"]).unwrap();
        assert!(
            console.contents().contains("hello world"),
            "threshold {}",
            threshold
        );
    }
}

#[test]
fn test_independent_thresholds_with_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("independent.log");

    let (logger, console) = capture(
        Logger::builder()
            .level("error")
            .file_level("info")
            .log_file(&log_file),
    );

    logger.info("hello world");
    let content = wait_for_file(&log_file, "hello world");

    assert!(console.is_empty());
    assert!(content.ends_with("INFO  hello world\n"), "got {:?}", content);
}

#[test]
fn test_file_only_threshold_keeps_console_default() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("file_only.log");

    let (logger, console) = capture(
        Logger::builder()
            .file_level("error")
            .log_file(&log_file)
            .renderer(PlainRenderer),
    );

    assert_eq!(logger.level().name(), "info");
    logger.info("console only");
    logger.error("both");
    logger.flush().unwrap();

    assert_eq!(console.lines(), ["INFO  console only", "ERROR both"]);
    assert_eq!(fs::read_to_string(&log_file).unwrap(), "ERROR both\n");
}

#[test]
fn test_log_file_is_appended_not_truncated() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("logs").join("app.log");

    for run in 0..2 {
        let (logger, _console) = capture(Logger::builder().log_file(&log_file));
        logger.warn(msg!["run", run]);
    }

    let content = fs::read_to_string(&log_file).unwrap();
    assert_eq!(content, "WARN  run 0\nWARN  run 1\n");
}

#[test]
fn test_synchronous_file_writes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("sync.log");

    let (logger, _console) = capture(Logger::builder().log_file(&log_file).async_file(false));
    logger.error("written before return");

    assert_eq!(
        fs::read_to_string(&log_file).unwrap(),
        "ERROR written before return\n"
    );
}

#[test]
fn test_delegated_logger_prefix() {
    let renderer = AnsiRenderer::always();
    let (logger, console) = capture(Logger::builder().renderer(renderer));
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
fn test_delegated_logger_writes_plain_prefix_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("delegated.log");

    let (logger, console) = capture(
        Logger::builder()
            .level("warn")
            .file_level("debug")
            .log_file(&log_file)
            .renderer(AnsiRenderer::always()),
    );
    let base = Arc::new(logger);
    let db = DelegatedLogger::new(base.clone(), DelegateOptions::new("db").with_color("green"));
    let pool = DelegatedLogger::with_prefix(Arc::new(db.clone()), "pool");

    db.debug(msg!["connected in", 12, "ms"]);
    pool.warn("exhausted");
    base.flush().unwrap();

    assert_eq!(
        fs::read_to_string(&log_file).unwrap(),
        "db DEBUG connected in 12 ms\npool db WARN  exhausted\n"
    );
    assert_eq!(strip_ansi(&console.contents()), "pool db WARN  exhausted\n");
}

#[test]
fn test_file_matches_console_without_colors() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("roundtrip.log");

    let (logger, console) = capture(
        Logger::builder()
            .level("debug")
            .log_file(&log_file)
            .renderer(AnsiRenderer::always()),
    );
    let wrapped = DelegatedLogger::with_prefix(Arc::new(logger), "svc");

    wrapped.debug(msg!["starting", 3, "workers"]);
    wrapped.info(msg!["config", serde_json::json!({"port": 8080})]);
    wrapped.warn(msg!["slow", 1.5, true]);
    wrapped.error(Message::new());
    drop(wrapped);

    let content = fs::read_to_string(&log_file).unwrap();
    assert_ne!(console.contents(), content);
    assert_eq!(strip_ansi(&console.contents()), content);
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn test_identical_calls_produce_identical_lines() {
    let (logger, console) = capture(Logger::builder());
    for _ in 0..3 {
        logger.info(msg!["same", 42, None::<String>]);
    }
    let lines = console.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line == &lines[0]));
}

#[test]
fn test_from_config_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("configured.log");
    let config_file = temp_dir.path().join("logger.json");
    fs::write(
        &config_file,
        format!(
            r#"{{"level": "error", "fileLogLevel": "warning", "logFile": {:?}, "color": "never"}}"#,
            log_file.to_string_lossy()
        ),
    )
    .unwrap();

    let config = LoggerConfig::from_json_file(&config_file).unwrap();
    let logger = Logger::from_config(&config).unwrap();

    assert_eq!(logger.level().name(), "error");
    assert_eq!(logger.file_level().name(), "warn");
    assert!(logger.has_file_sink());

    logger.warn("to file");
    logger.info("nowhere");
    logger.flush().unwrap();
    assert_eq!(fs::read_to_string(&log_file).unwrap(), "WARN  to file\n");
}

#[test]
fn test_from_config_rejects_unknown_level() {
    let config = LoggerConfig::from_json_str(r#"{"fileLevel": "chatty"}"#).unwrap();
    let err = Logger::from_config(&config).unwrap_err();
    assert!(matches!(err, LoggerError::UnknownLevel { ref name } if name == "chatty"));
}

#[test]
fn test_custom_level_table() {
    let table = LevelTable::from_defs(vec![
        LevelDef::new("trace", "bright black"),
        LevelDef::new("debug", "blue"),
        LevelDef::new("info", "cyan"),
        LevelDef::new("warn", "yellow"),
        LevelDef::new("error", "red"),
        LevelDef::new("fatal", "magenta").alias("critical"),
    ])
    .unwrap();

    let (logger, console) = capture(
        Logger::builder()
            .level_table(table)
            .level("trace")
            .renderer(PlainRenderer),
    );

    logger.log("trace", "entering").unwrap();
    logger.log("CRITICAL", "meltdown").unwrap();
    logger.info("aligned");

    assert_eq!(
        console.lines(),
        ["TRACE entering", "FATAL meltdown", "INFO  aligned"]
    );
}

#[test]
fn test_set_levels_at_runtime() {
    let (mut logger, console) = capture(Logger::builder().renderer(PlainRenderer));

    logger.debug("hidden");
    logger.set_level("debug").unwrap();
    logger.debug("shown");
    assert!(logger.set_level("loud").is_err());
    assert_eq!(logger.level().name(), "debug");

    let error = logger.level_table().resolve("error").unwrap();
    logger.set_level(LevelArg::Level(&error)).unwrap();
    logger.warn("hidden again");

    assert_eq!(console.lines(), ["DEBUG shown"]);
}

#[test]
fn test_concurrent_logging_keeps_lines_whole() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("concurrent.log");

    let (logger, console) = capture(Logger::builder().log_file(&log_file).renderer(PlainRenderer));
    let logger = Arc::new(logger);

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                let worker = DelegatedLogger::with_prefix(logger, format!("t{}", t));
                for i in 0..250 {
                    worker.info(msg!["message", i]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    logger.flush().unwrap();

    let file_lines: Vec<String> = fs::read_to_string(&log_file)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(file_lines.len(), 1000);
    assert_eq!(console.lines().len(), 1000);

    for t in 0..4 {
        let prefix = format!("t{} INFO  message ", t);
        let seen: Vec<usize> = file_lines
            .iter()
            .filter_map(|line| line.strip_prefix(&prefix))
            .map(|n| n.parse().unwrap())
            .collect();
        assert_eq!(seen, (0..250).collect::<Vec<_>>(), "thread {} out of order", t);
    }
    assert_eq!(logger.metrics().file_lines(), 1000);
}
