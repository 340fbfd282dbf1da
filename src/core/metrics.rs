//! Logger metrics for observability
//!
//! Counters for lines written per sink, messages filtered before formatting
//! and sink write failures.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use dual_sink_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_console_line();
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.console_lines(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines handed to the console sink
    console_lines: AtomicU64,

    /// Lines handed to the file sink
    file_lines: AtomicU64,

    /// Messages rejected by the effective level before formatting
    filtered: AtomicU64,

    /// Failed console or file writes
    write_failures: AtomicU64,

    /// Failures surfaced to the user as a console warning
    failures_reported: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            console_lines: AtomicU64::new(0),
            file_lines: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            failures_reported: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn console_lines(&self) -> u64 {
        self.console_lines.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_lines(&self) -> u64 {
        self.file_lines.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failures_reported(&self) -> u64 {
        self.failures_reported.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_console_line(&self) -> u64 {
        self.console_lines.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_line(&self) -> u64 {
        self.file_lines.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed write; returns the previous failure count
    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failure_reported(&self) -> u64 {
        self.failures_reported.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.console_lines.store(0, Ordering::Relaxed);
        self.file_lines.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.failures_reported.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            console_lines: AtomicU64::new(self.console_lines()),
            file_lines: AtomicU64::new(self.file_lines()),
            filtered: AtomicU64::new(self.filtered()),
            write_failures: AtomicU64::new(self.write_failures()),
            failures_reported: AtomicU64::new(self.failures_reported()),
        }
    }
}
