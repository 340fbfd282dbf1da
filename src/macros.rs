//! Logging macros for ergonomic message construction.
//!
//! [`msg!`](crate::msg) builds a multi-part [`Message`](crate::Message) from
//! any mix of values; the level macros format like `format!`.
//!
//! # Examples
//!
//! ```
//! use dual_sink_logger::prelude::*;
//! use dual_sink_logger::info;
//!
//! let logger = Logger::new();
//!
//! // Parts are joined with single spaces
//! logger.info(msg!["listening on", "0.0.0.0", 8080]);
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Build a [`Message`](crate::Message) from parts.
///
/// Each argument goes through [`Part::from`](crate::Part), so strings,
/// integers, floats, booleans, `Option`s and `serde_json::Value`s can be
/// mixed freely.
///
/// # Examples
///
/// ```
/// use dual_sink_logger::msg;
///
/// let message = msg!["retry", 3, "of", 5, true, None::<i32>];
/// assert_eq!(message.body(), "retry 3 of 5 true null");
/// assert!(msg![].parts().is_empty());
/// ```
#[macro_export]
macro_rules! msg {
    () => {
        $crate::core::Message::new()
    };
    ($($part:expr),+ $(,)?) => {
        $crate::core::Message::from_parts(vec![$($crate::core::Part::from($part)),+])
    };
}

/// Log a formatted message at a level given by name.
///
/// Evaluates to the `Result` of the call, which is an error only for an
/// unknown level name.
///
/// # Examples
///
/// ```
/// # use dual_sink_logger::prelude::*;
/// # let logger = Logger::new();
/// use dual_sink_logger::log;
/// log!(logger, "info", "Simple message").unwrap();
/// log!(logger, "ERROR", "Error code: {}", 500).unwrap();
/// assert!(log!(logger, "verbose", "nope").is_err());
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::core::LogExt::log(&$logger, $level, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use dual_sink_logger::prelude::*;
/// # let logger = Logger::builder().level("debug").build().unwrap();
/// use dual_sink_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::core::LogExt::debug(&$logger, format!($($arg)+))
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use dual_sink_logger::prelude::*;
/// # let logger = Logger::new();
/// use dual_sink_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::core::LogExt::info(&$logger, format!($($arg)+))
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use dual_sink_logger::prelude::*;
/// # let logger = Logger::new();
/// use dual_sink_logger::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::core::LogExt::warn(&$logger, format!($($arg)+))
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use dual_sink_logger::prelude::*;
/// # let logger = Logger::new();
/// use dual_sink_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::core::LogExt::error(&$logger, format!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Logger, PlainRenderer};
    use crate::sinks::MemorySink;
    use std::sync::Arc;

    fn capture(level: &str) -> (Logger, MemorySink) {
        let console = MemorySink::new();
        let logger = Logger::builder()
            .level(level)
            .console_sink(console.clone())
            .renderer(PlainRenderer)
            .build()
            .unwrap();
        (logger, console)
    }

    #[test]
    fn test_msg_macro() {
        assert_eq!(msg!["a", 1, 2.5, false].body(), "a 1 2.5 false");
        assert_eq!(msg!["trailing",].parts().len(), 1);
        assert_eq!(msg![].body(), "");
    }

    #[test]
    fn test_log_macro() {
        let (logger, console) = capture("info");
        log!(logger, "info", "Test message").unwrap();
        log!(logger, "Warning", "Formatted: {}", 42).unwrap();
        assert!(log!(logger, "trace", "unknown").is_err());
        assert_eq!(console.lines(), ["INFO  Test message", "WARN  Formatted: 42"]);
    }

    #[test]
    fn test_level_macros() {
        let (logger, console) = capture("debug");
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);

        assert_eq!(
            console.lines(),
            [
                "DEBUG Count: 5",
                "INFO  Items: 100",
                "WARN  Retry 1 of 3",
                "ERROR Code: 500"
            ]
        );
    }

    #[test]
    fn test_macros_accept_shared_loggers() {
        let (logger, console) = capture("info");
        let shared = Arc::new(logger);
        info!(shared, "via arc");
        assert_eq!(console.contents(), "INFO  via arc\n");
    }
}
