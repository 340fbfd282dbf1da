//! Opt-in timestamp prefix for log lines
//!
//! A logger without a [`TimestampFormat`] writes no timestamp, so identical
//! calls produce identical lines. When one is configured the stamp is taken
//! once per call and shared by the console and file lines, which keeps the
//! two sinks comparable line for line.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// How the leading stamp of a line is rendered
///
/// In configuration this is `"iso8601"`, `"rfc3339"`, `"unix"`,
/// `"unixmillis"` or `{"custom": "<strftime pattern>"}`.
///
/// ```
/// use dual_sink_logger::TimestampFormat;
///
/// let stamp = TimestampFormat::UnixMillis.now();
/// assert!(stamp.parse::<i64>().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampFormat {
    /// UTC with millisecond precision and a `Z` suffix
    #[default]
    Iso8601,
    Rfc3339,
    /// Seconds since the epoch
    Unix,
    UnixMillis,
    Custom(String),
}

impl TimestampFormat {
    /// Reject custom patterns chrono cannot render
    ///
    /// Called when a logger is built, so a bad pattern fails construction
    /// instead of surfacing on the first log call.
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(pattern) = self {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "TimestampFormat",
                    format!("invalid strftime pattern '{}'", pattern),
                ));
            }
        }
        Ok(())
    }

    /// Render `at`; a pattern that fails to render falls back to ISO 8601
    #[must_use]
    pub fn format(&self, at: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => iso8601(at),
            TimestampFormat::Rfc3339 => at.to_rfc3339(),
            TimestampFormat::Unix => at.timestamp().to_string(),
            TimestampFormat::UnixMillis => at.timestamp_millis().to_string(),
            TimestampFormat::Custom(pattern) => {
                let mut stamp = String::new();
                match write!(stamp, "{}", at.format(pattern)) {
                    Ok(()) => stamp,
                    Err(_) => iso8601(at),
                }
            }
        }
    }

    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Utc::now())
    }
}

fn iso8601(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2023-11-14 22:13:20.250 UTC
    fn stamp_at() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 250_000_000).unwrap()
    }

    #[test]
    fn test_builtin_formats() {
        let at = stamp_at();
        assert_eq!(TimestampFormat::Iso8601.format(&at), "2023-11-14T22:13:20.250Z");
        assert_eq!(TimestampFormat::Unix.format(&at), "1700000000");
        assert_eq!(TimestampFormat::UnixMillis.format(&at), "1700000000250");

        let rfc = TimestampFormat::Rfc3339.format(&at);
        assert!(rfc.starts_with("2023-11-14T22:13:20"), "got {}", rfc);
        assert!(rfc.ends_with("+00:00"), "got {}", rfc);
    }

    #[test]
    fn test_custom_pattern() {
        let format = TimestampFormat::Custom("[%H:%M]".to_string());
        assert!(format.validate().is_ok());
        assert_eq!(format.format(&stamp_at()), "[22:13]");
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let format = TimestampFormat::Custom("%Q".to_string());
        assert!(matches!(
            format.validate(),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_invalid_pattern_never_panics() {
        let format = TimestampFormat::Custom("at %Q".to_string());
        let rendered = std::panic::catch_unwind(|| format.format(&stamp_at()));
        assert_eq!(rendered.unwrap(), "2023-11-14T22:13:20.250Z");
    }

    #[test]
    fn test_config_names() {
        let format: TimestampFormat = serde_json::from_str("\"unixmillis\"").unwrap();
        assert_eq!(format, TimestampFormat::UnixMillis);

        let format: TimestampFormat = serde_json::from_str(r#"{"custom": "%d/%m"}"#).unwrap();
        assert_eq!(format, TimestampFormat::Custom("%d/%m".to_string()));

        assert_eq!(TimestampFormat::default(), TimestampFormat::Iso8601);
    }
}
