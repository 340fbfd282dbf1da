//! The capability shared by every logger
//!
//! [`Log`] is the object-safe core (`Arc<dyn Log>` is what delegates wrap);
//! [`LogExt`] layers the generic `log`/`debug`/`info`/`warn`/`error` surface
//! on top of it for every implementor, trait objects included.

use super::{error::Result, log_level::LevelArg, message::Message};
use std::sync::Arc;

pub trait Log: Send + Sync {
    /// Filter, format and dispatch one message
    ///
    /// Fails only when `level` names no known level.
    fn log_message(&self, level: LevelArg<'_>, message: Message) -> Result<()>;
}

impl<T: Log + ?Sized> Log for Arc<T> {
    fn log_message(&self, level: LevelArg<'_>, message: Message) -> Result<()> {
        (**self).log_message(level, message)
    }
}

impl<T: Log + ?Sized> Log for &T {
    fn log_message(&self, level: LevelArg<'_>, message: Message) -> Result<()> {
        (**self).log_message(level, message)
    }
}

pub trait LogExt: Log {
    /// Log at a level given by name (any case) or as a resolved [`Level`](super::Level)
    ///
    /// # Example
    ///
    /// ```
    /// use dual_sink_logger::prelude::*;
    ///
    /// let logger = Logger::new();
    /// logger.log("INFO", msg!["listening on port", 8080]).unwrap();
    /// assert!(logger.log("verbose", "nope").is_err());
    /// ```
    fn log<'a>(&self, level: impl Into<LevelArg<'a>>, message: impl Into<Message>) -> Result<()> {
        self.log_message(level.into(), message.into())
    }

    // The four built-in names are guaranteed by every LevelTable, so these
    // calls cannot fail on a Logger.

    fn debug(&self, message: impl Into<Message>) {
        let _ = self.log_message(LevelArg::Name("debug"), message.into());
    }

    fn info(&self, message: impl Into<Message>) {
        let _ = self.log_message(LevelArg::Name("info"), message.into());
    }

    fn warn(&self, message: impl Into<Message>) {
        let _ = self.log_message(LevelArg::Name("warn"), message.into());
    }

    fn error(&self, message: impl Into<Message>) {
        let _ = self.log_message(LevelArg::Name("error"), message.into());
    }
}

impl<T: Log + ?Sized> LogExt for T {}
