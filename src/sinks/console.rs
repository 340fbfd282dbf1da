//! Console sink implementation

use crate::core::{Result, Sink};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Writes each line synchronously to the process's standard output
pub struct ConsoleSink {
    target: ConsoleTarget,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::stdout()
    }

    pub fn stdout() -> Self {
        Self {
            target: ConsoleTarget::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            target: ConsoleTarget::Stderr,
        }
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn append(&mut self, line: &str) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => {
                let mut out = std::io::stdout().lock();
                out.write_all(line.as_bytes())?;
                out.flush()?;
            }
            ConsoleTarget::Stderr => {
                let mut out = std::io::stderr().lock();
                out.write_all(line.as_bytes())?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => std::io::stdout().flush()?,
            ConsoleTarget::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.target {
            ConsoleTarget::Stdout => "stdout",
            ConsoleTarget::Stderr => "stderr",
        }
    }
}
