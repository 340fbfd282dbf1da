//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends lines to a file, creating it (and its parent directories) if absent
pub struct FileSink {
    writer: Option<BufWriter<File>>,
    path: PathBuf,
    auto_flush: bool,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            path,
            auto_flush: false,
        })
    }

    /// Flush after every line instead of relying on the caller
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dual_sink_logger::sinks::FileSink;
    ///
    /// let sink = FileSink::new("/var/log/app.log")
    ///     .unwrap()
    ///     .with_auto_flush(true);
    /// ```
    #[must_use]
    pub fn with_auto_flush(mut self, auto_flush: bool) -> Self {
        self.auto_flush = auto_flush;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn append(&mut self, line: &str) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::sink_closed("file"))?;

        writer
            .write_all(line.as_bytes())
            .map_err(|e| LoggerError::sink_write("file", e))?;

        if self.auto_flush {
            writer.flush().map_err(|e| LoggerError::sink_write("file", e))?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush().map_err(|e| LoggerError::sink_write("file", e))?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
