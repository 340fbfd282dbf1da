//! Background-thread sink for fire-and-forget writes
//!
//! Lines are queued on an unbounded channel and written by a worker thread in
//! arrival order, so callers never wait on file I/O. Write failures cannot be
//! returned to the caller; they go to the optional error callback instead.

use crate::core::{LoggerError, Result, Sink};
use crossbeam_channel::{unbounded, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default time to wait for queued lines to drain when the sink is dropped
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Called from the worker thread for every failed write or flush
pub type ErrorCallback = Arc<dyn Fn(&LoggerError) + Send + Sync>;

enum Command {
    Line(String),
    Flush(Sender<Result<()>>),
}

pub struct AsyncSink {
    name: String,
    sender: Option<Sender<Command>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl AsyncSink {
    /// Move `inner` onto a worker thread; failures are reported on stderr
    pub fn spawn<S: Sink + 'static>(inner: S) -> Result<Self> {
        Self::spawn_with(inner, None)
    }

    pub fn spawn_with<S: Sink + 'static>(inner: S, on_error: Option<ErrorCallback>) -> Result<Self> {
        let name = format!("async-{}", inner.name());
        let (sender, receiver) = unbounded::<Command>();

        let handle = thread::Builder::new()
            .name(format!("{}-writer", name))
            .spawn(move || {
                // Drain whatever is already queued in one go, then flush once
                const BATCH_SIZE: usize = 50;

                let mut inner = inner;
                let mut batch = Vec::with_capacity(BATCH_SIZE);

                while let Ok(command) = receiver.recv() {
                    batch.push(command);
                    while batch.len() < BATCH_SIZE {
                        match receiver.try_recv() {
                            Ok(command) => batch.push(command),
                            Err(_) => break,
                        }
                    }

                    Self::process_batch(&mut inner, batch.drain(..), on_error.as_ref());
                }
            })?;

        Ok(Self {
            name,
            sender: Some(sender),
            handle: Some(handle),
        })
    }

    fn process_batch<S: Sink>(
        inner: &mut S,
        batch: impl Iterator<Item = Command>,
        on_error: Option<&ErrorCallback>,
    ) {
        let sink_name = inner.name().to_string();
        let report = |e: &LoggerError| match on_error {
            Some(callback) => callback(e),
            None => eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink_name, e),
        };

        let mut waiters = Vec::new();
        for command in batch {
            match command {
                Command::Line(line) => {
                    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                        inner.append(&line)
                    }));
                    match result {
                        Ok(Ok(())) => {}
                        Ok(Err(e)) => report(&e),
                        Err(panic_info) => {
                            let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                                s.to_string()
                            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                                s.clone()
                            } else {
                                "Unknown panic".to_string()
                            };
                            eprintln!("[LOGGER CRITICAL] Sink panicked while writing: {}", panic_msg);
                        }
                    }
                }
                Command::Flush(waiter) => waiters.push(waiter),
            }
        }

        let flushed = inner.flush();
        if let Err(ref e) = flushed {
            report(e);
        }
        for waiter in waiters {
            let reply = match flushed {
                Ok(()) => Ok(()),
                Err(ref e) => Err(LoggerError::sink_write(
                    sink_name.clone(),
                    std::io::Error::new(std::io::ErrorKind::Other, e.to_string()),
                )),
            };
            let _ = waiter.send(reply);
        }
    }

    /// Stop accepting lines and wait up to `timeout` for the queue to drain
    ///
    /// Returns `true` if the worker finished within the timeout.
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        drop(self.sender.take());

        let Some(handle) = self.handle.take() else {
            return true;
        };

        let start = Instant::now();
        loop {
            if handle.is_finished() {
                if let Err(e) = handle.join() {
                    eprintln!("[LOGGER ERROR] Sink worker thread panicked during shutdown: {:?}", e);
                    return false;
                }
                return true;
            }

            if start.elapsed() >= timeout {
                eprintln!(
                    "[LOGGER WARNING] Sink worker did not finish within {:?}. Some lines may be lost.",
                    timeout
                );
                return false;
            }

            thread::sleep(Duration::from_millis(5));
        }
    }
}

impl Sink for AsyncSink {
    fn append(&mut self, line: &str) -> Result<()> {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| LoggerError::sink_closed(self.name.clone()))?;
        sender
            .send(Command::Line(line.to_string()))
            .map_err(|_| LoggerError::sink_closed(self.name.clone()))
    }

    /// Block until every line queued so far has been written and flushed
    fn flush(&mut self) -> Result<()> {
        let Some(sender) = self.sender.as_ref() else {
            return Ok(());
        };

        let (ack_tx, ack_rx) = crossbeam_channel::bounded(1);
        sender
            .send(Command::Flush(ack_tx))
            .map_err(|_| LoggerError::sink_closed(self.name.clone()))?;
        ack_rx
            .recv()
            .map_err(|_| LoggerError::sink_closed(self.name.clone()))?
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for AsyncSink {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
    }
}
