//! Channel management for the shared audit logger.
//!
//! # Data Flow
//! ```text
//! Logger::log(severity, payload)
//!     → minimum-severity gate
//!     → envelope: timestamp \t [pid] \t SEVERITY \t payload
//!     → fan-out to every attached channel (stderr, per-job files)
//! ```
//!
//! # Design Decisions
//! - One logical logger per process; tests build isolated instances
//! - The channel list lock spans the whole fan-out, so a line is never
//!   interleaved with another call's line on any channel
//! - File channels are scoped: an RAII guard detaches the channel and
//!   closes the handle on every exit path, including unwinding
//! - A failed write to one channel is reported via `tracing` and leaves
//!   the other channels usable

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::{Mutex, OnceLock};

use chrono::Local;

use crate::config::LoggingConfig;
use crate::error::AuditError;
use crate::severity::{register_severities, Severity};

/// An attached output destination for log records.
#[derive(Debug)]
struct Channel {
    id: u64,
    sink: Sink,
}

#[derive(Debug)]
enum Sink {
    Stderr,
    LogFile(File),
}

impl Channel {
    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        match &mut self.sink {
            Sink::Stderr => std::io::stderr().lock().write_all(line.as_bytes()),
            Sink::LogFile(file) => file.write_all(line.as_bytes()),
        }
    }
}

/// The shared audit logger: one minimum-severity gate, many channels.
#[derive(Debug)]
pub struct Logger {
    min_rank: AtomicU8,
    next_channel_id: AtomicU64,
    channels: Mutex<Vec<Channel>>,
}

impl Logger {
    /// Build a logger with no channels and a `Debug` minimum severity.
    pub fn new() -> Self {
        Self {
            min_rank: AtomicU8::new(Severity::Debug.rank()),
            next_channel_id: AtomicU64::new(0),
            channels: Mutex::new(Vec::new()),
        }
    }

    /// The process-wide logger instance.
    pub fn global() -> &'static Logger {
        static LOGGER: OnceLock<Logger> = OnceLock::new();
        LOGGER.get_or_init(Logger::new)
    }

    /// Lowest severity this logger emits.
    pub fn min_severity(&self) -> Severity {
        Severity::from_rank(self.min_rank.load(Ordering::Relaxed))
            .unwrap_or(Severity::Debug)
    }

    pub fn set_min_severity(&self, severity: Severity) {
        self.min_rank.store(severity.rank(), Ordering::Relaxed);
    }

    /// Number of currently attached channels.
    pub fn channel_count(&self) -> usize {
        self.channels.lock().expect("channel list lock poisoned").len()
    }

    /// Attach a channel writing to the standard error stream.
    pub fn attach_stderr(&self) {
        self.attach(Sink::Stderr);
    }

    /// Attach a file channel at `dir/basename.log` for the lifetime of the
    /// returned guard. The file is created if absent and appended to.
    ///
    /// Dropping the guard detaches the channel from this logger and closes
    /// the file handle, on every exit path.
    pub fn file_channel(
        &self,
        dir: &Path,
        basename: &str,
    ) -> Result<ScopedFileChannel<'_>, AuditError> {
        let path = dir.join(format!("{basename}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let id = self.attach(Sink::LogFile(file));
        tracing::debug!(path = %path.display(), "audit file channel attached");
        Ok(ScopedFileChannel {
            logger: self,
            id,
            path,
        })
    }

    /// Emit one record to every attached channel.
    ///
    /// The envelope is `timestamp \t [pid] \t SEVERITY \t payload` with a
    /// trailing newline; the whole fan-out happens under one lock so lines
    /// from concurrent calls never interleave.
    pub fn log(&self, severity: Severity, message: &str) {
        if severity.rank() < self.min_rank.load(Ordering::Relaxed) {
            return;
        }

        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f");
        let line = format!(
            "{timestamp}\t[{pid}]\t{label}\t{message}\n",
            pid = std::process::id(),
            label = severity.label(),
        );

        let mut channels = self.channels.lock().expect("channel list lock poisoned");
        for channel in channels.iter_mut() {
            if let Err(error) = channel.write_line(&line) {
                tracing::warn!(channel = channel.id, %error, "audit channel write failed");
            }
        }
    }

    fn attach(&self, sink: Sink) -> u64 {
        let id = self.next_channel_id.fetch_add(1, Ordering::Relaxed);
        let mut channels = self.channels.lock().expect("channel list lock poisoned");
        channels.push(Channel { id, sink });
        id
    }

    fn detach(&self, id: u64) {
        let removed = {
            let mut channels = self.channels.lock().expect("channel list lock poisoned");
            channels
                .iter()
                .position(|channel| channel.id == id)
                .map(|index| channels.remove(index))
        };
        // Detached before the handle closes here.
        drop(removed);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII guard for a per-job file channel.
///
/// Holds the channel attached to its logger until dropped.
#[derive(Debug)]
pub struct ScopedFileChannel<'a> {
    logger: &'a Logger,
    id: u64,
    path: PathBuf,
}

impl ScopedFileChannel<'_> {
    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScopedFileChannel<'_> {
    fn drop(&mut self) {
        self.logger.detach(self.id);
        tracing::debug!(path = %self.path.display(), "audit file channel detached");
    }
}

/// Initialize the process-wide console channel.
///
/// Registers the custom severities, sets the minimum severity from the
/// configured level name, and attaches a stderr channel to the global
/// logger. An unknown level name fails fast. Repeated calls attach
/// redundant stderr channels; avoiding that is the caller's responsibility.
pub fn init_console_channel(config: &LoggingConfig) -> Result<(), AuditError> {
    register_severities();

    let level: Severity = config.level.parse()?;
    let logger = Logger::global();
    logger.set_min_severity(level);
    logger.attach_stderr();

    tracing::info!(level = %level, "console audit channel attached");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_severity_gate() {
        let logger = Logger::new();
        assert_eq!(logger.min_severity(), Severity::Debug);

        logger.set_min_severity(Severity::Warning);
        assert_eq!(logger.min_severity(), Severity::Warning);
        // REQ and RREQ rank above WARNING, so a warning gate admits them.
        assert!(Severity::Req.rank() >= logger.min_severity().rank());
        assert!(Severity::Rreq.rank() >= logger.min_severity().rank());
    }

    #[test]
    fn test_unknown_level_fails_fast() {
        let config = LoggingConfig {
            level: "loud".to_string(),
        };
        let err = init_console_channel(&config).unwrap_err();
        assert!(matches!(err, AuditError::UnknownSeverity(_)));
    }

    #[test]
    fn test_file_channel_open_failure_propagates() {
        let logger = Logger::new();
        let missing = Path::new("/nonexistent-srvlog-dir");
        let err = logger.file_channel(missing, "job").unwrap_err();
        assert!(matches!(err, AuditError::Io(_)));
        assert_eq!(logger.channel_count(), 0);
    }
}
