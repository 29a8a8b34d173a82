//! Append-only diagnostic sink for scrape errors
//!
//! The pipeline records every recovered failure (network errors, parse
//! errors, integer-extraction errors) as one line in an external log file,
//! format `timestamp:LEVEL:message`. The sink is opened once at process
//! start, passed explicitly into the components that write to it, and never
//! read back by the core. Appends are safe from concurrent worker tasks.

use chrono::Local;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Shared handle to the append-only diagnostic log
pub struct DiagnosticSink {
    file: Mutex<File>,
}

impl DiagnosticSink {
    /// Open (or create) the log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Append one timestamped line at the given level.
    ///
    /// A failed append is reported through the process logger and otherwise
    /// swallowed; diagnostics must never take the pipeline down with them.
    pub fn append(&self, level: log::Level, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let mut file = self.file.lock();
        if let Err(e) = writeln!(file, "{timestamp}:{level}:{message}")
            .and_then(|()| file.flush())
        {
            log::warn!("diagnostic sink append failed: {e}");
        }
    }

    /// Append one line at ERROR level (the level every recovered scrape
    /// failure is recorded at).
    pub fn error(&self, message: &str) {
        self.append(log::Level::Error, message);
    }
}
