//! Size-based log file rotation.
//!
//! # Responsibilities
//! - Cap the active log file at a configured byte size
//! - Keep a bounded set of numbered backups (`app.log.1` is the newest)
//! - Share one sink between concurrent writers without tearing lines
//!
//! # Design Decisions
//! - Rotation happens before the write that would cross the cap, so the
//!   active file never exceeds it
//! - A whole line is written under a single lock acquisition; rotation
//!   bookkeeping lives behind the same lock
//! - The ecosystem's `tracing-appender` rotates by time only, so the
//!   size-based engine lives here

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A log file with a byte-size cap and numbered backups.
///
/// Backups follow the `<path>.1` .. `<path>.N` convention, `.1` being the
/// most recent. When a write would push the active file past the cap, the
/// backups shift up one slot (discarding `.N`), the active file becomes
/// `.1`, and a fresh file is started.
#[derive(Debug)]
pub struct RollingFile {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    /// Open (or create) the active file in append mode.
    ///
    /// An existing file keeps its contents; its current size seeds the
    /// byte counter so the cap holds across restarts.
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64, max_backups: usize) -> io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            path,
            max_bytes,
            max_backups,
            file,
            written,
        })
    }

    /// Path of the numbered backup `index` (1-based).
    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    /// Shift backups up one slot, archive the active file as `.1`, and
    /// start a fresh one. A zero backup budget truncates in place instead.
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_backups == 0 {
            self.file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&self.path)?;
            self.written = 0;
            return Ok(());
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.max_backups).rev() {
            let src = self.backup_path(index);
            if src.exists() {
                fs::rename(&src, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))?;

        self.file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // An empty active file is never rotated, so one oversized record
        // does not leave an empty backup behind.
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Cloneable handle to a [`RollingFile`] shared across request tasks.
///
/// Each `write` holds the sink lock for the duration of the call, so
/// concurrent requests cannot interleave mid-line and rotation state is
/// never raced.
#[derive(Debug, Clone)]
pub struct RollingWriter {
    inner: Arc<Mutex<RollingFile>>,
}

impl RollingWriter {
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64, max_backups: usize) -> io::Result<Self> {
        let file = RollingFile::open(path, max_bytes, max_backups)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(file)),
        })
    }

    fn lock(&self) -> MutexGuard<'_, RollingFile> {
        // A poisoned lock still guards a usable file handle.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().flush()
    }
}
