use super::console::write_stdout;
use super::LogSink;
use crate::error::LogError;
use crate::format::LineFormat;
use crate::level::Level;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Permission bits for files opened by the file destination.
pub const LOG_FILE_MODE: u32 = 0o640;

/// Writes every line to a log file and to stdout.
#[derive(Debug)]
pub struct TeeFileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl TeeFileSink {
    /// Open (or create) `path` for writing. Existing content is kept and new
    /// lines are appended.
    pub fn open(path: &Path) -> Result<Self, LogError> {
        let mut options = OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(LOG_FILE_MODE);
        }
        let file = options.open(path).map_err(|e| LogError::io(path, e))?;
        debug!(path = %path.display(), "Opened log file");
        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for TeeFileSink {
    fn write_record(&self, level: Level, message: &str) -> io::Result<()> {
        let line = LineFormat::global().render(level, message);
        let file_result = self
            .file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write_all(line.as_bytes());
        let stdout_result = write_stdout(&line);
        file_result.and(stdout_result)
    }

    fn flush(&self) -> io::Result<()> {
        self.file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()?;
        io::stdout().lock().flush()
    }
}
