//! Common test utilities

use levelog::{Level, Logger};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Writer that keeps everything written to it, shared across clones.
#[allow(dead_code)] // Test utility for integration tests
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)] // Test utility for integration tests
impl Capture {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("capture lock")).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("capture lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A logger at `threshold` writing into a fresh capture buffer.
#[allow(dead_code)] // Test utility for integration tests
pub fn capturing_logger(threshold: Level) -> (Logger, Capture) {
    let capture = Capture::default();
    let logger = Logger::builder()
        .threshold(threshold)
        .writer(capture.clone())
        .build()
        .expect("Failed to build capturing logger");
    (logger, capture)
}

/// Regular files directly inside `dir`, sorted.
#[allow(dead_code)] // Test utility for integration tests
pub fn files_in(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|e| e.path())
                .filter(|p| p.is_file())
                .collect()
        })
        .unwrap_or_default();
    files.sort();
    files
}
