//! Helpers shared by the unit tests.

use crate::level::Level;
use crate::logger::Logger;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// In-memory writer whose contents stay readable after it is moved into a
/// logger.
#[derive(Clone, Default)]
pub(crate) struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub(crate) fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A logger at `threshold` writing into a fresh capture buffer.
pub(crate) fn captured(threshold: Level) -> (Logger, Capture) {
    let capture = Capture::default();
    let logger = Logger::builder()
        .threshold(threshold)
        .writer(capture.clone())
        .build()
        .unwrap();
    (logger, capture)
}
