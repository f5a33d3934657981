use super::LogSink;
use crate::format::LineFormat;
use crate::level::Level;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Writes rendered lines to the process's stdout or stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    stream: Stream,
}

impl ConsoleSink {
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    #[must_use]
    pub fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }
}

/// Write a pre-rendered line to stdout while holding its lock.
pub(super) fn write_stdout(line: &str) -> io::Result<()> {
    io::stdout().lock().write_all(line.as_bytes())
}

impl LogSink for ConsoleSink {
    fn write_record(&self, level: Level, message: &str) -> io::Result<()> {
        let line = LineFormat::global().render(level, message);
        match self.stream {
            Stream::Stdout => write_stdout(&line),
            Stream::Stderr => io::stderr().lock().write_all(line.as_bytes()),
        }
    }

    fn flush(&self) -> io::Result<()> {
        match self.stream {
            Stream::Stdout => io::stdout().lock().flush(),
            Stream::Stderr => io::stderr().lock().flush(),
        }
    }
}
