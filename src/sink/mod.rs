//! Output sinks a [`Logger`](crate::Logger) writes through.

mod console;
mod file;
mod syslog;
mod writer;

pub use console::ConsoleSink;
pub use file::{TeeFileSink, LOG_FILE_MODE};
#[cfg(unix)]
pub use syslog::SyslogSink;
pub use writer::{DiscardSink, WriterSink};

use crate::destination::Destination;
use crate::error::LogError;
use crate::level::Level;
use crate::paths;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// A destination for rendered log records.
///
/// Implementations must be safe to share between threads; each call writes
/// one whole record.
pub trait LogSink: Send + Sync {
    /// Write one record.
    fn write_record(&self, level: Level, message: &str) -> io::Result<()>;

    /// Flush buffered output. Called before a fatal record is handed back to
    /// the caller.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Build the sink for `destination`.
///
/// `log_root` is only consulted for [`Destination::File`]; `None` means
/// `<home>/log`.
pub fn open(
    destination: Destination,
    log_root: Option<&Path>,
    process_name: &str,
) -> Result<Arc<dyn LogSink>, LogError> {
    match destination {
        Destination::Stdout => Ok(Arc::new(ConsoleSink::stdout())),
        Destination::Stderr => Ok(Arc::new(ConsoleSink::stderr())),
        Destination::File => {
            let root = match log_root {
                Some(root) => root.to_path_buf(),
                None => paths::default_log_root()?,
            };
            let path = paths::prepare_log_file(&root, process_name)?;
            Ok(Arc::new(TeeFileSink::open(&path)?))
        }
        Destination::SystemLog => syslog::open(process_name),
    }
}
