use super::Logger;
use crate::destination::Destination;
use crate::error::LogError;
use crate::format::LineFormat;
use crate::level::Level;
use crate::sink::{self, DiscardSink, LogSink, WriterSink};
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Step-by-step [`Logger`] construction.
#[derive(Default)]
pub struct LoggerBuilder {
    threshold: Level,
    destination: Destination,
    log_root: Option<PathBuf>,
    process_name: Option<String>,
    sink: Option<Arc<dyn LogSink>>,
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("threshold", &self.threshold)
            .field("destination", &self.destination)
            .field("log_root", &self.log_root)
            .field("process_name", &self.process_name)
            .field("custom_sink", &self.sink.is_some())
            .finish()
    }
}

impl LoggerBuilder {
    #[must_use]
    pub fn threshold(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// Directory that replaces `<home>/log` for the file destination.
    #[must_use]
    pub fn log_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.log_root = Some(root.into());
        self
    }

    /// Name used for the file destination directory and the syslog tag,
    /// instead of the one derived from argv[0].
    #[must_use]
    pub fn process_name(mut self, name: impl Into<String>) -> Self {
        self.process_name = Some(name.into());
        self
    }

    /// Send records to `writer` instead of the destination's sink.
    #[must_use]
    pub fn writer(self, writer: impl Write + Send + 'static) -> Self {
        self.sink(Arc::new(WriterSink::new(writer)))
    }

    /// Send records to `sink` instead of the destination's sink.
    #[must_use]
    pub fn sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Open the sink and produce the logger.
    ///
    /// With an `Off` threshold nothing is opened.
    pub fn build(self) -> Result<Logger, LogError> {
        let format = LineFormat::global();

        let sink: Arc<dyn LogSink> = if self.threshold == Level::Off {
            Arc::new(DiscardSink)
        } else if let Some(custom) = self.sink {
            custom
        } else {
            let name = self
                .process_name
                .as_deref()
                .unwrap_or(format.process_name());
            sink::open(self.destination, self.log_root.as_deref(), name)?
        };

        Ok(Logger {
            threshold: self.threshold,
            destination: self.destination,
            sink,
        })
    }
}
