//! The level dispatcher.
//!
//! A [`Logger`] is an immutable pair of threshold and sink. Configuration
//! builds a new value instead of rebinding globals, so callers that hold an
//! older `Logger` keep writing to the old sink until they swap it out.

mod builder;

pub use builder::LoggerBuilder;

use crate::destination::Destination;
use crate::error::LogError;
use crate::level::Level;
use crate::sink::{ConsoleSink, LogSink};
use std::fmt;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, warn};

/// Returned by an active fatal call. The caller decides whether to act on it,
/// typically by returning it from `main` or calling [`ExitRequest::exit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a fatal record asks the caller to terminate the process"]
pub struct ExitRequest {
    code: u8,
}

impl ExitRequest {
    /// Status reported for fatal records.
    pub const FATAL_EXIT_CODE: u8 = 1;

    pub fn code(self) -> u8 {
        self.code
    }

    /// Terminate the process with this request's status.
    #[allow(clippy::exit)]
    pub fn exit(self) -> ! {
        std::process::exit(i32::from(self.code))
    }
}

impl Default for ExitRequest {
    fn default() -> Self {
        Self {
            code: Self::FATAL_EXIT_CODE,
        }
    }
}

impl From<ExitRequest> for ExitCode {
    fn from(request: ExitRequest) -> Self {
        Self::from(request.code)
    }
}

/// Severity-gated writer bound to one destination.
#[derive(Clone)]
pub struct Logger {
    threshold: Level,
    destination: Destination,
    sink: Arc<dyn LogSink>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("destination", &self.destination)
            .finish_non_exhaustive()
    }
}

impl Default for Logger {
    /// `Warn` to stdout.
    fn default() -> Self {
        Self {
            threshold: Level::default(),
            destination: Destination::Stdout,
            sink: Arc::new(ConsoleSink::stdout()),
        }
    }
}

/// Build a logger for `threshold` and `destination`.
///
/// Setup failures are reported through the default logger's error level and
/// the default logger is returned in place of the requested one.
pub fn configure(threshold: Level, destination: Destination) -> Logger {
    Logger::default().reconfigure(threshold, destination)
}

/// Same as `configure(level, Destination::Stdout)`.
pub fn set_level(level: Level) -> Logger {
    configure(level, Destination::Stdout)
}

/// Like [`configure`], but hands setup failures back to the caller.
pub fn try_configure(threshold: Level, destination: Destination) -> Result<Logger, LogError> {
    Logger::builder()
        .threshold(threshold)
        .destination(destination)
        .build()
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Replace this configuration. If the new destination cannot be opened the
    /// failure goes to this logger's error level and a clone of `self` is
    /// returned.
    #[must_use]
    pub fn reconfigure(&self, threshold: Level, destination: Destination) -> Self {
        self.reconfigure_with(
            Self::builder()
                .threshold(threshold)
                .destination(destination),
        )
    }

    /// [`Logger::reconfigure`] with full builder control.
    #[must_use]
    pub fn reconfigure_with(&self, builder: LoggerBuilder) -> Self {
        match builder.build() {
            Ok(logger) => logger,
            Err(err) => {
                warn!(%err, "Log setup failed; keeping previous configuration");
                self.errorf(format_args!("log setup failed: {err}"));
                self.clone()
            }
        }
    }

    #[must_use]
    pub fn threshold(&self) -> Level {
        self.threshold
    }

    #[must_use]
    pub fn destination(&self) -> Destination {
        self.destination
    }

    /// Whether a record at `level` would be written.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level.passes(self.threshold)
    }

    /// Write `args` at `level` if the threshold admits it. Write failures are
    /// dropped.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            self.emit(level, &args.to_string());
        }
    }

    fn emit(&self, level: Level, message: &str) {
        if let Err(err) = self.sink.write_record(level, message) {
            debug!(%err, %level, "Dropped log record");
        }
    }

    pub fn debug(&self, msg: impl fmt::Display) {
        self.log(Level::Debug, format_args!("{msg}"));
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    pub fn info(&self, msg: impl fmt::Display) {
        self.log(Level::Info, format_args!("{msg}"));
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    pub fn warn(&self, msg: impl fmt::Display) {
        self.log(Level::Warn, format_args!("{msg}"));
    }

    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    pub fn error(&self, msg: impl fmt::Display) {
        self.log(Level::Error, format_args!("{msg}"));
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    /// Write a fatal record and request termination.
    ///
    /// When the threshold suppresses `Fatal` (only `Off` does) nothing is
    /// written and `None` is returned: a suppressed fatal record does not ask
    /// for termination either.
    pub fn fatal(&self, msg: impl fmt::Display) -> Option<ExitRequest> {
        self.fatalf(format_args!("{msg}"))
    }

    /// Formatted form of [`Logger::fatal`].
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> Option<ExitRequest> {
        if !self.enabled(Level::Fatal) {
            return None;
        }
        self.emit(Level::Fatal, &args.to_string());
        if let Err(err) = self.sink.flush() {
            debug!(%err, "Failed to flush log sink");
        }
        Some(ExitRequest::default())
    }
}

#[cfg(test)]
#[path = "../logger_tests.rs"]
mod logger_tests;
