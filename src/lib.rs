//! Leveled logging with a severity threshold and a choice of destination:
//! stdout, stderr, a file teed to stdout, or the local syslog.
//!
//! ```no_run
//! use levelog::{configure, Destination, Level};
//!
//! let log = configure(Level::Info, Destination::Stdout);
//! log.info("service started");
//! levelog::warnf!(log, "retry {}/{} failed", 2, 5);
//! if let Some(exit) = log.fatal("cannot bind socket") {
//!     exit.exit();
//! }
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

mod macros;

pub mod destination;
pub mod diagnostics;
pub mod dump;
pub mod error;
pub mod format;
pub mod level;
pub mod logger;
pub mod paths;
pub mod settings;
pub mod sink;
pub mod timer;

#[cfg(test)]
mod test_support;

pub use destination::{Destination, ParseDestinationError};
pub use diagnostics::{init_diagnostics, DiagnosticsConfig};
pub use dump::{dump, dump_in};
pub use error::LogError;
pub use format::LineFormat;
pub use level::{Level, ParseLevelError};
pub use logger::{configure, set_level, try_configure, ExitRequest, Logger, LoggerBuilder};
pub use settings::LogSettings;
pub use sink::LogSink;
pub use timer::{shared_timer, timer_mark, timer_measure, Timer};
