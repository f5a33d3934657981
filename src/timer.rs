use crate::logger::Logger;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Process-wide timer used by [`timer_mark`] and [`timer_measure`].
static SHARED_TIMER: Timer = Timer::new();

/// A single wall-clock mark.
///
/// Until [`Timer::mark`] is first called the mark is the Unix epoch, so an
/// early measurement reports the time since 1970.
#[derive(Debug)]
pub struct Timer {
    mark: Mutex<SystemTime>,
}

impl Timer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mark: Mutex::new(UNIX_EPOCH),
        }
    }

    /// Record the current time, replacing the previous mark.
    pub fn mark(&self) {
        *self.mark.lock().unwrap_or_else(PoisonError::into_inner) = SystemTime::now();
    }

    /// Time since the last mark. Zero if the clock has gone backwards.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        let mark = *self.mark.lock().unwrap_or_else(PoisonError::into_inner);
        SystemTime::now().duration_since(mark).unwrap_or_default()
    }

    /// Log `ELAPSED [<duration>]` at debug level and return the duration.
    pub fn measure(&self, logger: &Logger) -> Duration {
        let elapsed = self.elapsed();
        logger.debugf(format_args!("ELAPSED [{}]", humantime::format_duration(elapsed)));
        elapsed
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide timer.
#[must_use]
pub fn shared_timer() -> &'static Timer {
    &SHARED_TIMER
}

/// Mark the process-wide timer.
pub fn timer_mark() {
    SHARED_TIMER.mark();
}

/// Measure the process-wide timer through `logger`.
pub fn timer_measure(logger: &Logger) -> Duration {
    SHARED_TIMER.measure(logger)
}
