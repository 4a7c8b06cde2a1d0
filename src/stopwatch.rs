//! Monotonic elapsed-time measurement.
//!
//! [`Stopwatch`] is backed by [`web_time::Instant`], which is steady: it never
//! observes wall-clock adjustments, so readings never go backwards.

use std::time::Duration;

use web_time::Instant;

/// Seconds elapsed between two instants, saturating at zero.
#[must_use]
pub fn elapsed_seconds(from: Instant, to: Instant) -> f64 {
    to.saturating_duration_since(from).as_secs_f64()
}

/// Measures elapsed seconds from a stored start instant.
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
    start: Instant,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Creates a stopwatch started now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Creates a stopwatch that started at `start`.
    #[must_use]
    pub const fn started_at(start: Instant) -> Self {
        Self { start }
    }

    /// Restarts the stopwatch and returns the seconds elapsed since the previous start.
    pub fn reset(&mut self) -> f64 {
        let previous = self.start;
        self.start = Instant::now();
        elapsed_seconds(previous, self.start)
    }

    /// Returns the seconds elapsed since the last start without restarting.
    #[must_use]
    pub fn peek(&self) -> f64 {
        elapsed_seconds(self.start, Instant::now())
    }

    /// Returns the time elapsed since the last start as a [`Duration`].
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// The instant this stopwatch was last started.
    #[must_use]
    pub const fn start(&self) -> Instant {
        self.start
    }
}
