//! Fluent interface for constructing [`ProgressBar`] instances.
//!
//! [`ProgressBar::new`] covers the common case of a default bar on standard error.
//! The [`ProgressBarBuilder`] sets everything up front instead:
//!
//! * **Appearance:** prefix, bar width and refresh interval, individually or as a
//!   whole [`BarConfig`] loaded from elsewhere.
//! * **Output:** any [`Write`] sink, owned or borrowed.
//! * **Start time:** backdate the elapsed clock, e.g. when resuming a job whose
//!   earlier phase was measured separately.

use std::io::Write;

use compact_str::CompactString;
use web_time::Instant;

use crate::{config::BarConfig, progress::ProgressBar, stopwatch::Stopwatch};

/// A builder for [`ProgressBar`].
#[derive(Default)]
pub struct ProgressBarBuilder<'a> {
    total: u64,
    config: BarConfig,
    start: Option<Instant>,
    output: Option<Box<dyn Write + 'a>>,
}

impl<'a> ProgressBarBuilder<'a> {
    /// Starts building a bar for `total` steps.
    #[must_use]
    pub fn new(total: u64) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    /// Sets the label printed before the percentage.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<CompactString>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    /// Sets the number of glyph cells inside the bar.
    #[must_use]
    pub const fn bar_width(mut self, bar_width: usize) -> Self {
        self.config.bar_width = bar_width;
        self
    }

    /// Sets the minimum number of seconds between unforced repaints.
    #[must_use]
    pub const fn min_update_time(mut self, seconds: f64) -> Self {
        self.config.min_refresh_interval = seconds;
        self
    }

    /// Replaces the whole configuration.
    #[must_use]
    pub fn config(mut self, config: BarConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the output sink. Defaults to standard error.
    #[must_use]
    pub fn output(mut self, output: impl Write + 'a) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    /// Sets the instant the elapsed clock counts from. Defaults to the build time.
    #[must_use]
    pub const fn with_start_time(mut self, start: Instant) -> Self {
        self.start = Some(start);
        self
    }

    /// Consumes the builder and returns the bar.
    #[must_use]
    pub fn build(self) -> ProgressBar<'a> {
        let elapsed = self.start.map_or_else(Stopwatch::new, Stopwatch::started_at);
        let output = self
            .output
            .unwrap_or_else(|| Box::new(std::io::stderr()));

        ProgressBar::from_parts(self.total, self.config, elapsed, output)
    }
}
