//! The [`ProgressBar`] renderer and its [`ProgressSnapshot`].
//!
//! A bar tracks how many of a fixed number of steps are done and repaints a single
//! terminal line through its output sink. Repaints are throttled: an unforced
//! [`advance_by`](ProgressBar::advance_by) only writes when more than the configured
//! minimum interval has passed since the previous repaint, so calling
//! [`advance`](ProgressBar::advance) in a tight loop stays cheap.
//!
//! Two [`Stopwatch`]es drive the timing:
//!
//! * **Total:** time since construction or the last [`restart`](ProgressBar::restart),
//!   used for the elapsed and ETA fields.
//! * **Refresh:** time since the last repaint, used for throttling.

use std::{
    fmt,
    io::{self, Write},
    time::Duration,
};

use compact_str::CompactString;

use crate::{config::BarConfig, render, stopwatch::Stopwatch};

/// A single-line progress bar writing to a caller-chosen sink.
///
/// The sink defaults to standard error. It can be any [`Write`], including a
/// borrowed `&mut W`; the lifetime `'a` ties the bar to such a borrow.
///
/// `total` must be non-zero. A zero total is not rejected but makes the progress
/// fraction meaningless.
pub struct ProgressBar<'a> {
    config: BarConfig,
    position: u64,
    total: u64,

    elapsed: Stopwatch,
    refresh: Stopwatch,
    painted: bool,

    output: Box<dyn Write + 'a>,
}

impl fmt::Debug for ProgressBar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressBar")
            .field("config", &self.config)
            .field("position", &self.position)
            .field("total", &self.total)
            .field("elapsed", &self.elapsed)
            .field("painted", &self.painted)
            .finish_non_exhaustive()
    }
}

impl<'a> ProgressBar<'a> {
    /// Creates a bar for `total` steps that paints to standard error.
    ///
    /// Both stopwatches start now.
    #[must_use]
    pub fn new(total: u64) -> Self {
        Self::with_config(total, BarConfig::default(), io::stderr())
    }

    /// Creates a bar with explicit configuration and output sink.
    #[must_use]
    pub fn with_config(total: u64, config: BarConfig, output: impl Write + 'a) -> Self {
        Self::from_parts(total, config, Stopwatch::new(), Box::new(output))
    }

    pub(crate) fn from_parts(
        total: u64,
        config: BarConfig,
        elapsed: Stopwatch,
        output: Box<dyn Write + 'a>,
    ) -> Self {
        Self {
            config,
            position: 0,
            total,
            elapsed,
            refresh: Stopwatch::new(),
            painted: false,
            output,
        }
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Replaces the output sink. Takes effect on the next repaint.
    pub fn set_output(&mut self, output: impl Write + 'a) {
        self.output = Box::new(output);
    }

    /// Sets the label printed before the percentage.
    pub fn set_prefix(&mut self, prefix: impl Into<CompactString>) {
        self.config.prefix = prefix.into();
    }

    /// Sets the number of glyph cells inside the bar.
    pub const fn set_bar_width(&mut self, bar_width: usize) {
        self.config.bar_width = bar_width;
    }

    /// Sets the minimum number of seconds between two unforced repaints.
    pub const fn set_min_update_time(&mut self, seconds: f64) {
        self.config.min_refresh_interval = seconds;
    }

    /// Replaces the whole configuration.
    pub fn set_config(&mut self, config: BarConfig) {
        self.config = config;
    }

    /// The current configuration.
    #[must_use]
    pub const fn config(&self) -> &BarConfig {
        &self.config
    }

    // ========================================================================
    // Progress
    // ========================================================================

    /// Advances by one step, repainting if the throttle interval has passed.
    pub fn advance(&mut self) {
        self.advance_by(1, false);
    }

    /// Advances by `steps`, never past the total.
    ///
    /// Repaints when `force` is set, when nothing has been painted yet, or when more
    /// than the minimum refresh interval has passed since the last repaint. A call
    /// with zero steps can still repaint.
    pub fn advance_by(&mut self, steps: u64, force: bool) {
        self.position = self.position.saturating_add(steps).min(self.total);

        if force || !self.painted || self.refresh.peek() > self.config.min_refresh_interval {
            self.refresh.reset();
            self.repaint();
        }
    }

    /// Jumps to the total and repaints unconditionally.
    pub fn complete(&mut self) {
        self.advance_by(self.total.saturating_sub(self.position), true);
    }

    /// Restarts both stopwatches, keeping the current position.
    pub fn restart(&mut self) {
        let lap = self.elapsed.reset();
        self.refresh.reset();
        log::trace!(
            "restarting progress {:?} at {}/{} after {lap:.3}s",
            self.config.prefix,
            self.position,
            self.total
        );
    }

    /// Seconds since construction or the last [`restart`](Self::restart).
    #[must_use]
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed.peek()
    }

    /// The number of completed steps.
    #[must_use]
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// The total number of steps.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Completed fraction in `[0, 1]`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.position as f64 / self.total as f64
    }

    /// Returns `true` once every step is done.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.position >= self.total
    }

    /// Captures the current state as plain data.
    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        self.into()
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    fn render(&self) -> String {
        let progress = self.progress();
        let elapsed = self.elapsed.peek();
        let eta = elapsed / progress - elapsed;

        render::render_line(
            &self.config.prefix,
            progress,
            self.config.bar_width,
            elapsed,
            eta,
        )
    }

    /// Write failures are not reported to the caller.
    fn repaint(&mut self) {
        let line = self.render();
        self.painted = true;

        log::trace!(
            "repainting progress {:?} at {}/{}",
            self.config.prefix,
            self.position,
            self.total
        );

        if let Err(err) = self.write_line(&line) {
            log::debug!("failed to repaint progress {:?}: {err}", self.config.prefix);
        }
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.write_all(line.as_bytes())?;
        self.output.flush()
    }
}

/// A plain-data snapshot of a [`ProgressBar`] at a specific point in time.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "rkyv",
    derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "rkyv", rkyv(derive(Debug, Eq, PartialEq)))]
pub struct ProgressSnapshot {
    prefix: CompactString,
    position: u64,
    total: u64,
    elapsed: Duration,
}

impl From<&ProgressBar<'_>> for ProgressSnapshot {
    fn from(bar: &ProgressBar<'_>) -> Self {
        Self {
            prefix: bar.config.prefix.clone(),
            position: bar.position,
            total: bar.total,
            elapsed: bar.elapsed.elapsed(),
        }
    }
}

impl ProgressSnapshot {
    /// Returns the bar's label.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the number of completed steps.
    #[must_use]
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// Returns the total number of steps.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Returns the time elapsed since the bar started.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the completed fraction, or `0.0` when the total is zero.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.position as f64 / self.total as f64
        }
    }

    /// Estimates the remaining time as `elapsed / progress - elapsed`.
    ///
    /// Returns `None` when no progress has been made or no time has elapsed.
    #[must_use]
    pub fn eta(&self) -> Option<Duration> {
        let progress = self.progress();
        let secs = self.elapsed.as_secs_f64();
        if progress <= 0.0 || secs <= 0.0 {
            return None;
        }

        Some(Duration::from_secs_f64((secs / progress - secs).max(0.0)))
    }
}
