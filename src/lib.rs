//! # `line_progress`
//!
//! A single-line terminal progress bar with elapsed time and ETA.
//!
//! ```text
//! download  42.5%|█████████████████▍                      | [3.1s<4.2s]
//! ```
//!
//! `line_progress` is designed to be:
//!
//! * **Cheap in loops**: [`ProgressBar::advance`] only repaints when the minimum refresh
//!   interval has passed, or when forced.
//! * **Sink-agnostic**: output goes to standard error by default, or to any
//!   [`std::io::Write`], including a borrowed buffer.
//! * **Steady**: timing uses a monotonic clock, so wall-clock adjustments never make the
//!   elapsed time or ETA jump.
//!
//! A bar is single-threaded: every method runs synchronously on the caller's thread and
//! mutation needs `&mut self`.
//!
//! ## Modules
//!
//! * [`builder`]: Fluent construction of a [`ProgressBar`].
//! * [`config`]: The [`BarConfig`] display settings.
//! * [`io`]: Wrappers for [`std::io::Read`] and [`std::io::Write`] that advance a bar per byte.
//! * [`iter`]: Extension traits for tracking progress on Iterators.
//! * [`progress`]: The [`ProgressBar`] renderer and [`ProgressSnapshot`].
//! * [`render`]: Pure formatting of a progress line.
//! * [`stopwatch`]: Monotonic elapsed-time measurement.
//!
//! ## Example
//!
//! ```no_run
//! use line_progress::ProgressBar;
//!
//! let mut bar = ProgressBar::new(1_000);
//! bar.set_prefix("crunching");
//! for _ in 0..1_000 {
//!     // ... one unit of work ...
//!     bar.advance();
//! }
//! bar.complete();
//! eprintln!();
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod builder;
pub mod config;
pub mod io;
pub mod iter;
pub mod progress;
pub mod render;
pub mod stopwatch;

#[cfg(test)]
mod test_util;

pub use builder::ProgressBarBuilder;
pub use config::BarConfig;
pub use iter::{ProgressIter, ProgressIteratorExt};
pub use progress::{ProgressBar, ProgressSnapshot};
pub use stopwatch::Stopwatch;
