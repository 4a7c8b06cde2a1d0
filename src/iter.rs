//! Iterator adapters for automatic progress tracking.
//!
//! [`ProgressIteratorExt`] attaches a [`ProgressBar`] to any iterator. Every yielded
//! item advances the bar by one step, and exhausting the iterator completes it, so
//! the final repaint always shows 100%.
//!
//! # Example
//!
//! ```no_run
//! use line_progress::ProgressIteratorExt;
//!
//! let files = vec!["a.txt", "b.txt", "c.txt"];
//! for file in files.iter().progress_with_prefix("hashing") {
//!     // ...
//! #   let _ = file;
//! }
//! ```

use compact_str::CompactString;

use crate::{config::BarConfig, progress::ProgressBar};

/// An iterator adapter that advances a [`ProgressBar`] per item.
#[derive(Debug)]
pub struct ProgressIter<'a, I> {
    iter: I,
    bar: ProgressBar<'a>,
    done: bool,
}

impl<'a, I> ProgressIter<'a, I> {
    /// Creates a new `ProgressIter`.
    ///
    /// Usually constructed via [`ProgressIteratorExt`] methods.
    pub const fn new(iter: I, bar: ProgressBar<'a>) -> Self {
        Self {
            iter,
            bar,
            done: false,
        }
    }

    /// The bar being driven.
    pub const fn bar(&self) -> &ProgressBar<'a> {
        &self.bar
    }

    /// Mutable access to the bar, e.g. to change its prefix mid-loop.
    pub const fn bar_mut(&mut self) -> &mut ProgressBar<'a> {
        &mut self.bar
    }

    /// Consumes the adapter, returning the iterator and the bar.
    pub fn into_parts(self) -> (I, ProgressBar<'a>) {
        (self.iter, self.bar)
    }
}

impl<I: Iterator> Iterator for ProgressIter<'_, I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next();

        if item.is_some() {
            self.bar.advance();
        } else if !self.done {
            self.done = true;
            self.bar.complete();
        }

        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for ProgressIter<'_, I> {}

/// Extension trait to attach a [`ProgressBar`] to any iterator.
pub trait ProgressIteratorExt: Iterator + Sized {
    /// Wraps the iterator in a default bar on standard error, sized by its length.
    fn progress(self) -> ProgressIter<'static, Self>
    where
        Self: ExactSizeIterator,
    {
        self.progress_with_prefix(CompactString::default())
    }

    /// Same as [`progress`](Self::progress), with a label.
    fn progress_with_prefix(self, prefix: impl Into<CompactString>) -> ProgressIter<'static, Self>
    where
        Self: ExactSizeIterator,
    {
        let total = self.len() as u64;
        let config = BarConfig::default().with_prefix(prefix);
        let bar = ProgressBar::with_config(total, config, std::io::stderr());
        ProgressIter::new(self, bar)
    }

    /// Wraps the iterator using an existing bar.
    fn progress_with(self, bar: ProgressBar<'_>) -> ProgressIter<'_, Self> {
        ProgressIter::new(self, bar)
    }
}

impl<I: Iterator> ProgressIteratorExt for I {}
