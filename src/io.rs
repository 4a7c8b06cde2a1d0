//! I/O wrappers for tracking data transfer.
//!
//! [`ProgressReader`] and [`ProgressWriter`] wrap any [`std::io::Read`] or
//! [`std::io::Write`] and advance a [`ProgressBar`] by the number of bytes each call
//! moves. Build the bar with the expected byte count as its total, e.g. a file's
//! length, and the usual throttling keeps repaints cheap for small reads.
//!
//! Errors from the wrapped value pass through untouched; a failed call advances
//! nothing.

use std::io::{self, Read, Write};

use crate::ProgressBar;

/// A wrapper around [`Read`] that advances a [`ProgressBar`] by bytes read.
#[derive(Debug)]
pub struct ProgressReader<'a, R> {
    inner: R,
    bar: ProgressBar<'a>,
}

impl<'a, R> ProgressReader<'a, R> {
    /// Creates a new `ProgressReader` wrapping `inner`.
    pub const fn new(inner: R, bar: ProgressBar<'a>) -> Self {
        Self { inner, bar }
    }

    /// The bar being driven.
    pub const fn bar(&self) -> &ProgressBar<'a> {
        &self.bar
    }

    /// Returns the wrapped reader and the bar, leaving the bar's position as is.
    pub fn into_inner(self) -> (R, ProgressBar<'a>) {
        (self.inner, self.bar)
    }

    /// Completes the bar, painting a final full line, and returns the reader and the bar.
    pub fn finish(mut self) -> (R, ProgressBar<'a>) {
        self.bar.complete();
        (self.inner, self.bar)
    }
}

impl<R: Read> Read for ProgressReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.bar.advance_by(n as u64, false);
        Ok(n)
    }
}

/// A wrapper around [`Write`] that advances a [`ProgressBar`] by bytes written.
#[derive(Debug)]
pub struct ProgressWriter<'a, W> {
    inner: W,
    bar: ProgressBar<'a>,
}

impl<'a, W> ProgressWriter<'a, W> {
    /// Creates a new `ProgressWriter` wrapping `inner`.
    pub const fn new(inner: W, bar: ProgressBar<'a>) -> Self {
        Self { inner, bar }
    }

    /// The bar being driven.
    pub const fn bar(&self) -> &ProgressBar<'a> {
        &self.bar
    }

    /// Returns the wrapped writer and the bar, leaving the bar's position as is.
    pub fn into_inner(self) -> (W, ProgressBar<'a>) {
        (self.inner, self.bar)
    }

    /// Completes the bar, painting a final full line, and returns the writer and the bar.
    pub fn finish(mut self) -> (W, ProgressBar<'a>) {
        self.bar.complete();
        (self.inner, self.bar)
    }
}

impl<W: Write> Write for ProgressWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bar.advance_by(n as u64, false);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
