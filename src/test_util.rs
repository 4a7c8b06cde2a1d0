//! Helpers shared by the unit tests.

use std::{
    io::{self, Write},
    sync::Arc,
};

use parking_lot::Mutex;

/// An in-memory sink that stays readable while a bar writes to it.
#[derive(Clone, Default)]
pub struct SharedSink(Arc<Mutex<Vec<u8>>>);

impl SharedSink {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    /// Number of repaints, one carriage return each.
    pub fn repaints(&self) -> usize {
        self.contents().matches('\r').count()
    }

    /// Every painted line, without the leading carriage return.
    pub fn lines(&self) -> Vec<String> {
        self.contents()
            .split('\r')
            .skip(1)
            .map(str::to_owned)
            .collect()
    }

    pub fn last_line(&self) -> Option<String> {
        self.lines().pop()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A sink whose every write fails.
pub struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}
