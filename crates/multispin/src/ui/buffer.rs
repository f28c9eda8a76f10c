//! Output Buffer - serialized access to the shared terminal stream
//!
//! Multiple threads writing escape sequences directly causes corruption.
//! Every painter (the render loop, a caller printing its final line) takes
//! the same lock and writes a whole [`Frame`] at once.

use super::engine::Frame;
use std::fmt;
use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

type Sink = Box<dyn Write + Send>;

pub struct OutputBuffer {
    writer: Mutex<Sink>,
}

impl OutputBuffer {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Take exclusive access to the stream.
    ///
    /// Hold the guard across a registry snapshot and the paint that uses it.
    pub fn lock(&self) -> OutputGuard<'_> {
        OutputGuard {
            writer: self.writer.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// Write one frame under the lock.
    pub fn emit(&self, frame: &Frame) {
        self.lock().emit(frame);
    }
}

impl fmt::Debug for OutputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputBuffer").finish_non_exhaustive()
    }
}

/// Exclusive handle on the output stream.
pub struct OutputGuard<'a> {
    writer: MutexGuard<'a, Sink>,
}

impl OutputGuard<'_> {
    /// Write and flush a frame. Failures are logged, never propagated.
    pub fn emit(&mut self, frame: &Frame) {
        if frame.is_empty() {
            return;
        }
        let result = self
            .writer
            .write_all(frame.as_bytes())
            .and_then(|()| self.writer.flush());
        if let Err(e) = result {
            tracing::warn!("Failed to write spinner output: {e}");
        }
    }
}

impl fmt::Debug for OutputGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputGuard").finish_non_exhaustive()
    }
}
