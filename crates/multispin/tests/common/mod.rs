#![allow(dead_code)]

use multispin::{SpinnerConfig, SpinnerSet};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const PREAMBLE: &str = "\x1b[?25h\x1b[0m\x1b[s";
pub const RESTORE: &str = "\x1b[?25h\x1b[0m";
pub const HIDE: &str = "\x1b[?25l";
pub const SHOW: &str = "\x1b[?25h";

/// In-memory terminal shared with the spinner set under test.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("output is valid UTF-8")
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A set drawing into a capture, animating every `frequency_ms`.
pub fn capture_set(frequency_ms: u64) -> (SpinnerSet, Capture) {
    let config = SpinnerConfig::default().with_frequency(Duration::from_millis(frequency_ms));
    capture_set_with(config)
}

pub fn capture_set_with(config: SpinnerConfig) -> (SpinnerSet, Capture) {
    let capture = Capture::default();
    let set = SpinnerSet::with_writer(config, capture.clone()).expect("failed to create spinner set");
    (set, capture)
}

/// `ESC[u`, then `ESC[<n>B` for rows below the anchor, then `ESC[K`.
pub fn row_prefix(line_offset: usize) -> String {
    if line_offset == 0 {
        "\x1b[u\x1b[K".to_string()
    } else {
        format!("\x1b[u\x1b[{line_offset}B\x1b[K")
    }
}

pub fn success_line(line_offset: usize, message: &str) -> String {
    format!("{}\x1b[32m✓ {message}\x1b[0m\n", row_prefix(line_offset))
}

pub fn failure_line(line_offset: usize, message: &str) -> String {
    format!("{}\x1b[31m✗ {message}\x1b[0m\n", row_prefix(line_offset))
}

/// Teardown sequence for a set with `rows` registered spinners.
pub fn teardown(rows: usize) -> String {
    if rows == 0 {
        RESTORE.to_string()
    } else {
        format!("\x1b[u\x1b[{rows}B{RESTORE}")
    }
}
