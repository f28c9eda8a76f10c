//! Ctrl+C handling.
//!
//! The render loop restores the terminal on every normal exit path, but
//! SIGINT ends the process without unwinding. The handler restores it
//! through the spinner set's own output before exiting.

use anyhow::{Context, Result};
use multispin::RestoreHandle;

/// Exit status for a process ended by SIGINT.
pub(crate) const INTERRUPTED_EXIT_CODE: i32 = 130;

pub(crate) fn init(terminal: RestoreHandle) -> Result<()> {
    ctrlc::set_handler(move || {
        terminal.restore();
        std::process::exit(INTERRUPTED_EXIT_CODE);
    })
    .context("Error setting Ctrl+C handler")
}
