//! multispin - concurrent terminal spinners
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
//!
//! Draws one spinner per task on consecutive terminal rows while any number
//! of threads start, update, and stop them.
//!
//! # Overview
//!
//! A [`SpinnerSet`] saves the cursor position when it is created and gives
//! every registered spinner a fixed row below that anchor. A single render
//! thread animates the running rows; the thread that stops a spinner prints
//! its final `✓`/`✗` line itself.
//!
//! # Architecture
//!
//! - **Registry**: append-only records plus the active count that decides
//!   cursor visibility ([`registry`]).
//! - **Render loop**: one thread, one event channel, all animation frames
//!   ([`ui`]).
//! - **Control API**: [`SpinnerSet`], safe to share between threads.
//!
//! # Example
//!
//! ```no_run
//! use multispin::{SpinnerConfig, SpinnerSet};
//! use std::thread;
//! use std::time::Duration;
//!
//! let spinners = SpinnerSet::new(SpinnerConfig::default())?;
//! let ids: Vec<usize> = (0..3).map(|_| spinners.register()).collect();
//!
//! thread::scope(|s| {
//!     for &id in &ids {
//!         let spinners = &spinners;
//!         s.spawn(move || {
//!             spinners.start(id, &format!("Task {}: Processing...", id + 1));
//!             thread::sleep(Duration::from_millis(500));
//!             spinners.stop(id, &format!("Task {}: Completed successfully", id + 1));
//!         });
//!     }
//! });
//! spinners.shutdown()?;
//! # Ok::<(), multispin::SpinnerError>(())
//! ```

pub mod config;
pub mod error;
pub mod registry;
pub mod spinner;
pub mod ui;

// Re-exports for convenience
pub use config::{ConfigFile, SpinnerConfig};
pub use error::{ConfigError, SpinnerError};
pub use spinner::{RestoreHandle, SpinnerSet};

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a mutex, recovering the data if another thread panicked while
/// holding it. Every critical section leaves its data consistent.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
