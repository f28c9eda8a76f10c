//! `SpinnerSet` - the control API shared by every task.
//!
//! Each operation mutates the registry under its lock, then forwards the
//! transition to the render loop. `stop` and `stop_with_error` also print the
//! final line on the caller's thread, so it is visible before they return.

use crate::config::SpinnerConfig;
use crate::error::SpinnerError;
use crate::lock;
use crate::registry::Registry;
use crate::ui::actor::{self, RenderEvent, Shared};
use crate::ui::buffer::OutputBuffer;
use crate::ui::engine::Frame;
use crate::ui::theme::{Outcome, Theme};
use std::fmt;
use std::io::{self, Write};
use std::sync::mpsc::SyncSender;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

/// A group of spinners drawn on consecutive terminal rows.
///
/// All methods take `&self`; share the set between threads by reference
/// (e.g. with [`std::thread::scope`]) or behind an `Arc`.
///
/// ```no_run
/// use multispin::{SpinnerConfig, SpinnerSet};
///
/// let spinners = SpinnerSet::new(SpinnerConfig::default())?;
/// let build = spinners.register();
/// spinners.start(build, "Building...");
/// spinners.stop(build, "Built");
/// spinners.shutdown()?;
/// # Ok::<(), multispin::SpinnerError>(())
/// ```
pub struct SpinnerSet {
    shared: Arc<Shared>,
    // Held from the registry decision until the render loop accepts the event.
    events: Mutex<SyncSender<RenderEvent>>,
    render_loop: Mutex<Option<JoinHandle<()>>>,
    config: SpinnerConfig,
}

impl SpinnerSet {
    /// Create a set drawing on stdout and start its render loop.
    pub fn new(config: SpinnerConfig) -> Result<Self, SpinnerError> {
        Self::with_writer(config, io::stdout())
    }

    /// Create a set drawing on an arbitrary sink.
    ///
    /// Writes the preamble (show cursor, reset attributes, save the anchor
    /// for row 0) before the render loop starts.
    pub fn with_writer(
        config: SpinnerConfig,
        writer: impl Write + Send + 'static,
    ) -> Result<Self, SpinnerError> {
        let config = config.normalized();
        let shared = Arc::new(Shared {
            registry: Mutex::new(Registry::new()),
            output: OutputBuffer::new(writer),
            theme: Theme::from_config(&config),
        });

        let mut preamble = Frame::new();
        preamble.restore_terminal().save_anchor();
        shared.output.emit(&preamble);

        let (sender, handle) = actor::spawn(Arc::clone(&shared), config.frequency)?;

        Ok(Self {
            shared,
            events: Mutex::new(sender),
            render_loop: Mutex::new(Some(handle)),
            config,
        })
    }

    /// Add an inactive spinner on the next free row and return its index.
    pub fn register(&self) -> usize {
        let index = lock(&self.shared.registry).register();
        tracing::trace!(index, "Spinner registered");
        index
    }

    /// Activate a spinner with `message`. Unknown indices are ignored.
    ///
    /// The first active spinner hides the cursor. Starting a spinner that
    /// is already running only replaces its message.
    pub fn start(&self, index: usize, message: &str) {
        let events = lock(&self.events);
        let Some(started) = lock(&self.shared.registry).start(index, message) else {
            tracing::trace!(index, "Ignoring start of unknown spinner");
            return;
        };
        if started.hide_cursor {
            tracing::debug!("First spinner active, hiding cursor");
        }
        send(
            &events,
            RenderEvent::Started {
                index,
                hide_cursor: started.hide_cursor,
            },
        );
    }

    /// Replace a spinner's text. Running spinners show it on the next frame;
    /// an idle spinner keeps it until `start` replaces it.
    pub fn message(&self, index: usize, message: &str) {
        let events = lock(&self.events);
        if !lock(&self.shared.registry).set_message(index, message) {
            tracing::trace!(index, "Ignoring message for unknown spinner");
            return;
        }
        send(&events, RenderEvent::Updated { index });
    }

    /// Stop a running spinner and print `✓ message` on its row.
    pub fn stop(&self, index: usize, message: &str) {
        self.finish(index, message, Outcome::Success);
    }

    /// Stop a running spinner and print `✗ message` on its row.
    pub fn stop_with_error(&self, index: usize, message: &str) {
        self.finish(index, message, Outcome::Failure);
    }

    fn finish(&self, index: usize, message: &str, outcome: Outcome) {
        let stopped = {
            let events = lock(&self.events);
            let Some(stopped) = lock(&self.shared.registry).stop(index, message) else {
                tracing::trace!(index, "Ignoring stop of inactive or unknown spinner");
                return;
            };
            if stopped.show_cursor {
                tracing::debug!("Last spinner stopped, restoring cursor");
            }
            send(
                &events,
                RenderEvent::Stopped {
                    index,
                    show_cursor: stopped.show_cursor,
                },
            );
            stopped
        };

        // The record is already inactive, so the render loop cannot paint
        // this row again once we hold the output lock.
        let (color, marker) = self.shared.theme.marker(outcome);
        let mut frame = Frame::new();
        frame
            .begin_row(stopped.line_offset)
            .text(color)
            .text(marker)
            .text(" ")
            .text(message)
            .reset_attributes()
            .text("\n");
        self.shared.output.emit(&frame);
    }

    /// Stop the render loop and restore the terminal.
    ///
    /// Safe to call more than once; only the first call does any work.
    /// Spinners still running are abandoned where they were last painted.
    pub fn shutdown(&self) -> Result<(), SpinnerError> {
        let Some(handle) = lock(&self.render_loop).take() else {
            return Ok(());
        };

        send(&lock(&self.events), RenderEvent::Shutdown);

        if handle.join().is_err() {
            tracing::error!("Render loop panicked, restoring terminal");
            actor::restore_terminal(&self.shared);
            return Err(SpinnerError::RenderLoopPanicked);
        }
        Ok(())
    }

    /// A handle that can restore the terminal from another context, such
    /// as a Ctrl+C handler, while the set is still alive.
    pub fn restore_handle(&self) -> RestoreHandle {
        RestoreHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.shared.registry).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.shared.registry).is_empty()
    }

    /// Number of spinners between `start` and their final line.
    pub fn active_count(&self) -> usize {
        lock(&self.shared.registry).active_count()
    }

    pub fn line_offset(&self, index: usize) -> Option<usize> {
        lock(&self.shared.registry)
            .get(index)
            .map(|record| record.line_offset)
    }

    pub fn is_active(&self, index: usize) -> bool {
        lock(&self.shared.registry)
            .get(index)
            .is_some_and(|record| record.active)
    }

    pub fn current_message(&self, index: usize) -> Option<String> {
        lock(&self.shared.registry)
            .get(index)
            .map(|record| record.message.clone())
    }

    /// The normalized configuration in use.
    pub fn config(&self) -> &SpinnerConfig {
        &self.config
    }
}

impl Drop for SpinnerSet {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            tracing::warn!("Spinner teardown failed: {e}");
        }
    }
}

impl fmt::Debug for SpinnerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpinnerSet")
            .field("config", &self.config)
            .field("spinners", &self.len())
            .field("active", &self.active_count())
            .finish_non_exhaustive()
    }
}

/// Restores the terminal of a [`SpinnerSet`] without owning it.
#[derive(Debug, Clone)]
pub struct RestoreHandle {
    shared: Arc<Shared>,
}

impl RestoreHandle {
    /// Park the cursor below the spinner rows, show it, and reset attributes.
    ///
    /// Writes through the set's output lock, so it never lands inside a frame.
    pub fn restore(&self) {
        actor::restore_terminal(&self.shared);
    }
}

/// Hand an event to the render loop, blocking until it is accepted.
fn send(events: &SyncSender<RenderEvent>, event: RenderEvent) {
    if events.send(event).is_err() {
        tracing::debug!(?event, "Render loop has exited, dropping event");
    }
}
