//! Render Loop - single-threaded spinner animation
//!
//! One dedicated thread owns the animation. It repaints every active row once
//! per frame, applies cursor transitions in the order callers decided them,
//! and restores the terminal on the way out.
//!
/// # Implementation Note: Rendezvous Channel
///
/// Control calls hand their event over a zero-capacity channel, so a call
/// returns as soon as the loop has accepted the event, never after a frame
/// delay. With nothing active the loop parks on `recv` instead of ticking;
/// a timer only exists while at least one spinner is running.
///
/// The loop never touches the sender's lock, and it paints while holding the
/// output lock. A caller that prints a final line takes that same lock after
/// flipping the record inactive, so no animation frame can land on a row
/// after its final line.
use super::buffer::OutputBuffer;
use super::engine::Frame;
use super::progress::ProgressIndicator;
use super::theme::Theme;
use crate::lock;
use crate::registry::Registry;
use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

/// Events sent to the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenderEvent {
    /// A spinner became (or stayed) active.
    Started { index: usize, hide_cursor: bool },
    /// A spinner's message changed; active rows show it on the next frame.
    Updated { index: usize },
    /// A spinner printed its final line.
    Stopped { index: usize, show_cursor: bool },
    /// Restore the terminal and exit.
    Shutdown,
}

/// State shared between the caller-facing handle and the render loop.
#[derive(Debug)]
pub(crate) struct Shared {
    pub(crate) registry: Mutex<Registry>,
    pub(crate) output: OutputBuffer,
    pub(crate) theme: Theme,
}

/// Spawn the render loop thread.
pub(crate) fn spawn(
    shared: Arc<Shared>,
    frequency: Duration,
) -> io::Result<(SyncSender<RenderEvent>, thread::JoinHandle<()>)> {
    let (sender, receiver) = mpsc::sync_channel(0);

    let handle = thread::Builder::new()
        .name("multispin-render".to_string())
        .spawn(move || run_event_loop(&receiver, &shared, frequency))?;

    Ok((sender, handle))
}

fn run_event_loop(receiver: &Receiver<RenderEvent>, shared: &Shared, frequency: Duration) {
    tracing::debug!(frequency = ?frequency, "Render loop started");

    let mut progress = ProgressIndicator::new(shared.theme.frames);
    // Deadline of the next repaint; None while idle.
    let mut next_frame: Option<Instant> = None;

    loop {
        let received = match next_frame {
            Some(deadline) => {
                receiver.recv_timeout(deadline.saturating_duration_since(Instant::now()))
            }
            None => receiver.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(RenderEvent::Started { index, hide_cursor }) => {
                tracing::trace!(index, hide_cursor, "Spinner started");
                if hide_cursor {
                    let mut frame = Frame::new();
                    frame.hide_cursor();
                    shared.output.emit(&frame);
                }
                if next_frame.is_none() {
                    next_frame = Some(Instant::now());
                }
            }
            Ok(RenderEvent::Updated { index }) => {
                tracing::trace!(index, "Spinner message updated");
            }
            Ok(RenderEvent::Stopped { index, show_cursor }) => {
                tracing::trace!(index, show_cursor, "Spinner stopped");
                if show_cursor {
                    let mut frame = Frame::new();
                    frame.restore_terminal();
                    shared.output.emit(&frame);
                }
            }
            Ok(RenderEvent::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                // A deadline past what the clock can represent means no more
                // frames; the loop then waits for events only.
                next_frame = if paint_active_rows(shared, &mut progress) {
                    Instant::now().checked_add(frequency)
                } else {
                    None
                };
            }
        }
    }

    restore_terminal(shared);
    tracing::debug!("Render loop stopped");
}

/// Repaint every active row with the current glyph.
///
/// Returns false when nothing is active, which puts the loop back to idle.
fn paint_active_rows(shared: &Shared, progress: &mut ProgressIndicator) -> bool {
    let mut output = shared.output.lock();
    let rows = lock(&shared.registry).active_rows();
    if rows.is_empty() {
        return false;
    }

    let glyph = progress.current_glyph();
    let mut frame = Frame::new();
    for row in &rows {
        frame
            .begin_row(row.line_offset)
            .reset_attributes()
            .text(glyph)
            .text(" ")
            .text(&row.message);
    }
    output.emit(&frame);
    progress.tick();
    true
}

/// Park the cursor below the last row, show it, and reset attributes.
pub(crate) fn restore_terminal(shared: &Shared) {
    let mut output = shared.output.lock();
    let rows = lock(&shared.registry).len();

    let mut frame = Frame::new();
    frame.finish(rows).restore_terminal();
    output.emit(&frame);
}
