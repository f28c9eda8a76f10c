//! Terminal Engine - anchored rows for concurrent spinners
//!
//! This module solves the "where is my cursor" problem by addressing every
//! row relative to one anchor saved when the set is created (`ESC[s`). A row
//! write restores the anchor (`ESC[u`), moves down by the row's offset, and
//! clears the line before drawing, so it never depends on where a previous
//! write left the cursor.
//!
//! Commands are queued into an in-memory [`Frame`]; the output sink writes a
//! whole frame at once.

use crossterm::{
    Command, QueueableCommand,
    cursor::{Hide, MoveDown, Show},
    style::{Attribute, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::fmt;
#[cfg(windows)]
use std::io;

/// Save the cursor position (`ESC[s`).
///
/// crossterm's `SavePosition` emits the DEC form `ESC 7`, which a terminal
/// tracks separately from `ESC[u`.
#[derive(Debug, Clone, Copy)]
pub struct SaveAnchor;

impl Command for SaveAnchor {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[s")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "cursor anchor requires ANSI support",
        ))
    }
}

/// Restore the cursor position saved by [`SaveAnchor`] (`ESC[u`).
#[derive(Debug, Clone, Copy)]
pub struct RestoreAnchor;

impl Command for RestoreAnchor {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[u")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "cursor anchor requires ANSI support",
        ))
    }
}

/// A batch of terminal output, written to the sink in one call.
#[derive(Debug, Default, Clone)]
pub struct Frame {
    bytes: Vec<u8>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the current cursor position as row 0.
    pub fn save_anchor(&mut self) -> &mut Self {
        self.queue(SaveAnchor)
    }

    pub fn hide_cursor(&mut self) -> &mut Self {
        self.queue(Hide)
    }

    /// Show the cursor and reset all attributes (`ESC[?25h ESC[0m`).
    pub fn restore_terminal(&mut self) -> &mut Self {
        self.queue(Show).reset_attributes()
    }

    pub fn reset_attributes(&mut self) -> &mut Self {
        self.queue(SetAttribute(Attribute::Reset))
    }

    /// Jump to a row and clear it: `ESC[u`, `ESC[<n>B` when n > 0, `ESC[K`.
    pub fn begin_row(&mut self, line_offset: usize) -> &mut Self {
        self.move_below_anchor(line_offset)
            .queue(Clear(ClearType::UntilNewLine))
    }

    /// Park the cursor on the first line below `rows` rows.
    pub fn finish(&mut self, rows: usize) -> &mut Self {
        if rows == 0 {
            return self;
        }
        self.move_below_anchor(rows)
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.bytes.extend_from_slice(text.as_bytes());
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn move_below_anchor(&mut self, rows: usize) -> &mut Self {
        self.queue(RestoreAnchor);
        if rows > 0 {
            // Offsets past u16::MAX cannot be addressed; clamp to the last row.
            self.queue(MoveDown(u16::try_from(rows).unwrap_or(u16::MAX)));
        }
        self
    }

    fn queue(&mut self, command: impl Command) -> &mut Self {
        // Queueing into a Vec cannot fail.
        let _ = self.bytes.queue(command);
        self
    }
}
