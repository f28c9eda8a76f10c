//! UI Module - terminal output for a set of spinners
//!
//! Everything that writes escape sequences lives here.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  SpinnerSet  │  register / start / message / stop (any thread)
//! └──────┬───────┘
//!        │ sends events
//!        ▼
//! ┌──────────────┐
//! │    Actor     │  Render loop: one frame per tick while anything runs
//! └──────┬───────┘
//!        │ paints through
//!        ▼
//! ┌──────────────┐
//! │    Buffer    │  Shared sink, one whole frame per write
//! └──────┬───────┘
//!        │ addressed by
//!        ▼
//! ┌──────────────┐
//! │    Engine    │  Anchor-relative rows
//! └──────┬───────┘
//!        │ styles with
//!        ▼
//! ┌──────────────┐
//! │    Theme     │  Glyphs, markers, colors
//! └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`theme`] - Glyphs, markers, and marker colors
//! - [`progress`] - Animation frame state
//! - [`engine`] - Anchor-relative row addressing
//! - [`buffer`] - Serialized writes to the output stream
//! - `actor` - The render loop

pub(crate) mod actor;
pub mod buffer;
pub mod engine;
pub mod progress;
pub mod theme;

pub use buffer::OutputBuffer;
pub use engine::Frame;
pub use theme::{Outcome, Theme};
