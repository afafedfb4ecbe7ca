//! Terminal input module (engine-facing).
//!
//! This module is independent of the renderer. It maps `crossterm` key events
//! into prompt edits, buffers the prompt line, and parses submitted lines into
//! [`Command`]s.

pub mod command;
pub mod editor;
pub mod map;

pub use command::{parse_command, Command};
pub use editor::{LineEditor, LINE_CAPACITY};
pub use map::{handle_key_event, should_quit, EditAction};
