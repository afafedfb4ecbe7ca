//! Terminal "screen" module.
//!
//! A small immediate-mode character compositor. Draw calls (chars, text,
//! lines, rectangles) land in a depth-tested grid; [`Screen::present`] flushes
//! the whole grid to a [`Surface`] in one batched write.
//!
//! Goals:
//! - Keep drawing pure and testable against [`MemorySurface`]
//! - Never fail on off-screen draws, clip them instead
//! - One terminal write per frame

pub mod attr;
pub mod demo;
pub mod fb;
pub mod game_view;
pub mod glyph;
pub mod renderer;
pub mod screen;
pub mod surface;

use std::thread;
use std::time::Duration;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use attr::{Attr, Layer};
pub use demo::draw_demo;
pub use fb::{Cell, DepthGrid, Frame, FrameCell};
pub use game_view::{mark_colour, GameView, Hud, Status};
pub use renderer::{attr_to_colors, encode_frame_into, TerminalSurface};
pub use screen::Screen;
pub use surface::{MemorySurface, Surface};

/// Block the calling thread for `milliseconds`. Used for pacing between turns.
pub fn wait(milliseconds: u64) {
    thread::sleep(Duration::from_millis(milliseconds));
}
