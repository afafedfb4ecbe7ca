//! Core types module - shared data structures and constants
//!
//! Plain data used by the renderer, the game rules, and the binaries. Nothing
//! in here performs I/O, and nothing depends on a terminal backend.
//!
//! # Coordinates
//!
//! All draw targets are [`Point`]s in character cells:
//!
//! - **x** grows to the right, **y** grows downwards
//! - **z** is the compositing depth: `0` is nearest to the viewer, larger
//!   values sit behind smaller ones
//!
//! Coordinates are signed so that callers can describe shapes that start
//! off-screen; the renderer clips them silently.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TITLE` | `"Console Tic-Tac-Toe"` | Window title |
//! | `DEFAULT_WIDTH` | 64 | Requested screen width in cells |
//! | `DEFAULT_HEIGHT` | 32 | Requested screen height in cells |
//! | `TURN_WAIT_MS` | 1500 | Pause after a move or a game ending |
//! | `BOARD_ORIGIN` | (1, 7) | Top-left corner of the board view |
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{Colour, FillMode, LineStyle, Point, Rectangle};
//!
//! let rect = Rectangle::new(Point::new(2, 3), 10, 10)
//!     .with_border(LineStyle::Double)
//!     .with_fill(FillMode::Dither2);
//! assert_eq!(rect.origin.z, 0);
//!
//! assert_eq!(Colour::GRAY, Colour::new(128, 128, 128));
//! ```

/// Default window title.
pub const DEFAULT_TITLE: &str = "Console Tic-Tac-Toe";

/// Default requested width in character cells.
pub const DEFAULT_WIDTH: u16 = 64;

/// Default requested height in character cells.
pub const DEFAULT_HEIGHT: u16 = 32;

/// Pause between turns and after a game ending (milliseconds).
pub const TURN_WAIT_MS: u64 = 1500;

/// Top-left corner of the tic-tac-toe board view.
pub const BOARD_ORIGIN: (i32, i32) = (1, 7);

/// Depth of a cell that has not been written this frame.
pub const UNSET_DEPTH: u8 = u8::MAX;

/// Number of space cells a tab expands to.
pub const TAB_WIDTH: usize = 4;

/// A draw target in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point {
    /// Point on the nearest layer (`z = 0`).
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y, z: 0 }
    }

    pub const fn with_depth(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z,
        }
    }
}

/// 24-bit RGB colour.
///
/// The renderer reduces colours to 8 hues x 2 intensities per layer, so
/// smooth gradients collapse to the nearest legacy console colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour::new(0, 0, 0);
    pub const WHITE: Colour = Colour::new(255, 255, 255);
    pub const GRAY: Colour = Colour::new(128, 128, 128);
    pub const BRIGHT_RED: Colour = Colour::new(255, 0, 0);
    pub const BRIGHT_GREEN: Colour = Colour::new(0, 255, 0);
    pub const BRIGHT_BLUE: Colour = Colour::new(0, 0, 255);
    pub const DARK_RED: Colour = Colour::new(128, 0, 0);
    pub const DARK_GREEN: Colour = Colour::new(0, 128, 0);
    pub const DARK_BLUE: Colour = Colour::new(0, 0, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Glyph family used for lines and rectangle borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    /// Single-line box drawing characters.
    #[default]
    Default,
    /// Double-line box drawing characters.
    Double,
}

/// How a rectangle's interior is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillMode {
    /// Border only.
    #[default]
    Outline,
    Solid,
    /// Densest dither.
    Dither1,
    Dither2,
    /// Sparsest dither.
    Dither3,
}

/// Rectangle draw request. Rasterized immediately, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rectangle {
    pub origin: Point,
    pub width: i32,
    pub height: i32,
    pub border: LineStyle,
    pub fill: FillMode,
}

impl Rectangle {
    pub const fn new(origin: Point, width: i32, height: i32) -> Self {
        Self {
            origin,
            width,
            height,
            border: LineStyle::Default,
            fill: FillMode::Outline,
        }
    }

    pub const fn with_border(mut self, border: LineStyle) -> Self {
        self.border = border;
        self
    }

    pub const fn with_fill(mut self, fill: FillMode) -> Self {
        self.fill = fill;
        self
    }
}

/// Line draw request. Lines run rightward then downward from `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub style: LineStyle,
}

impl Line {
    pub const fn new(start: Point, end: Point, style: LineStyle) -> Self {
        Self { start, end, style }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_matches_console_defaults() {
        assert_eq!(Colour::BLACK, Colour::new(0, 0, 0));
        assert_eq!(Colour::WHITE, Colour::new(255, 255, 255));
        assert_eq!(Colour::BRIGHT_RED, Colour::new(255, 0, 0));
        assert_eq!(Colour::DARK_GREEN, Colour::new(0, 128, 0));
        assert_eq!(Colour::DARK_BLUE, Colour::new(0, 0, 128));
    }

    #[test]
    fn point_defaults_to_nearest_layer() {
        assert_eq!(Point::new(3, 4).z, 0);
        assert_eq!(Point::with_depth(3, 4, 7).offset(1, -1), Point::with_depth(4, 3, 7));
    }

    #[test]
    fn rectangle_builder_defaults() {
        let r = Rectangle::new(Point::new(1, 1), 4, 4);
        assert_eq!(r.border, LineStyle::Default);
        assert_eq!(r.fill, FillMode::Outline);

        let r = r.with_fill(FillMode::Solid).with_border(LineStyle::Double);
        assert_eq!(r.border, LineStyle::Double);
        assert_eq!(r.fill, FillMode::Solid);
    }

    #[test]
    fn default_screen_size() {
        assert_eq!(DEFAULT_WIDTH, 64);
        assert_eq!(DEFAULT_HEIGHT, 32);
        assert_eq!(TURN_WAIT_MS, 1500);
    }
}
