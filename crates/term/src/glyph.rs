//! Glyph tables for fills, borders and lines.

use crate::types::{FillMode, LineStyle};

pub const SOLID: char = '█';
pub const DITHER_1: char = '▓';
pub const DITHER_2: char = '▒';
pub const DITHER_3: char = '░';

/// Corner and edge glyphs of a rectangle outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_right: char,
    pub bottom_left: char,
    pub horizontal: char,
    pub vertical: char,
}

pub const SINGLE_BORDER: BorderGlyphs = BorderGlyphs {
    top_left: '┌',
    top_right: '┐',
    bottom_right: '┘',
    bottom_left: '└',
    horizontal: '─',
    vertical: '│',
};

pub const DOUBLE_BORDER: BorderGlyphs = BorderGlyphs {
    top_left: '╔',
    top_right: '╗',
    bottom_right: '╝',
    bottom_left: '╚',
    horizontal: '═',
    vertical: '║',
};

/// Fill glyph for a rectangle. Outline shares the solid block, which is what
/// a 1x1 rectangle renders as.
pub fn fill_glyph(mode: FillMode) -> char {
    match mode {
        FillMode::Outline | FillMode::Solid => SOLID,
        FillMode::Dither1 => DITHER_1,
        FillMode::Dither2 => DITHER_2,
        FillMode::Dither3 => DITHER_3,
    }
}

pub fn border_glyphs(style: LineStyle) -> &'static BorderGlyphs {
    match style {
        LineStyle::Default => &SINGLE_BORDER,
        LineStyle::Double => &DOUBLE_BORDER,
    }
}

/// `(horizontal, vertical)` glyphs for a line run.
pub fn line_glyphs(style: LineStyle) -> (char, char) {
    let border = border_glyphs(style);
    (border.horizontal, border.vertical)
}
