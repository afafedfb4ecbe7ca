//! Screen: immediate-mode character compositor.
//!
//! Draw calls are rasterized straight into a depth-tested grid. Nothing
//! reaches the display until [`Screen::present`], which flushes the whole grid
//! in one write and starts the next frame blank.
//!
//! Out-of-bounds draws are routine (shapes partly off-screen) and are dropped
//! silently; draw calls never fail.

use anyhow::{ensure, Context, Result};
use log::{debug, info, trace};

use crate::attr::Attr;
use crate::fb::{Cell, DepthGrid, Frame};
use crate::glyph;
use crate::surface::Surface;
use crate::types::{Colour, FillMode, Line, Point, Rectangle, TAB_WIDTH};

pub struct Screen<S: Surface> {
    surface: S,
    grid: DepthGrid,
    frame: Frame,
    dirty: bool,
}

impl<S: Surface> Screen<S> {
    /// Configure `surface` and allocate the grid.
    ///
    /// The requested size is clamped to what the surface can show. Failing to
    /// configure the surface is fatal for the caller: nothing can be drawn.
    pub fn new(mut surface: S, title: &str, width: u16, height: u16) -> Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "screen size must be non-zero, got {width}x{height}"
        );

        let (max_w, max_h) = surface
            .max_size()
            .context("failed to query display size")?;
        let w = width.min(max_w);
        let h = height.min(max_h);
        ensure!(
            w > 0 && h > 0,
            "display has no usable area ({max_w}x{max_h})"
        );

        surface
            .configure(w, h, title)
            .with_context(|| format!("failed to configure display as {w}x{h}"))?;
        surface
            .set_cursor_visible(false)
            .context("failed to hide cursor")?;

        info!("screen {title:?} ready at {w}x{h} (requested {width}x{height})");

        Ok(Self {
            surface,
            grid: DepthGrid::new(w, h),
            frame: Frame::new(w, h),
            dirty: false,
        })
    }

    pub fn width(&self) -> i32 {
        self.grid.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.grid.height() as i32
    }

    /// `true` for non-negative coordinates up to and including the width and
    /// height. Cells on the far edge are accepted here and clipped by the grid.
    pub fn is_within_bounds(&self, position: Point) -> bool {
        if position.x < 0 || position.y < 0 || position.z < 0 {
            return false;
        }
        position.x <= self.width() && position.y <= self.height()
    }

    /// `true` if anything was drawn since the last flush.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Buffered content of a cell in the current, unpresented frame.
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        self.grid.get(x, y)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Flush the frame to the surface and reset the grid.
    ///
    /// Does nothing when no cell was written since the last flush.
    pub fn present(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        self.grid.drain_into(&mut self.frame);
        self.surface
            .write_frame(&self.frame)
            .context("failed to write frame")?;
        self.dirty = false;
        trace!("frame presented");
        Ok(())
    }

    /// Wipe the grid and the display right away.
    ///
    /// The grid stays dirty so the next [`present`](Self::present) writes a
    /// blank frame.
    pub fn clear(&mut self) -> Result<()> {
        self.grid.reset();
        self.frame.clear();
        self.surface
            .clear_immediate()
            .context("failed to clear display")?;
        self.dirty = true;
        debug!("screen cleared");
        Ok(())
    }

    pub fn draw_char(&mut self, ch: char, position: Point, foreground: Colour, background: Colour) {
        if !self.is_within_bounds(position) {
            return;
        }
        let Some(z) = depth(position.z) else {
            return;
        };
        let attr = Attr::from_colours(foreground, background);
        self.plot(ch, position.x, position.y, z, attr);
    }

    /// Draw text starting at `position`.
    ///
    /// `'\n'` returns to `position.x` on the next row and `'\t'` emits four
    /// spaces. Each character is clipped and depth-tested on its own.
    pub fn draw_text(
        &mut self,
        text: impl AsRef<str>,
        position: Point,
        foreground: Colour,
        background: Colour,
    ) {
        if !self.is_within_bounds(position) {
            return;
        }
        let Some(z) = depth(position.z) else {
            return;
        };
        let attr = Attr::from_colours(foreground, background);

        let mut x = position.x;
        let mut y = position.y;
        for ch in text.as_ref().chars() {
            match ch {
                '\n' => {
                    x = position.x;
                    y += 1;
                }
                '\t' => {
                    for _ in 0..TAB_WIDTH {
                        self.plot(' ', x, y, z, attr);
                        x += 1;
                    }
                }
                _ => {
                    self.plot(ch, x, y, z, attr);
                    x += 1;
                }
            }
        }
    }

    /// Rasterize a rectangle.
    ///
    /// Rows are halved (`height / 2`) since a character cell is about twice
    /// as tall as it is wide. A 1x1 rectangle is a single fill glyph.
    pub fn draw_rectangle(&mut self, rect: Rectangle, foreground: Colour, background: Colour) {
        if !self.is_within_bounds(rect.origin) || rect.width <= 0 || rect.height <= 0 {
            return;
        }
        let Some(z) = depth(rect.origin.z) else {
            return;
        };
        let attr = Attr::from_colours(foreground, background);
        let fill = glyph::fill_glyph(rect.fill);

        let left = rect.origin.x;
        let top = rect.origin.y;

        if rect.width == 1 && rect.height == 1 {
            self.plot(fill, left, top, z, attr);
            return;
        }

        // Unclipped far edges; corners are only drawn where these land.
        let right = left.saturating_add(rect.width);
        let bottom = top.saturating_add(rect.height / 2);
        let last_x = self.width() - 1;
        let last_y = self.height() - 1;

        if rect.fill != FillMode::Outline {
            for x in left..right.min(self.width()) {
                for y in top..bottom.min(self.height()) {
                    self.plot(fill, x, y, z, attr);
                }
            }
            return;
        }

        // Edges run top, right, bottom, left. Each one starts on the cell
        // where the previous one stopped and opens with its corner glyph.
        let border = glyph::border_glyphs(rect.border);

        for x in left..right.min(self.width()) {
            let ch = if x == left { border.top_left } else { border.horizontal };
            self.plot(ch, x, top, z, attr);
        }
        if right <= last_x {
            for y in top..bottom.min(self.height()) {
                let ch = if y == top { border.top_right } else { border.vertical };
                self.plot(ch, right, y, z, attr);
            }
        }
        if bottom <= last_y {
            for x in (left + 1..=right.min(last_x)).rev() {
                let ch = if x == right { border.bottom_right } else { border.horizontal };
                self.plot(ch, x, bottom, z, attr);
            }
        }
        for y in (top + 1..=bottom.min(last_y)).rev() {
            let ch = if y == bottom { border.bottom_left } else { border.vertical };
            self.plot(ch, left, y, z, attr);
        }
    }

    /// Rasterize a line as a horizontal run followed by a vertical run.
    ///
    /// Lines only run rightward and downward from `start`; anything else is
    /// dropped. Runs of a single cell (or less) are not drawn, and the
    /// vertical extent is halved like rectangles.
    pub fn draw_line(&mut self, line: Line, foreground: Colour, background: Colour) {
        let Line {
            mut start,
            mut end,
            style,
        } = line;

        if start.x > self.width() || start.y > self.height() || start.z < 0 {
            return;
        }
        if end.x < 0 || end.x < start.x || end.y < 0 || end.y < start.y {
            return;
        }
        let Some(z) = depth(start.z) else {
            return;
        };

        start.x = start.x.max(0);
        start.y = start.y.max(0);
        end.x = end.x.min(self.width());
        end.y = end.y.min(self.height());

        let attr = Attr::from_colours(foreground, background);
        let (horizontal, vertical) = glyph::line_glyphs(style);

        let run_x = end.x - start.x;
        let run_y = (end.y - start.y) / 2;

        let mut x = start.x;
        let mut y = start.y;

        if run_x > 1 {
            for _ in 0..run_x {
                self.plot(horizontal, x, y, z, attr);
                x += 1;
            }
        }
        if run_y > 1 {
            for _ in 0..run_y {
                self.plot(vertical, x, y, z, attr);
                y += 1;
            }
        }
    }

    #[inline]
    fn plot(&mut self, ch: char, x: i32, y: i32, z: u8, attr: Attr) {
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            return;
        };
        if self.grid.put(x, y, z, ch, attr) {
            self.dirty = true;
        }
    }
}

/// Depths beyond the unset marker can never win a depth test.
fn depth(z: i32) -> Option<u8> {
    u8::try_from(z).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;
    use crate::types::{LineStyle, DEFAULT_TITLE};

    fn screen(w: u16, h: u16) -> Screen<MemorySurface> {
        Screen::new(MemorySurface::new(200, 100), DEFAULT_TITLE, w, h).unwrap()
    }

    fn ch_at(s: &Screen<MemorySurface>, x: i32, y: i32) -> Option<char> {
        s.cell(x, y).and_then(|c| c.ch)
    }

    #[test]
    fn construction_clamps_and_configures() {
        let s = Screen::new(MemorySurface::new(40, 20), "demo", 64, 32).unwrap();
        assert_eq!((s.width(), s.height()), (40, 20));
        assert_eq!(s.surface().size(), Some((40, 20)));
        assert_eq!(s.surface().title(), Some("demo"));
        assert!(!s.surface().cursor_visible());
        assert!(!s.is_dirty());
    }

    #[test]
    fn construction_rejects_zero_size() {
        assert!(Screen::new(MemorySurface::new(40, 20), "x", 0, 5).is_err());
        assert!(Screen::new(MemorySurface::new(0, 20), "x", 10, 5).is_err());
    }

    #[test]
    fn construction_fails_when_surface_refuses() {
        let surface = MemorySurface::new(40, 20).with_configure_error();
        let err = Screen::new(surface, "x", 10, 10).err().unwrap();
        assert!(format!("{err:#}").contains("failed to configure display"));
    }

    #[test]
    fn depth_beyond_unset_is_dropped() {
        let mut s = screen(4, 4);
        s.draw_char('A', Point::with_depth(1, 1, 256), Colour::WHITE, Colour::BLACK);
        assert_eq!(ch_at(&s, 1, 1), None);
        assert!(!s.is_dirty());

        s.draw_char('B', Point::with_depth(1, 1, 255), Colour::WHITE, Colour::BLACK);
        assert_eq!(ch_at(&s, 1, 1), Some('B'));
    }

    #[test]
    fn tab_expands_to_four_spaces() {
        let mut s = screen(16, 2);
        s.draw_text("a\tb", Point::new(0, 0), Colour::WHITE, Colour::BLACK);
        for x in 1..5 {
            assert_eq!(ch_at(&s, x, 0), Some(' '));
        }
        assert_eq!(ch_at(&s, 5, 0), Some('b'));
    }

    #[test]
    fn text_clips_at_right_edge_without_wrapping() {
        let mut s = screen(4, 2);
        s.draw_text("abcdef", Point::new(2, 0), Colour::WHITE, Colour::BLACK);
        assert_eq!(ch_at(&s, 2, 0), Some('a'));
        assert_eq!(ch_at(&s, 3, 0), Some('b'));
        assert_eq!(ch_at(&s, 0, 1), None);
    }

    #[test]
    fn text_with_negative_origin_is_dropped() {
        let mut s = screen(8, 2);
        s.draw_text("abcdef", Point::new(-2, 0), Colour::WHITE, Colour::BLACK);
        assert!(!s.is_dirty());
    }

    #[test]
    fn outline_rectangle_corners() {
        let mut s = screen(40, 20);
        s.draw_rectangle(Rectangle::new(Point::new(0, 0), 10, 10), Colour::WHITE, Colour::BLACK);

        assert_eq!(ch_at(&s, 0, 0), Some('┌'));
        assert_eq!(ch_at(&s, 10, 0), Some('┐'));
        assert_eq!(ch_at(&s, 10, 5), Some('┘'));
        assert_eq!(ch_at(&s, 0, 5), Some('└'));
        assert_eq!(ch_at(&s, 5, 0), Some('─'));
        assert_eq!(ch_at(&s, 5, 5), Some('─'));
        assert_eq!(ch_at(&s, 0, 3), Some('│'));
        assert_eq!(ch_at(&s, 10, 3), Some('│'));
        // Interior untouched.
        assert_eq!(ch_at(&s, 5, 3), None);
    }

    #[test]
    fn double_outline_uses_double_glyphs() {
        let mut s = screen(40, 20);
        let rect = Rectangle::new(Point::new(2, 2), 4, 4).with_border(LineStyle::Double);
        s.draw_rectangle(rect, Colour::WHITE, Colour::BLACK);

        assert_eq!(ch_at(&s, 2, 2), Some('╔'));
        assert_eq!(ch_at(&s, 6, 2), Some('╗'));
        assert_eq!(ch_at(&s, 6, 4), Some('╝'));
        assert_eq!(ch_at(&s, 2, 4), Some('╚'));
        assert_eq!(ch_at(&s, 2, 3), Some('║'));
    }

    #[test]
    fn dither_fill_covers_halved_interior() {
        let mut s = screen(40, 20);
        let rect = Rectangle::new(Point::new(1, 1), 3, 4).with_fill(FillMode::Dither2);
        s.draw_rectangle(rect, Colour::WHITE, Colour::BLACK);

        let written = s.grid.cells().iter().filter(|c| !c.is_unset()).count();
        assert_eq!(written, 3 * 2);
        assert_eq!(ch_at(&s, 1, 1), Some('▒'));
        assert_eq!(ch_at(&s, 3, 2), Some('▒'));
        assert_eq!(ch_at(&s, 1, 3), None);
    }

    #[test]
    fn huge_rectangles_only_touch_visible_cells() {
        let mut s = screen(20, 10);
        let rect = Rectangle::new(Point::new(5, 1), i32::MAX, i32::MAX).with_fill(FillMode::Solid);
        s.draw_rectangle(rect, Colour::WHITE, Colour::BLACK);
        let written = s.grid.cells().iter().filter(|c| !c.is_unset()).count();
        assert_eq!(written, 15 * 9);
        assert_eq!(ch_at(&s, 4, 1), None);
        assert_eq!(ch_at(&s, 5, 0), None);
        assert_eq!(ch_at(&s, 19, 9), Some('█'));

        let mut s = screen(20, 10);
        let rect = Rectangle::new(Point::new(5, 1), i32::MAX, i32::MAX);
        s.draw_rectangle(rect, Colour::WHITE, Colour::BLACK);
        let written = s.grid.cells().iter().filter(|c| !c.is_unset()).count();
        // Top edge plus the left edge below its corner.
        assert_eq!(written, 15 + 8);
        assert_eq!(ch_at(&s, 5, 1), Some('┌'));
        assert_eq!(ch_at(&s, 19, 1), Some('─'));
        assert_eq!(ch_at(&s, 5, 9), Some('│'));
    }

    #[test]
    fn wide_fill_is_clipped_to_the_grid() {
        let mut s = screen(20, 10);
        let rect = Rectangle::new(Point::new(0, 0), 200_000_000, 8).with_fill(FillMode::Solid);
        s.draw_rectangle(rect, Colour::WHITE, Colour::BLACK);
        let written = s.grid.cells().iter().filter(|c| !c.is_unset()).count();
        assert_eq!(written, 20 * 4);
    }

    #[test]
    fn clipped_outline_shows_no_false_corners() {
        let mut s = screen(20, 10);
        s.draw_rectangle(Rectangle::new(Point::new(15, 0), 10, 6), Colour::WHITE, Colour::BLACK);

        assert_eq!(ch_at(&s, 15, 0), Some('┌'));
        assert_eq!(ch_at(&s, 19, 0), Some('─'));
        assert_eq!(ch_at(&s, 19, 3), Some('─'));
        assert_eq!(ch_at(&s, 15, 3), Some('└'));
        assert_eq!(ch_at(&s, 19, 1), None);

        let corners = ['┐', '┘'];
        assert!(s
            .grid
            .cells()
            .iter()
            .filter_map(|c| c.ch)
            .all(|ch| !corners.contains(&ch)));

        let mut s = screen(20, 10);
        s.draw_rectangle(Rectangle::new(Point::new(2, 6), 4, 20), Colour::WHITE, Colour::BLACK);
        assert_eq!(ch_at(&s, 6, 6), Some('┐'));
        assert_eq!(ch_at(&s, 6, 9), Some('│'));
        assert_eq!(ch_at(&s, 2, 9), Some('│'));
    }

    #[test]
    fn degenerate_rectangle_is_dropped() {
        let mut s = screen(10, 10);
        s.draw_rectangle(Rectangle::new(Point::new(1, 1), 0, 4), Colour::WHITE, Colour::BLACK);
        s.draw_rectangle(Rectangle::new(Point::new(1, 1), 4, -2), Colour::WHITE, Colour::BLACK);
        assert!(!s.is_dirty());
    }

    #[test]
    fn line_turns_the_corner() {
        let mut s = screen(40, 20);
        s.draw_line(
            Line::new(Point::new(2, 2), Point::new(6, 8), LineStyle::Default),
            Colour::WHITE,
            Colour::BLACK,
        );
        for x in 2..6 {
            assert_eq!(ch_at(&s, x, 2), Some('─'));
        }
        // Vertical run continues from x = 6 for (8 - 2) / 2 = 3 rows.
        for y in 2..5 {
            assert_eq!(ch_at(&s, 6, y), Some('│'));
        }
        assert_eq!(ch_at(&s, 6, 5), None);
    }

    #[test]
    fn line_end_is_clamped_to_the_screen() {
        let mut s = screen(10, 10);
        s.draw_line(
            Line::new(Point::new(-3, 0), Point::new(50, 0), LineStyle::Double),
            Colour::WHITE,
            Colour::BLACK,
        );
        for x in 0..10 {
            assert_eq!(ch_at(&s, x, 0), Some('═'));
        }
    }

    #[test]
    fn backwards_line_is_dropped() {
        let mut s = screen(10, 10);
        s.draw_line(
            Line::new(Point::new(5, 5), Point::new(1, 9), LineStyle::Default),
            Colour::WHITE,
            Colour::BLACK,
        );
        s.draw_line(
            Line::new(Point::new(1, 5), Point::new(9, 1), LineStyle::Default),
            Colour::WHITE,
            Colour::BLACK,
        );
        assert!(!s.is_dirty());
    }

    #[test]
    fn clear_resets_buffered_cells() {
        let mut s = screen(10, 10);
        s.draw_char('X', Point::new(1, 1), Colour::WHITE, Colour::BLACK);
        s.clear().unwrap();
        assert_eq!(ch_at(&s, 1, 1), None);
        assert_eq!(s.surface().clears(), 1);
    }
}
