//! Depth-tested cell grid and the physical frame it is flushed into.

use crate::attr::Attr;
use crate::types::UNSET_DEPTH;

/// A single logical cell of the draw grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Compositing depth, `0` is nearest.
    pub z: u8,
    pub ch: Option<char>,
    pub attr: Attr,
}

impl Cell {
    pub const UNSET: Cell = Cell {
        z: UNSET_DEPTH,
        ch: None,
        attr: Attr::empty(),
    };

    pub fn is_unset(&self) -> bool {
        self.ch.is_none()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::UNSET
    }
}

/// 2D grid of depth-tested cells, `index = x + y * width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthGrid {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl DepthGrid {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::UNSET; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write a cell if it is addressable and passes the depth test.
    ///
    /// Returns `true` when the cell was written. Equal depth replaces the
    /// previous content.
    pub fn put(&mut self, x: u16, y: u16, z: u8, ch: char, attr: Attr) -> bool {
        let Some(i) = self.idx(x, y) else {
            return false;
        };
        let cell = &mut self.cells[i];
        if z > cell.z {
            return false;
        }
        *cell = Cell {
            z,
            ch: Some(ch),
            attr,
        };
        true
    }

    pub fn reset(&mut self) {
        self.cells.fill(Cell::UNSET);
    }

    /// Drain every cell into `frame`, leaving the grid unset.
    pub fn drain_into(&mut self, frame: &mut Frame) {
        debug_assert_eq!(self.cells.len(), frame.cells.len());
        for (cell, slot) in self.cells.iter_mut().zip(frame.cells.iter_mut()) {
            *slot = FrameCell::from(*cell);
            *cell = Cell::UNSET;
        }
    }
}

/// One slot of the physical display buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCell {
    pub ch: char,
    pub attr: Attr,
}

impl FrameCell {
    pub const BLANK: FrameCell = FrameCell {
        ch: ' ',
        attr: Attr::empty(),
    };
}

impl Default for FrameCell {
    fn default() -> Self {
        Self::BLANK
    }
}

impl From<Cell> for FrameCell {
    fn from(cell: Cell) -> Self {
        match cell.ch {
            Some(ch) => FrameCell {
                ch,
                attr: cell.attr,
            },
            None => FrameCell::BLANK,
        }
    }
}

/// Physical display buffer handed to a [`crate::Surface`] in one write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<FrameCell>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![FrameCell::BLANK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[FrameCell] {
        &self.cells
    }

    pub fn get(&self, x: u16, y: u16) -> Option<FrameCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get((y as usize) * (self.width as usize) + (x as usize))
            .copied()
    }

    pub fn row(&self, y: u16) -> &[FrameCell] {
        if y >= self.height {
            return &[];
        }
        let start = (y as usize) * (self.width as usize);
        &self.cells[start..start + self.width as usize]
    }

    /// Characters of row `y` as a string (trailing blanks kept).
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| *c == FrameCell::BLANK)
    }

    pub fn clear(&mut self) {
        self.cells.fill(FrameCell::BLANK);
    }
}
