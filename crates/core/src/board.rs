//! Board module - 3x3 grid with win and tie detection.

use std::fmt;

use arrayvec::ArrayVec;

/// Board side length.
pub const BOARD_SIZE: usize = 3;

/// Who owns a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Player,
    Ai,
}

impl Mark {
    pub fn glyph(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Ai => 'O',
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won(Mark),
    Tie,
}

/// Rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    RowOutOfRange(i32),
    ColumnOutOfRange(i32),
    Occupied { row: usize, col: usize },
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::RowOutOfRange(_) => f.write_str("Invalid row! Try again."),
            MoveError::ColumnOutOfRange(_) => f.write_str("Invalid column! Try again."),
            MoveError::Occupied { row, col } => {
                write!(f, "Cell {row},{col} is already taken! Try again.")
            }
            MoveError::GameOver => f.write_str("The game is over."),
        }
    }
}

impl std::error::Error for MoveError {}

/// Empty cells, stack-only.
pub type EmptyCells = ArrayVec<(usize, usize), { BOARD_SIZE * BOARD_SIZE }>;

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// The 3x3 playfield, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// Validate coordinates and claim an empty cell.
    pub fn place(&mut self, row: i32, col: i32, mark: Mark) -> Result<(), MoveError> {
        let r = usize::try_from(row)
            .ok()
            .filter(|r| *r < BOARD_SIZE)
            .ok_or(MoveError::RowOutOfRange(row))?;
        let c = usize::try_from(col)
            .ok()
            .filter(|c| *c < BOARD_SIZE)
            .ok_or(MoveError::ColumnOutOfRange(col))?;

        let cell = &mut self.cells[r][c];
        if cell.is_some() {
            return Err(MoveError::Occupied { row: r, col: c });
        }
        *cell = Some(mark);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells = Default::default();
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> EmptyCells {
        let mut out = EmptyCells::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.cells[row][col].is_none() {
                    out.push((row, col));
                }
            }
        }
        out
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Owner of a completed row, column or diagonal. The player is checked
    /// first.
    pub fn winner(&self) -> Option<Mark> {
        [Mark::Player, Mark::Ai]
            .into_iter()
            .find(|&mark| LINES.iter().any(|line| self.owns_line(mark, line)))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(mark) = self.winner() {
            return Some(Outcome::Won(mark));
        }
        self.is_full().then_some(Outcome::Tie)
    }

    fn owns_line(&self, mark: Mark, line: &[(usize, usize); 3]) -> bool {
        line.iter().all(|&(r, c)| self.cells[r][c] == Some(mark))
    }
}
