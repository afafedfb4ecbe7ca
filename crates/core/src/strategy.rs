//! AI move selection.
//!
//! The game asks a [`MoveStrategy`] for a cell whenever the AI is to move.
//! Strategies only ever see the board, so tests can swap in a scripted one.

use std::collections::VecDeque;

use log::debug;

use crate::board::{Board, BOARD_SIZE};
use crate::rng::SimpleRng;

pub trait MoveStrategy {
    /// Pick an empty `(row, col)`, or `None` to pass.
    fn choose(&mut self, board: &Board) -> Option<(usize, usize)>;
}

impl<F> MoveStrategy for F
where
    F: FnMut(&Board) -> Option<(usize, usize)>,
{
    fn choose(&mut self, board: &Board) -> Option<(usize, usize)> {
        self(board)
    }
}

/// Picks uniformly among the empty cells.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: SimpleRng,
}

impl RandomStrategy {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl MoveStrategy for RandomStrategy {
    fn choose(&mut self, board: &Board) -> Option<(usize, usize)> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let pick = empty[self.rng.next_range(empty.len() as u32) as usize];
        debug!("random strategy picked {pick:?} out of {} cells", empty.len());
        Some(pick)
    }
}

/// Replays a fixed list of moves, skipping cells that are already taken.
#[derive(Debug, Clone, Default)]
pub struct ScriptedStrategy {
    moves: VecDeque<(usize, usize)>,
}

impl ScriptedStrategy {
    pub fn new(moves: impl IntoIterator<Item = (usize, usize)>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveStrategy for ScriptedStrategy {
    fn choose(&mut self, board: &Board) -> Option<(usize, usize)> {
        while let Some((row, col)) = self.moves.pop_front() {
            if row < BOARD_SIZE && col < BOARD_SIZE && board.get(row, col).is_none() {
                return Some((row, col));
            }
        }
        None
    }
}
