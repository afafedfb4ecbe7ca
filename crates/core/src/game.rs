//! Game state: one player against a pluggable AI.
//!
//! The player always moves first. After every player move the AI answers
//! unless the game is already decided or the board is full.

use log::{info, warn};

use crate::board::{Board, Mark, MoveError, Outcome};
use crate::strategy::MoveStrategy;

/// Result of one call to [`Game::play_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub player: (usize, usize),
    /// The AI's answer, if it got to move.
    pub ai: Option<(usize, usize)>,
    pub outcome: Option<Outcome>,
}

/// Running tally across games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
    pub ties: u32,
}

impl Score {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Mark::Player) => self.player += 1,
            Outcome::Won(Mark::Ai) => self.ai += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Game<S> {
    board: Board,
    strategy: S,
    outcome: Option<Outcome>,
    score: Score,
}

impl<S: MoveStrategy> Game<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            board: Board::new(),
            strategy,
            outcome: None,
            score: Score::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Play the player's move at `(row, col)` and let the AI answer.
    ///
    /// Invalid coordinates and taken cells leave the board untouched.
    pub fn play_turn(&mut self, row: i32, col: i32) -> Result<Turn, MoveError> {
        let player = self.play_player(row, col)?;
        let ai = self.play_ai();
        Ok(Turn {
            player,
            ai,
            outcome: self.outcome,
        })
    }

    /// Place the player's mark only. Returns the claimed cell.
    pub fn play_player(&mut self, row: i32, col: i32) -> Result<(usize, usize), MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }

        self.board.place(row, col, Mark::Player)?;
        self.check_outcome();
        Ok((row as usize, col as usize))
    }

    /// Let the strategy move. The strategy is not consulted once the game is
    /// decided.
    pub fn play_ai(&mut self) -> Option<(usize, usize)> {
        if self.outcome.is_some() {
            return None;
        }

        let (r, c) = self.strategy.choose(&self.board)?;
        if let Err(err) = self.board.place(r as i32, c as i32, Mark::Ai) {
            warn!("AI strategy chose an illegal move {r},{c}: {err}");
            return None;
        }
        self.check_outcome();
        Some((r, c))
    }

    /// Start a new game on an empty board. The score is kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.outcome = None;
    }

    fn check_outcome(&mut self) {
        if let Some(outcome) = self.board.outcome() {
            info!("game finished: {outcome:?}");
            self.outcome = Some(outcome);
            self.score.record(outcome);
        }
    }
}
