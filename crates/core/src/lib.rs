//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the tic-tac-toe rules. It has **zero dependencies** on
//! rendering or terminal I/O:
//!
//! - **Deterministic**: AI moves come from an injected [`MoveStrategy`]; the
//!   random one is seeded
//! - **Testable**: scripted strategies make whole games reproducible
//!
//! # Module Structure
//!
//! - [`board`]: 3x3 board with win and tie detection
//! - [`game`]: turn sequencing, outcome and score tracking
//! - [`strategy`]: AI move selection
//! - [`rng`]: small LCG behind the random strategy
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::{Game, Mark, Outcome, ScriptedStrategy};
//!
//! let mut game = Game::new(ScriptedStrategy::new([(1, 0), (1, 1)]));
//! game.play_turn(0, 0).unwrap();
//! game.play_turn(0, 1).unwrap();
//! let turn = game.play_turn(0, 2).unwrap();
//!
//! assert_eq!(turn.outcome, Some(Outcome::Won(Mark::Player)));
//! ```

pub mod board;
pub mod game;
pub mod rng;
pub mod strategy;

pub use board::{Board, Mark, MoveError, Outcome, BOARD_SIZE};
pub use game::{Game, Score, Turn};
pub use rng::SimpleRng;
pub use strategy::{MoveStrategy, RandomStrategy, ScriptedStrategy};
