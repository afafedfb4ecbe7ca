//! Console tic-tac-toe (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_tictactoe::{core,input,term,types}`
//! and holds what both binaries share: command-line configuration and logger
//! setup.

pub mod config;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;

pub use config::{init_logging, Config};
