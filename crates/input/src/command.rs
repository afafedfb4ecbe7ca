//! Parsing of submitted prompt lines.

/// A submitted prompt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    /// Raw coordinates; range checks belong to the game. Parts that are not
    /// numbers come through as `-1`.
    Move { row: i32, col: i32 },
}

/// Parse `"exit"` or `"row,col"`.
///
/// Only the first two comma-separated parts are read; anything after them is
/// ignored.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.eq_ignore_ascii_case("exit") {
        return Command::Exit;
    }

    let mut parts = line.split(',').map(|part| part.trim().parse::<i32>().unwrap_or(-1));
    let row = parts.next().unwrap_or(-1);
    let col = parts.next().unwrap_or(-1);
    Command::Move { row, col }
}
