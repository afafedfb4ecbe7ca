use tui_tictactoe::core::{Board, Game, Mark, MoveError, Outcome, RandomStrategy, ScriptedStrategy};
use tui_tictactoe::input::{parse_command, Command};

fn play_line(game: &mut Game<impl tui_tictactoe::core::MoveStrategy>, line: &str) -> Result<(), MoveError> {
    match parse_command(line) {
        Command::Move { row, col } => game.play_turn(row, col).map(|_| ()),
        Command::Exit => panic!("unexpected exit"),
    }
}

#[test]
fn typed_lines_drive_a_game_to_a_win() {
    let mut game = Game::new(ScriptedStrategy::new([(1, 0), (1, 1)]));
    play_line(&mut game, "0,0").unwrap();
    play_line(&mut game, "0,1").unwrap();
    play_line(&mut game, "0,2").unwrap();
    assert_eq!(game.outcome(), Some(Outcome::Won(Mark::Player)));
}

#[test]
fn bad_lines_report_row_then_column() {
    let mut game = Game::new(ScriptedStrategy::default());
    assert_eq!(play_line(&mut game, "x,1"), Err(MoveError::RowOutOfRange(-1)));
    assert_eq!(play_line(&mut game, "1,9"), Err(MoveError::ColumnOutOfRange(9)));
    assert_eq!(play_line(&mut game, "3"), Err(MoveError::RowOutOfRange(3)));
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn random_games_always_terminate() {
    for seed in 0..200 {
        let mut game = Game::new(RandomStrategy::new(seed));
        let mut turns = 0;
        while game.outcome().is_none() {
            let (row, col) = game.board().empty_cells()[0];
            game.play_turn(row as i32, col as i32).unwrap();
            turns += 1;
            assert!(turns <= 5, "seed {seed} took too many turns");
        }
    }
}
