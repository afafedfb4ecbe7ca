//! Console tic-tac-toe runner (default binary).
//!
//! Draws the board through the buffered `Screen`, reads the player's move from
//! a prompt line, and lets a seeded random AI answer.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_tictactoe::core::{Game, Mark, Outcome, RandomStrategy};
use tui_tictactoe::input::{handle_key_event, parse_command, should_quit, Command, LineEditor};
use tui_tictactoe::term::{wait, GameView, Hud, Screen, Status, TerminalSurface};
use tui_tictactoe::{init_logging, Config};

type GameScreen = Screen<TerminalSurface>;

/// Feedback line shown under the prompt.
enum Message {
    Info(String),
    Error(String),
    Success(String),
}

impl Message {
    fn status(&self) -> Status<'_> {
        match self {
            Message::Info(text) => Status::info(text),
            Message::Error(text) => Status::error(text),
            Message::Success(text) => Status::success(text),
        }
    }
}

struct App {
    game: Game<RandomStrategy>,
    view: GameView,
    editor: LineEditor,
    message: Option<Message>,
    wait_ms: u64,
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config.log_path())?;

    let seed = config.seed();
    info!("starting with {config:?}, AI seed {seed}");

    let mut screen = Screen::new(
        TerminalSurface::new(),
        &config.title,
        config.width,
        config.height,
    )
    .context("failed to set up the console screen")?;

    let mut app = App {
        game: Game::new(RandomStrategy::new(seed)),
        view: GameView::default(),
        editor: LineEditor::new(),
        message: None,
        wait_ms: config.wait_ms,
    };
    let result = app.run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.surface_mut().restore();
    let score = app.game.score();
    info!(
        "exiting: player {} / ai {} / ties {}",
        score.player, score.ai, score.ties
    );
    result
}

impl App {
    fn run(&mut self, screen: &mut GameScreen) -> Result<()> {
        loop {
            self.draw(screen)?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }
            let Some(line) = handle_key_event(key).and_then(|action| self.editor.apply(action))
            else {
                continue;
            };

            match parse_command(&line) {
                Command::Exit => return Ok(()),
                Command::Move { row, col } => self.play(screen, row, col)?,
            }
        }
    }

    fn play(&mut self, screen: &mut GameScreen, row: i32, col: i32) -> Result<()> {
        if let Err(err) = self.game.play_player(row, col) {
            self.message = Some(Message::Error(err.to_string()));
            return Ok(());
        }

        let mut text = format!("Your move is: {row},{col}");
        if self.game.outcome().is_none() {
            text.push_str("\nAI makes a move...");
            self.message = Some(Message::Info(text));
            self.draw(screen)?;
            wait(self.wait_ms);
            self.message = self
                .game
                .play_ai()
                .map(|(r, c)| Message::Info(format!("AI played {r},{c}")));
        } else {
            self.message = Some(Message::Info(text));
        }

        if let Some(outcome) = self.game.outcome() {
            self.message = Some(match outcome {
                Outcome::Won(Mark::Player) => Message::Success("CONGRATULATION, YOU WON!".into()),
                Outcome::Won(Mark::Ai) => Message::Error("AI WINS!".into()),
                Outcome::Tie => Message::Info("TIE GAME!".into()),
            });
            self.draw(screen)?;
            wait(self.wait_ms);

            self.game.reset();
            screen.clear()?;
            self.message = Some(Message::Info("New game. You play X.".into()));
        }
        Ok(())
    }

    fn draw(&self, screen: &mut GameScreen) -> Result<()> {
        let hud = Hud {
            input: self.editor.as_str(),
            status: self.message.as_ref().map(Message::status),
            score: self.game.score(),
        };
        self.view.render(screen, self.game.board(), &hud);
        screen.present()
    }
}
