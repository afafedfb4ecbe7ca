//! Draws the primitive showcase once and waits for a key.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_tictactoe::term::{draw_demo, Screen, TerminalSurface};
use tui_tictactoe::{init_logging, Config};

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config.log_path())?;
    info!("drawing demo with {config:?}");

    let mut screen = Screen::new(
        TerminalSurface::new(),
        &config.title,
        config.width,
        config.height,
    )
    .context("failed to set up the console screen")?;

    draw_demo(&mut screen);
    let result = screen.present().and_then(|()| wait_for_key());

    let _ = screen.surface_mut().restore();
    result
}

fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
