//! Command-line configuration and logger setup.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use crate::types::{DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH, TURN_WAIT_MS};

/// Log file used when `--log-file` is not given.
pub const DEFAULT_LOG_FILE: &str = "tui-tictactoe.log";

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Console tic-tac-toe", long_about = None)]
pub struct Config {
    /// Window title
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    pub title: String,
    /// Requested width in character cells (clamped to the terminal)
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,
    /// Requested height in character cells (clamped to the terminal)
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u16).range(1..))]
    pub height: u16,
    /// Seed for the AI; defaults to the clock
    #[arg(short, long)]
    pub seed: Option<u32>,
    /// Pause after moves and game endings, in milliseconds
    #[arg(short, long, default_value_t = TURN_WAIT_MS)]
    pub wait_ms: u64,
    /// Where log lines go; the terminal itself is busy with the board
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            wait_ms: TURN_WAIT_MS,
            log_file: None,
        }
    }
}

impl Config {
    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default();
            (now.as_secs() as u32) ^ now.subsec_nanos()
        })
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE))
    }
}

/// Send `log` output to `path`. Default filter is "info" if RUST_LOG is not set.
pub fn init_logging(path: &Path) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .try_init()
        .context("failed to install logger")?;
    Ok(())
}
