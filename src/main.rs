//! Tictactoe - terminal game entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_cli::{
    FirstAvailable, GameConfig, Opponent, Orchestrator, TerminalInput, TerminalPresenter,
    render_replay, replay_moves,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            config,
            opponent,
            no_clear,
        } => run_play(config, opponent, no_clear),
        Command::Replay { moves, json } => run_replay(&moves, json),
    }
}

/// Run an interactive game
#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_play(config_path: PathBuf, opponent: Option<Opponent>, no_clear: bool) -> Result<()> {
    let mut config = GameConfig::load_or_default(&config_path)?;
    if let Some(opponent) = opponent {
        config = config.with_opponent(opponent);
    }
    if no_clear {
        config = config.without_clear_screen();
    }
    info!(opponent = %config.opponent(), "Starting interactive game");

    let presenter = TerminalPresenter::stdout(*config.clear_screen(), *config.show_banner());

    // Stdin can only be locked once, so humans at one keyboard share a reader.
    let mut orchestrator = match config.opponent() {
        Opponent::Human => {
            Orchestrator::hot_seat(Box::new(TerminalInput::stdio("Human")), presenter)
        }
        Opponent::Computer => Orchestrator::new(
            Box::new(TerminalInput::stdio("Human")),
            Box::new(FirstAvailable::new("Computer")),
            presenter,
        ),
    };
    let state = orchestrator.run().context("Game aborted")?;

    info!(%state, "Game finished");
    Ok(())
}

/// Replay moves non-interactively
#[instrument(skip(moves), fields(count = moves.len()))]
fn run_replay(moves: &[String], json: bool) -> Result<()> {
    let snapshot = replay_moves(moves)?;
    println!("{}", render_replay(&snapshot, json)?);
    Ok(())
}
