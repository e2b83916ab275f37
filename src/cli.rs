//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use tictactoe_cli::Opponent;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game
    Play {
        /// Path to the TOML config file (defaults apply if it doesn't exist)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: std::path::PathBuf,

        /// Who plays O (overrides the config file)
        #[arg(long, value_enum)]
        opponent: Option<Opponent>,

        /// Don't clear the screen between turns
        #[arg(long)]
        no_clear: bool,
    },

    /// Replay a sequence of moves and print the result
    Replay {
        /// Moves as 1-based "ROW COL" pairs, X first
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final game as JSON
        #[arg(long)]
        json: bool,
    },
}
