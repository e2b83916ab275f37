//! Move sources.
//!
//! An [`InputProvider`] hands the orchestrator one in-range coordinate per
//! turn. Anything it can recover from (bad typing, out-of-range numbers) it
//! handles itself by asking again; only a dead input stream surfaces as an
//! [`InputError`].

mod first_available;
mod parse;
mod scripted;
mod terminal;

pub use first_available::FirstAvailable;
pub use parse::{ParseError, parse_move};
pub use scripted::ScriptedInput;
pub use terminal::TerminalInput;

use crate::game::{Board, Coordinate, Player};
use derive_more::{Display, Error};

/// Trait for anything that can supply moves.
pub trait InputProvider {
    /// Gets the next move for `player`.
    ///
    /// The returned coordinate is always on the board; it may still be an
    /// occupied cell, which the engine rejects.
    fn next_move(&mut self, player: Player, board: &Board) -> Result<Coordinate, InputError>;

    /// Returns the provider's display name.
    fn name(&self) -> &str;
}

/// Unrecoverable input failure.
#[derive(Debug, Display, Error)]
pub enum InputError {
    /// Reading or prompting failed.
    #[display("Failed to read input: {}", _0)]
    Io(std::io::Error),
    /// Input stream closed mid-game.
    #[display("Input ended before the game finished")]
    EndOfInput,
    /// A scripted provider ran out of moves, or no empty cell was left.
    #[display("No moves left to supply")]
    Exhausted,
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
