//! Simple computer opponent.

use super::{InputError, InputProvider};
use crate::game::{Board, Coordinate, Player};
use tracing::debug;

/// Simple AI that picks the first empty cell.
pub struct FirstAvailable {
    name: String,
}

impl FirstAvailable {
    /// Creates a new simple AI.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl InputProvider for FirstAvailable {
    fn next_move(&mut self, player: Player, board: &Board) -> Result<Coordinate, InputError> {
        debug!(ai = %self.name, %player, "AI making move");

        let at = Coordinate::valid_moves(board)
            .first()
            .copied()
            .ok_or(InputError::Exhausted)?;

        debug!(ai = %self.name, %at, "AI chose cell");
        Ok(at)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
