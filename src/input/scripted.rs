//! Pre-recorded moves.

use super::{InputError, InputProvider};
use crate::game::{Board, Coordinate, Player};
use std::collections::VecDeque;

/// Supplies a fixed sequence of moves, one per call.
///
/// Each player gets its own script; the orchestrator only asks the provider
/// of the player to move.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    moves: VecDeque<Coordinate>,
}

impl ScriptedInput {
    /// Creates a script from coordinates.
    pub fn new(moves: impl IntoIterator<Item = Coordinate>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }
}

impl InputProvider for ScriptedInput {
    fn next_move(&mut self, _player: Player, _board: &Board) -> Result<Coordinate, InputError> {
        self.moves.pop_front().ok_or(InputError::Exhausted)
    }

    fn name(&self) -> &str {
        "Script"
    }
}
