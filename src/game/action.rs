//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and are kept in the engine's history.

use super::{Coordinate, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the player places their mark.
    pub at: Coordinate,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, at: Coordinate) -> Self {
        Self { player, at }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.at)
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The move addresses a cell outside the 3x3 grid.
    #[display("Coordinate ({}, {}) is outside the board", row, col)]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Coordinate),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}

impl MoveError {
    /// Recoverable errors ask the same player for another move.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MoveError::InvalidCoordinate { .. } | MoveError::CellOccupied(_)
        )
    }
}

impl std::error::Error for MoveError {}
