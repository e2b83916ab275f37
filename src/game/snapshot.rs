//! Serializable view of a game.

use super::{Board, GameEngine, GameState, Move, Player};
use serde::{Deserialize, Serialize};

/// Everything needed to show or log a game, in any state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board.
    pub board: Board,
    /// Moves in play order.
    pub history: Vec<Move>,
    /// State evaluated from the board.
    pub state: GameState,
    /// Player to move, `None` once the game is over.
    pub to_move: Option<Player>,
}

impl From<&GameEngine> for GameSnapshot {
    fn from(game: &GameEngine) -> Self {
        let state = game.evaluate();
        Self {
            board: game.board().clone(),
            history: game.history().to_vec(),
            state,
            to_move: (!state.is_terminal()).then(|| game.current_player()),
        }
    }
}

impl GameSnapshot {
    /// Returns a status line for display.
    pub fn status_string(&self) -> String {
        match self.to_move {
            Some(player) => format!("In progress. Player {} to move.", player),
            None => format!("Game over. {}", self.state),
        }
    }
}
