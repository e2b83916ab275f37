//! Derived game state.

use super::Player;
use serde::{Deserialize, Serialize};

/// Status of a game, always computed from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// No line completed and at least one empty cell.
    InProgress,
    /// X completed a line.
    XWins,
    /// O completed a line.
    OWins,
    /// Board full with no completed line.
    Draw,
}

impl GameState {
    /// Win state for the given player.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => GameState::XWins,
            Player::O => GameState::OWins,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_terminal(self) -> bool {
        self != GameState::InProgress
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameState::XWins => Some(Player::X),
            GameState::OWins => Some(Player::O),
            GameState::InProgress | GameState::Draw => None,
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::InProgress => write!(f, "Game in progress"),
            GameState::XWins => write!(f, "Player X wins!"),
            GameState::OWins => write!(f, "Player O wins!"),
            GameState::Draw => write!(f, "It's a tie!"),
        }
    }
}
