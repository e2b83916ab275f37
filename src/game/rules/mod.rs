//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board according to tic-tac-toe rules.
//! Rules are separated from board storage so the engine and tests can
//! evaluate arbitrary boards.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, completes_line};

use super::{Board, GameState};
use tracing::instrument;

/// Evaluates a board: a completed line wins, even on a full board.
#[instrument(skip(board), ret)]
pub fn evaluate(board: &Board) -> GameState {
    if let Some(winner) = check_winner(board) {
        return GameState::win_for(winner);
    }
    if is_full(board) {
        return GameState::Draw;
    }
    GameState::InProgress
}
