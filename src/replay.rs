//! Non-interactive replay of typed move lists.

use crate::game::{GameEngine, GameSnapshot, MoveError};
use crate::input::{ParseError, parse_move};
use crate::presenter::render_board;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a move list could not be replayed or printed.
#[derive(Debug, Display, Error)]
pub enum ReplayError {
    /// A move is not a valid `"ROW COL"` pair.
    #[display("Bad move {:?}: {}", input, source)]
    Parse {
        /// The offending text.
        input: String,
        /// Why it was rejected.
        source: ParseError,
    },
    /// The engine refused a move.
    #[display("Illegal move sequence: {}", _0)]
    Move(MoveError),
    /// JSON output failed.
    #[display("Failed to encode game: {}", _0)]
    Json(serde_json::Error),
}

/// Plays 1-based `"ROW COL"` moves from a fresh game, X first.
#[instrument(skip_all, fields(count = moves.len()))]
pub fn replay_moves<S: AsRef<str>>(moves: &[S]) -> Result<GameSnapshot, ReplayError> {
    let coordinates = moves
        .iter()
        .map(|m| {
            parse_move(m.as_ref()).map_err(|source| ReplayError::Parse {
                input: m.as_ref().to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let game = GameEngine::replay(&coordinates).map_err(ReplayError::Move)?;
    Ok(GameSnapshot::from(&game))
}

/// Formats a replayed game as the labelled board plus a status line, or as JSON.
pub fn render_replay(snapshot: &GameSnapshot, json: bool) -> Result<String, ReplayError> {
    if json {
        return serde_json::to_string_pretty(snapshot).map_err(ReplayError::Json);
    }
    Ok(format!(
        "{}{}",
        render_board(&snapshot.board),
        snapshot.status_string()
    ))
}
