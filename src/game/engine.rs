//! Tic-tac-toe game engine.
//!
//! The engine owns the board for the duration of one game. The game state
//! is never stored: it is evaluated from the board whenever it is needed.

use super::action::{Move, MoveError};
use super::coordinate::Coordinate;
use super::rules;
use super::state::GameState;
use super::types::{Board, Player};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current: Player,
    history: Vec<Move>,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::X,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game is over this is the player who made the final move.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Returns the moves played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Returns the state after the move. The turn passes to the opponent
    /// only if the game is still in progress. On error nothing changes and
    /// the same player is still to move.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            warn!("Move attempted after game end");
            return Err(MoveError::GameOver);
        }
        let at = Coordinate::new(row, col)?;
        self.place(at)
    }

    /// Same as [`GameEngine::apply_move`] for an already validated coordinate.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn play(&mut self, at: Coordinate) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            warn!("Move attempted after game end");
            return Err(MoveError::GameOver);
        }
        self.place(at)
    }

    fn place(&mut self, at: Coordinate) -> Result<GameState, MoveError> {
        if !self.board.is_empty(at) {
            debug!(%at, "Cell occupied, move rejected");
            return Err(MoveError::CellOccupied(at));
        }

        let player = self.current;
        self.board.set(at, player.mark());
        let mv = Move::new(player, at);
        debug!(%mv, "Move applied");
        self.history.push(mv);

        let state = if rules::completes_line(&self.board, at) {
            GameState::win_for(player)
        } else if rules::is_full(&self.board) {
            GameState::Draw
        } else {
            GameState::InProgress
        };

        debug_assert_eq!(state, self.evaluate(), "incremental and full evaluation disagree");
        debug_assert!(self.board.is_balanced(), "mark counts out of balance");

        if state.is_terminal() {
            info!(?state, moves = self.history.len(), "Game finished");
        } else {
            self.current = player.opponent();
            debug!(next = %self.current, "Turn passes");
        }

        Ok(state)
    }

    /// Evaluates the current board.
    pub fn evaluate(&self) -> GameState {
        rules::evaluate(&self.board)
    }

    /// Returns true once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.evaluate().is_terminal()
    }

    /// Returns all empty cells in row-major order.
    pub fn valid_moves(&self) -> Vec<Coordinate> {
        Coordinate::valid_moves(&self.board)
    }

    /// Replays moves from a fresh game, alternating players from X.
    #[instrument]
    pub fn replay(moves: &[Coordinate]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for at in moves {
            game.play(*at)?;
        }
        Ok(game)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
