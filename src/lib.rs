//! Tic-tac-toe for the terminal.
//!
//! # Architecture
//!
//! - **Game**: the rule engine. Owns the board, validates moves, evaluates
//!   wins and draws, alternates turns.
//! - **Input**: move sources behind [`InputProvider`] (terminal, simple AI,
//!   scripted).
//! - **Presenter**: rendering behind [`Presenter`].
//! - **Orchestrator**: the turn loop gluing the three together.
//!
//! # Example
//!
//! ```
//! use tictactoe_cli::{GameEngine, GameState, Player};
//!
//! let mut game = GameEngine::new();
//! assert_eq!(game.apply_move(1, 1), Ok(GameState::InProgress));
//! assert_eq!(game.current_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod game;
mod input;
mod orchestrator;
mod presenter;
mod replay;

// Crate-level exports - Game engine
pub use game::{
    Board, Cell, Coordinate, GameEngine, GameSnapshot, GameState, Move, MoveError, Player, rules,
};

// Crate-level exports - Input providers
pub use input::{
    FirstAvailable, InputError, InputProvider, ParseError, ScriptedInput, TerminalInput, parse_move,
};

// Crate-level exports - Presentation
pub use presenter::{BANNER, Presenter, TerminalPresenter, render_board};

// Crate-level exports - Replay
pub use replay::{ReplayError, render_replay, replay_moves};

// Crate-level exports - Orchestration
pub use orchestrator::{Orchestrator, SessionError};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, Opponent};
