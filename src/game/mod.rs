//! Tic-tac-toe rule engine.

mod action;
mod coordinate;
mod engine;
mod snapshot;
mod state;
mod types;

pub mod rules;

pub use action::{Move, MoveError};
pub use coordinate::Coordinate;
pub use engine::GameEngine;
pub use snapshot::GameSnapshot;
pub use state::GameState;
pub use types::{Board, Cell, Player};
