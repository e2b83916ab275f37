//! Core domain types for tic-tac-toe.

use super::coordinate::Coordinate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark this player places on the board.
    pub fn mark(self) -> Cell {
        match self {
            Player::X => Cell::MarkX,
            Player::O => Cell::MarkO,
        }
    }
}

/// One square of the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by player X.
    MarkX,
    /// Marked by player O.
    MarkO,
}

impl Cell {
    /// Returns the player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::MarkX => Some(Player::X),
            Cell::MarkO => Some(Player::O),
        }
    }

    /// Checks if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character symbol used when rendering.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::MarkX => 'X',
            Cell::MarkO => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from three rows of cells.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut board = Self::new();
        for (row, cells) in rows.into_iter().enumerate() {
            for (col, cell) in cells.into_iter().enumerate() {
                board.cells[row * 3 + col] = cell;
            }
        }
        board
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, at: Coordinate) -> Cell {
        self.cells[at.index()]
    }

    /// Sets the cell at the given coordinate.
    ///
    /// Unchecked: occupancy rules live in the engine.
    pub(crate) fn set(&mut self, at: Coordinate, cell: Cell) {
        self.cells[at.index()] = cell;
    }

    /// Checks if the cell at the coordinate is empty.
    pub fn is_empty(&self, at: Coordinate) -> bool {
        self.get(at).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the three cells of a row.
    pub fn row(&self, row: usize) -> [Cell; 3] {
        let start = row * 3;
        [self.cells[start], self.cells[start + 1], self.cells[start + 2]]
    }

    /// Counts the marks a player has on the board.
    #[instrument(skip(self))]
    pub fn count(&self, player: Player) -> usize {
        let mark = player.mark();
        self.cells.iter().filter(|&&c| c == mark).count()
    }

    /// Checks the mark balance: X has as many marks as O, or one more.
    pub fn is_balanced(&self) -> bool {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        x == o || x == o + 1
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            let [a, b, c] = self.row(row);
            write!(f, "{}|{}|{}", a.symbol(), b.symbol(), c.symbol())?;
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
