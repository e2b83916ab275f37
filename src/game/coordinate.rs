//! Validated board coordinates.

use super::action::MoveError;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell address on the 3x3 board, 0-based.
///
/// Both components are always in `0..=2`; the only ways to build one are
/// [`Coordinate::new`] and [`Coordinate::from_index`], which check bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "RawCoordinate")]
pub struct Coordinate {
    row: u8,
    col: u8,
}

#[derive(Serialize, Deserialize)]
struct RawCoordinate {
    row: usize,
    col: usize,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = MoveError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.row, raw.col)
    }
}

impl From<Coordinate> for RawCoordinate {
    fn from(at: Coordinate) -> Self {
        Self {
            row: at.row(),
            col: at.col(),
        }
    }
}

impl Coordinate {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Coordinate; 9] = [
        Coordinate { row: 0, col: 0 },
        Coordinate { row: 0, col: 1 },
        Coordinate { row: 0, col: 2 },
        Coordinate { row: 1, col: 0 },
        Coordinate { row: 1, col: 1 },
        Coordinate { row: 1, col: 2 },
        Coordinate { row: 2, col: 0 },
        Coordinate { row: 2, col: 1 },
        Coordinate { row: 2, col: 2 },
    ];

    /// Creates a coordinate, rejecting anything outside the grid.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row > 2 || col > 2 {
            return Err(MoveError::InvalidCoordinate { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Creates a coordinate from a row-major board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row() * 3 + self.col()
    }

    /// Row, 0-based.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column, 0-based.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Human-friendly name of the cell.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }

    /// Filters coordinates by board state - returns only empty cells.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Coordinate> {
        Self::ALL
            .iter()
            .copied()
            .filter(|at| board.is_empty(*at))
            .collect()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (row {}, column {})", self.label(), self.row() + 1, self.col() + 1)
    }
}
