//! Win detection logic for tic-tac-toe.

use super::super::{Board, Coordinate, Player};
use tracing::instrument;

const fn at(row: u8, col: u8) -> usize {
    (row as usize) * 3 + col as usize
}

/// Every line on the board as row-major indices: rows, columns, diagonals.
pub static LINES: [[usize; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| {
        let first = cells[a];
        if first == cells[b] && first == cells[c] {
            first.owner()
        } else {
            None
        }
    })
}

/// Lines passing through a coordinate (2 to 4 of them).
pub fn lines_through(target: Coordinate) -> impl Iterator<Item = &'static [usize; 3]> {
    LINES.iter().filter(move |line| line.contains(&target.index()))
}

/// Checks whether the mark at `last` completes any line through it.
///
/// Only the lines touched by the last move can have changed, so this is
/// enough to detect a win right after that move.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, last: Coordinate) -> bool {
    let cells = board.cells();
    let mark = cells[last.index()];
    !mark.is_empty() && lines_through(last).any(|line| line.iter().all(|&i| cells[i] == mark))
}
