//! Parsing of typed `ROW COLUMN` moves.

use crate::game::Coordinate;
use derive_more::{Display, Error};
use std::num::IntErrorKind;
use tracing::instrument;

/// Why a line of text is not a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// Not exactly two integers.
    #[display("Invalid input. Please enter integers (ROW COLUMN) from 1 to 3 separated by a space.")]
    NotIntegers,
    /// Integers outside 1..=3.
    #[display("Invalid input. Row and column must be between 1 and 3.")]
    OutOfRange,
}

/// Parses `"ROW COLUMN"`, both 1-based, into a 0-based coordinate.
#[instrument]
pub fn parse_move(text: &str) -> Result<Coordinate, ParseError> {
    let mut parts = text.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::NotIntegers);
    };
    // Both tokens must be integers before range is considered.
    let (row, col) = (parse_component(row)?, parse_component(col)?);

    match (row, col) {
        (Some(row), Some(col)) if (1..=3).contains(&row) && (1..=3).contains(&col) => {
            Coordinate::new((row - 1) as usize, (col - 1) as usize)
                .map_err(|_| ParseError::OutOfRange)
        }
        _ => Err(ParseError::OutOfRange),
    }
}

/// Parses one integer token; `None` means it is an integer too large for `i64`.
fn parse_component(token: &str) -> Result<Option<i64>, ParseError> {
    match token.parse::<i64>() {
        Ok(value) => Ok(Some(value)),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Ok(None),
            _ => Err(ParseError::NotIntegers),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_based_to_zero_based() {
        let at = parse_move("1 3").unwrap();
        assert_eq!((at.row(), at.col()), (0, 2));
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let at = parse_move("  2\t2 \n").unwrap();
        assert_eq!((at.row(), at.col()), (1, 1));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(parse_move("0 1"), Err(ParseError::OutOfRange));
        assert_eq!(parse_move("4 1"), Err(ParseError::OutOfRange));
        assert_eq!(parse_move("-1 2"), Err(ParseError::OutOfRange));
        assert_eq!(parse_move("99999999999999999999 1"), Err(ParseError::OutOfRange));
        assert_eq!(parse_move("2 -99999999999999999999"), Err(ParseError::OutOfRange));
    }

    #[test]
    fn test_non_integer_wins_over_huge_integer() {
        assert_eq!(parse_move("99999999999999999999 x"), Err(ParseError::NotIntegers));
    }

    #[test]
    fn test_not_integers() {
        assert_eq!(parse_move("a b"), Err(ParseError::NotIntegers));
        assert_eq!(parse_move("1"), Err(ParseError::NotIntegers));
        assert_eq!(parse_move("1 2 3"), Err(ParseError::NotIntegers));
        assert_eq!(parse_move(""), Err(ParseError::NotIntegers));
        assert_eq!(parse_move("1.5 2"), Err(ParseError::NotIntegers));
    }
}
