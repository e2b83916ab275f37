//! Human player typing moves at a terminal.

use super::{InputError, InputProvider, parse_move};
use crate::game::{Board, Coordinate, Player};
use std::io::{BufRead, Stdin, StdinLock, Stdout, Write};
use tracing::{debug, instrument};

/// Human player reading `ROW COLUMN` lines.
pub struct TerminalInput<R, W> {
    name: String,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalInput<R, W> {
    /// Creates a terminal player over arbitrary streams.
    pub fn new(name: impl Into<String>, reader: R, writer: W) -> Self {
        Self {
            name: name.into(),
            reader,
            writer,
        }
    }

    /// Consumes the player, returning the output stream.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl TerminalInput<StdinLock<'static>, Stdout> {
    /// Human player on the process's stdin/stdout.
    pub fn stdio(name: impl Into<String>) -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(name, stdin.lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> InputProvider for TerminalInput<R, W> {
    #[instrument(skip(self, _board), fields(name = %self.name))]
    fn next_move(&mut self, player: Player, _board: &Board) -> Result<Coordinate, InputError> {
        loop {
            write!(
                self.writer,
                "Player {player}, enter your move as a pair of integers from 1 to 3 with a space between (ROW COLUMN): "
            )?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::EndOfInput);
            }

            match parse_move(&line) {
                Ok(at) => return Ok(at),
                Err(err) => {
                    debug!(input = line.trim(), %err, "Unparseable move");
                    writeln!(self.writer, "{err}")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reprompts_until_valid() {
        let mut input = TerminalInput::new("Human", Cursor::new("abc\n9 9\n2 3\n"), Vec::new());
        let at = input.next_move(Player::X, &Board::new()).unwrap();
        assert_eq!((at.row(), at.col()), (1, 2));

        let out = String::from_utf8(input.into_writer()).unwrap();
        assert_eq!(out.matches("Player X, enter your move").count(), 3);
        assert!(out.contains("Please enter integers (ROW COLUMN)"));
        assert!(out.contains("Row and column must be between 1 and 3."));
    }

    #[test]
    fn test_eof_is_end_of_input() {
        let mut input = TerminalInput::new("Human", Cursor::new("x\n"), Vec::new());
        let err = input.next_move(Player::O, &Board::new()).unwrap_err();
        assert!(matches!(err, InputError::EndOfInput));
    }
}
