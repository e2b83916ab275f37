//! Board and outcome rendering.

use crate::game::{Board, GameState, MoveError, Player};
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Stdout, Write};
use tracing::instrument;

/// Banner printed above the board.
pub const BANNER: &str = r"
 _____ _        _____            _____
|_   _(_) ___  |_   _|_ _  ___  |_   _|__   ___
  | | | |/ __|   | |/ _` |/ __|   | |/ _ \ / _ \
  | | | | (__    | | (_| | (__    | | (_) |  __/
  |_| |_|\___|   |_|\__,_|\___|   |_|\___/ \___|
";

/// Something that shows the game to the players.
///
/// Presenters never influence the game; they only report it.
pub trait Presenter {
    /// Shows the board before a move is requested.
    fn show_board(&mut self, board: &Board) -> io::Result<()>;

    /// Reports a move the engine refused.
    fn show_rejection(&mut self, player: Player, error: &MoveError) -> io::Result<()>;

    /// Shows the final board and how the game ended.
    fn show_outcome(&mut self, board: &Board, state: GameState) -> io::Result<()>;
}

/// Renders the board with row and column labels.
///
/// ```text
///     COLUMN
///     1 2 3
/// R 1 X| |O
///    -------
/// O 2  |X|
///    -------
/// W 3  | |
/// ```
pub fn render_board(board: &Board) -> String {
    const LABELS: [char; 3] = ['R', 'O', 'W'];

    let mut out = String::from("    COLUMN\n    1 2 3\n");
    for (row, label) in LABELS.iter().enumerate() {
        let [a, b, c] = board.row(row);
        out.push_str(&format!(
            "{} {} {}|{}|{}\n",
            label,
            row + 1,
            a.symbol(),
            b.symbol(),
            c.symbol()
        ));
        if row < 2 {
            out.push_str("   -------\n");
        }
    }
    out
}

/// Plain-text presenter for a terminal or any other writer.
pub struct TerminalPresenter<W> {
    writer: W,
    clear_screen: bool,
    show_banner: bool,
    notice: Option<String>,
}

impl<W: Write> TerminalPresenter<W> {
    /// Creates a presenter writing to `writer`.
    pub fn new(writer: W, clear_screen: bool, show_banner: bool) -> Self {
        Self {
            writer,
            clear_screen,
            show_banner,
            notice: None,
        }
    }

    /// Returns the output stream.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn draw(&mut self, board: &Board) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        if self.show_banner {
            writeln!(self.writer, "{BANNER}")?;
        }
        write!(self.writer, "{}", render_board(board))?;
        writeln!(self.writer, " ")?;
        Ok(())
    }
}

impl TerminalPresenter<Stdout> {
    /// Presenter on the process's stdout.
    pub fn stdout(clear_screen: bool, show_banner: bool) -> Self {
        Self::new(io::stdout(), clear_screen, show_banner)
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    #[instrument(skip_all)]
    fn show_board(&mut self, board: &Board) -> io::Result<()> {
        self.draw(board)?;
        // Rejections are printed under the redrawn board so a cleared
        // screen does not swallow them.
        if let Some(notice) = self.notice.take() {
            writeln!(self.writer, "{notice}")?;
        }
        self.writer.flush()
    }

    fn show_rejection(&mut self, player: Player, error: &MoveError) -> io::Result<()> {
        let notice = match error {
            MoveError::CellOccupied(_) => "Invalid move. Try again.".to_string(),
            other => format!("Player {player}: {other}"),
        };
        self.notice = Some(notice);
        Ok(())
    }

    #[instrument(skip(self, board))]
    fn show_outcome(&mut self, board: &Board, state: GameState) -> io::Result<()> {
        self.notice = None;
        self.draw(board)?;
        writeln!(self.writer, "{state}")?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell::{Empty as E, MarkO as O, MarkX as X};
    use crate::game::Coordinate;

    #[test]
    fn test_render_board_layout() {
        let board = Board::from_rows([[X, E, O], [E, X, E], [E, E, E]]);
        let expected = "    COLUMN\n    1 2 3\nR 1 X| |O\n   -------\nO 2  |X| \n   -------\nW 3  | | \n";
        assert_eq!(render_board(&board), expected);
    }

    #[test]
    fn test_rejection_printed_after_next_board() {
        let mut presenter = TerminalPresenter::new(Vec::new(), false, false);
        let at = Coordinate::new(0, 0).unwrap();
        presenter
            .show_rejection(Player::O, &MoveError::CellOccupied(at))
            .unwrap();
        assert!(presenter.writer().is_empty());

        presenter.show_board(&Board::new()).unwrap();
        let out = String::from_utf8(presenter.writer().clone()).unwrap();
        assert!(out.ends_with("Invalid move. Try again.\n"));
    }

    #[test]
    fn test_outcome_messages() {
        let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, O]]);
        let mut presenter = TerminalPresenter::new(Vec::new(), false, true);
        presenter.show_outcome(&board, GameState::Draw).unwrap();
        let out = String::from_utf8(presenter.writer().clone()).unwrap();
        assert!(out.starts_with(BANNER));
        assert!(out.ends_with("It's a tie!\n"));
    }
}
