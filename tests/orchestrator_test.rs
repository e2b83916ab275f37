//! Tests for the turn loop.

use std::io::{self, Cursor};
use tictactoe_cli::{
    Board, Coordinate, FirstAvailable, GameState, InputError, MoveError, Orchestrator, Player,
    Presenter, ScriptedInput, SessionError, TerminalInput, TerminalPresenter,
};

fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col).unwrap()
}

/// Presenter that records what it was asked to show.
#[derive(Debug, Default)]
struct Recorder {
    boards: usize,
    rejections: Vec<(Player, MoveError)>,
    outcome: Option<GameState>,
}

impl Presenter for Recorder {
    fn show_board(&mut self, _board: &Board) -> io::Result<()> {
        self.boards += 1;
        Ok(())
    }

    fn show_rejection(&mut self, player: Player, error: &MoveError) -> io::Result<()> {
        self.rejections.push((player, error.clone()));
        Ok(())
    }

    fn show_outcome(&mut self, _board: &Board, state: GameState) -> io::Result<()> {
        self.outcome = Some(state);
        Ok(())
    }
}

#[test]
fn test_scripted_game_x_wins() {
    let x = ScriptedInput::new([at(0, 0), at(0, 1), at(0, 2)]);
    let o = ScriptedInput::new([at(1, 0), at(1, 1)]);
    let mut orchestrator = Orchestrator::new(Box::new(x), Box::new(o), Recorder::default());

    let state = orchestrator.run().unwrap();

    assert_eq!(state, GameState::XWins);
    assert_eq!(orchestrator.presenter().outcome, Some(GameState::XWins));
    assert_eq!(orchestrator.presenter().boards, 5);
    assert_eq!(orchestrator.game().history().len(), 5);
}

#[test]
fn test_occupied_cell_asks_same_player_again() {
    let x = ScriptedInput::new([at(1, 1), at(0, 0), at(2, 2)]);
    // O first tries the center X already holds.
    let o = ScriptedInput::new([at(1, 1), at(0, 1), at(0, 2)]);
    let mut orchestrator = Orchestrator::new(Box::new(x), Box::new(o), Recorder::default());

    let state = orchestrator.run().unwrap();

    assert_eq!(state, GameState::XWins);
    let rejections = &orchestrator.presenter().rejections;
    assert_eq!(rejections.len(), 1);
    assert_eq!(rejections[0], (Player::O, MoveError::CellOccupied(at(1, 1))));
    // The rejected attempt is not part of the history.
    assert_eq!(orchestrator.game().history().len(), 5);
}

#[test]
fn test_exhausted_script_aborts_session() {
    let x = ScriptedInput::new([at(0, 0)]);
    let o = ScriptedInput::new([at(1, 1)]);
    let mut orchestrator = Orchestrator::new(Box::new(x), Box::new(o), Recorder::default());

    let err = orchestrator.run().unwrap_err();
    assert!(matches!(err, SessionError::Input(InputError::Exhausted)));
    assert_eq!(orchestrator.presenter().outcome, None);
}

#[test]
fn test_computer_opponent_takes_first_free_cell() {
    let x = ScriptedInput::new([at(1, 1), at(2, 2), at(1, 0)]);
    let o = FirstAvailable::new("Computer");
    let mut orchestrator = Orchestrator::new(Box::new(x), Box::new(o), Recorder::default());

    // O plays (0,0), (0,1), (0,2) and completes the top row.
    let state = orchestrator.run().unwrap();
    assert_eq!(state, GameState::OWins);
}

#[test]
fn test_hot_seat_terminal_game() {
    let typed = "1 1\n1 1\n2 1\n1 2\nnope\n2 2\n1 3\n";
    let input = TerminalInput::new("Human", Cursor::new(typed), Vec::new());
    let presenter = TerminalPresenter::new(Vec::new(), false, false);
    let mut orchestrator = Orchestrator::hot_seat(Box::new(input), presenter);

    let state = orchestrator.run().unwrap();
    assert_eq!(state, GameState::XWins);

    let out = String::from_utf8(orchestrator.presenter().writer().clone()).unwrap();
    assert!(out.contains("Invalid move. Try again."));
    assert!(out.ends_with("Player X wins!\n"));
    assert!(out.contains("R 1 X|X|X"));
}
