//! Tests for non-interactive replay output.

use tictactoe_cli::{
    GameState, MoveError, ParseError, Player, ReplayError, render_replay, replay_moves,
};

#[test]
fn test_replay_text_output() {
    let snapshot = replay_moves(&["1 1", "2 1", "1 2", "2 2", "1 3"]).unwrap();
    assert_eq!(snapshot.state, GameState::XWins);

    let text = render_replay(&snapshot, false).unwrap();
    let expected = concat!(
        "    COLUMN\n",
        "    1 2 3\n",
        "R 1 X|X|X\n",
        "   -------\n",
        "O 2 O|O| \n",
        "   -------\n",
        "W 3  | | \n",
        "Game over. Player X wins!",
    );
    assert_eq!(text, expected);
}

#[test]
fn test_replay_in_progress_status() {
    let snapshot = replay_moves(&["2 2"]).unwrap();
    assert_eq!(snapshot.to_move, Some(Player::O));
    let text = render_replay(&snapshot, false).unwrap();
    assert!(text.ends_with("In progress. Player O to move."));
}

#[test]
fn test_replay_json_output() {
    let snapshot = replay_moves(&["1 1", "2 2"]).unwrap();
    let json = render_replay(&snapshot, true).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["state"], "InProgress");
    assert_eq!(value["to_move"], "X");
    assert_eq!(value["history"].as_array().unwrap().len(), 2);
    assert_eq!(value["history"][1]["player"], "O");
    assert_eq!(value["history"][1]["at"]["row"], 1);
}

#[test]
fn test_replay_rejects_bad_text() {
    let err = replay_moves(&["1 1", "banana"]).unwrap_err();
    match err {
        ReplayError::Parse { input, source } => {
            assert_eq!(input, "banana");
            assert_eq!(source, ParseError::NotIntegers);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_replay_rejects_occupied_cell() {
    let err = replay_moves(&["1 1", "1 1"]).unwrap_err();
    assert!(matches!(err, ReplayError::Move(MoveError::CellOccupied(_))));
}
