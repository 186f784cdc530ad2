//! Tests for session transitions and time travel.

use strictly_timetravel::{
    GameSession, IgnoreReason, MoveOutcome, Player, Position, SessionErrorKind, Square, Status,
};

fn play(cells: &[usize]) -> GameSession {
    let mut session = GameSession::new();
    for &cell in cells {
        session.apply_move(cell).expect("cell in range");
    }
    session
}

#[test]
fn test_move_appends_one_snapshot() {
    let mut session = play(&[4, 0]);
    let before = session.len();

    let outcome = session.apply_move(8).expect("cell in range");

    assert_eq!(outcome, MoveOutcome::Applied { step: before });
    assert_eq!(session.len(), before + 1);
    assert_eq!(session.step(), session.len() - 1);
}

#[test]
fn test_occupied_square_is_ignored() {
    let mut session = play(&[4]);
    let history = session.history().to_vec();

    let outcome = session.apply_move(4).expect("cell in range");

    assert_eq!(outcome, MoveOutcome::Ignored(IgnoreReason::SquareOccupied(Position::Center)));
    assert!(!outcome.is_applied());
    assert_eq!(session.history(), history.as_slice());
    assert_eq!(session.step(), 1);
}

#[test]
fn test_move_after_win_is_ignored() {
    let mut session = play(&[0, 4, 1, 5, 2]);
    let len = session.len();

    let outcome = session.apply_move(8).expect("cell in range");

    assert_eq!(outcome, MoveOutcome::Ignored(IgnoreReason::GameOver));
    assert_eq!(session.len(), len);
    assert_eq!(session.step(), len - 1);
}

#[test]
fn test_top_row_win_scenario() {
    let session = play(&[0, 4, 1, 5, 2]);

    let line = session.current_winner().expect("X completed the top row");
    assert_eq!(line.indices(), [0, 1, 2]);
    assert_eq!(session.current_status(), Status::Winner(Player::X));
    assert_eq!(session.current_status().to_string(), "Winner: X");
}

#[test]
fn test_jump_to_start_then_branch() {
    let mut session = play(&[0, 4, 1, 5, 2]);
    assert_eq!(session.len(), 6);

    session.jump_to(0).expect("step exists");
    assert_eq!(session.step(), 0);
    assert!(session.current_board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(session.len(), 6, "jumping keeps the recorded future");

    session.apply_move(3).expect("cell in range");
    assert_eq!(session.len(), 2);
    assert_eq!(session.step(), 1);
    assert_eq!(session.history()[1].last_move(), &Some(Position::MiddleLeft));
}

#[test]
fn test_branch_truncates_to_jump_point() {
    let mut session = play(&[0, 4, 1, 5]);
    session.jump_to(2).expect("step exists");

    session.apply_move(8).expect("cell in range");

    assert_eq!(session.len(), 4, "prefix 0..=2 kept plus the new move");
    assert_eq!(session.current_board().get(Position::BottomRight), Square::Occupied(Player::X));
    assert!(session.current_board().is_empty(Position::TopCenter));
}

#[test]
fn test_winning_step_can_be_left_and_replayed() {
    let mut session = play(&[0, 4, 1, 5, 2]);
    session.jump_to(4).expect("step exists");
    assert_eq!(session.current_status(), Status::NextPlayer(Player::X));
    assert_eq!(session.current_winner(), None);

    session.apply_move(6).expect("cell in range");
    assert_eq!(session.len(), 6);
    assert_eq!(session.current_status(), Status::NextPlayer(Player::O));
}

#[test]
fn test_turn_parity_holds_for_every_reachable_step() {
    let mut session = play(&[4, 0, 8, 2, 1, 7]);
    for step in 0..session.len() {
        session.jump_to(step).expect("step exists");
        assert_eq!(session.current_board().occupied_count(), step);
        let expected = if step % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(session.to_move(), expected);
    }
}

#[test]
fn test_cell_out_of_range_is_error() {
    let mut session = play(&[4]);
    let err = session.apply_move(9).unwrap_err();
    assert_eq!(err.kind, SessionErrorKind::CellOutOfRange { index: 9 });
    assert_eq!(session.len(), 2);
}

#[test]
fn test_step_out_of_range_is_error() {
    let mut session = play(&[4, 0]);
    let err = session.jump_to(3).unwrap_err();
    assert_eq!(err.kind, SessionErrorKind::StepOutOfRange { step: 3, len: 3 });
    assert_eq!(session.step(), 2);
    assert!(err.to_string().starts_with("Session error: step 3 is outside history of length 3"));
}

#[test]
fn test_undo_redo_walk_history() {
    let mut session = play(&[4, 0]);
    assert!(session.undo());
    assert!(session.undo());
    assert!(!session.undo());
    assert!(session.redo());
    assert_eq!(session.step(), 1);
    assert_eq!(session.len(), 3);
}
