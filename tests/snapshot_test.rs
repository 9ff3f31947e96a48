//! Saving and resuming games through JSON snapshots.

use landung::{
    Action, Coordinate, GameInProgress, GameResult, GameSnapshot, SnapshotError, Stone,
};

fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

fn opening() -> GameInProgress {
    let actions = [
        Action::place(Stone::First, c(0, 0)),
        Action::place(Stone::Second, c(4, 4)),
        Action::move_and_place(Stone::First, c(0, 0), c(0, 2), c(2, 2)),
    ];
    match GameInProgress::replay(&actions).unwrap() {
        GameResult::InProgress(game) => game,
        GameResult::Finished(done) => panic!("game ended early: {:?}", done.outcome()),
    }
}

#[test]
fn test_json_round_trip_preserves_position() {
    let game = opening();
    let json = game.snapshot().to_json().unwrap();
    let restored = GameInProgress::restore(GameSnapshot::from_json(&json).unwrap()).unwrap();

    assert_eq!(restored.board(), game.board());
    assert_eq!(restored.players(), game.players());
    assert_eq!(restored.turn(), 3);
    assert!(restored.history().is_empty());
    assert_eq!(restored.to_move(), Stone::Second);
}

#[test]
fn test_restored_game_continues_with_same_rules() {
    let restored = GameInProgress::restore(opening().snapshot()).unwrap();
    // Turn 3 still allows the second competitor a plain placement.
    let next = restored
        .apply(Action::place(Stone::Second, c(3, 3)))
        .unwrap()
        .in_progress()
        .unwrap();
    assert_eq!(next.turn(), 4);
    assert_eq!(next.history().len(), 1);
}

#[test]
fn test_tampered_snapshot_rejected() {
    // First has two stones down and seven in reserve; claim nine.
    let json = opening().snapshot().to_json().unwrap();
    let tampered = json.replacen("\"reserve\":7", "\"reserve\":9", 1);
    assert_ne!(json, tampered);
    let snapshot = GameSnapshot::from_json(&tampered).unwrap();
    assert!(matches!(
        GameInProgress::restore(snapshot),
        Err(SnapshotError::Inconsistent(_))
    ));
}

#[test]
fn test_malformed_json_rejected() {
    assert!(matches!(
        GameSnapshot::from_json("{\"board\": 1}"),
        Err(SnapshotError::Json(_))
    ));
}
