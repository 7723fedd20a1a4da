//! Tests for loading game states from serialized form.

use tictactoe_replay::{GameState, GameView, History, ViewSettings};

fn play(indices: &[usize]) -> GameState {
    indices
        .iter()
        .fold(GameState::new(), |state, &index| state.apply_move(index))
}

#[test]
fn test_played_game_round_trips() {
    let state = play(&[0, 4, 8]).jump_to(1);
    let json = serde_json::to_string(&state).unwrap();
    let loaded: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, state);
    assert_eq!(loaded.apply_move(2).history().len(), 3);
}

#[test]
fn test_empty_history_is_rejected() {
    let json = r#"{"history":{"entries":[]},"current_step":0}"#;
    let err = serde_json::from_str::<GameState>(json).unwrap_err();
    assert!(err.to_string().contains("no entries"));
    assert!(serde_json::from_str::<History>(r#"{"entries":[]}"#).is_err());
}

#[test]
fn test_step_past_end_is_rejected() {
    let mut json = serde_json::to_value(GameState::new()).unwrap();
    json["current_step"] = 7.into();
    let err = serde_json::from_value::<GameState>(json).unwrap_err();
    assert!(err.to_string().contains("beyond history"));
}

#[test]
fn test_last_step_is_accepted() {
    let mut json = serde_json::to_value(play(&[0, 4])).unwrap();
    json["current_step"] = 2.into();
    let loaded: GameState = serde_json::from_value(json).unwrap();
    assert_eq!(loaded.current_step(), 2);
    assert!(GameView::build(&loaded, &ViewSettings::default()).is_ok());
}

#[test]
fn test_history_skipping_a_ply_is_rejected() {
    let mut json = serde_json::to_value(play(&[0, 4])).unwrap();
    // Drop the middle snapshot so one step fills two squares.
    json["history"]["entries"]
        .as_array_mut()
        .unwrap()
        .remove(1);
    json["current_step"] = 1.into();
    let err = serde_json::from_value::<GameState>(json).unwrap_err();
    assert!(err.to_string().contains("violates invariants"));
}

#[test]
fn test_history_not_starting_empty_is_rejected() {
    let mut json = serde_json::to_value(play(&[0, 4])).unwrap();
    json["history"]["entries"]
        .as_array_mut()
        .unwrap()
        .remove(0);
    json["current_step"] = 0.into();
    assert!(serde_json::from_value::<GameState>(json).is_err());
}
