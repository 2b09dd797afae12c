use crate::config::GameConfig;
use crate::domain::test_state_helpers::{card, pid, play, scripted_engine, P1, P2};
use crate::domain::{GameEngine, GameState, Move, Phase, PlayerView};

fn standard() -> GameEngine {
    scripted_engine(
        &["AH", "TH", "KB", "QB", "JL"],
        &["KH", "QH", "AB", "JA", "TL"],
        "QL",
        &[],
        GameConfig::default(),
    )
}

#[test]
fn view_hides_opponent_hand_and_talon() {
    let engine = standard();
    let view = engine.player_view(&pid(P1)).unwrap();
    assert_eq!(view.viewer, pid(P1));
    assert_eq!(view.hand, engine.state().players[0].hand);
    assert_eq!(view.opponent.id, pid(P2));
    assert_eq!(view.opponent.hand_size, 5);
    assert_eq!(view.opponent.tricks_won, 0);
    assert_eq!(view.talon_size, 10);
    assert_eq!(view.trump_card, Some(card("QL")));
    assert_eq!(view.to_act, pid(P1));
    assert_eq!(view.legal_moves.len(), 8);

    let json = serde_json::to_value(&view).unwrap();
    let text = json.to_string();
    for hidden in ["KH", "QH", "AB", "JA", "TL"] {
        assert!(!text.contains(&format!("\"{hidden}\"")), "{hidden} leaked");
    }
}

#[test]
fn off_turn_view_has_no_moves() {
    let engine = standard();
    let view = engine.player_view(&pid(P2)).unwrap();
    assert!(view.legal_moves.is_empty());
    assert_eq!(view.opponent.hand_size, 5);
    assert!(engine.player_view(&pid("ghost")).is_none());
}

#[test]
fn view_tracks_trick_progress() {
    let mut engine = standard();
    engine.submit(play(P1, "AH")).unwrap();
    let view = engine.player_view(&pid(P2)).unwrap();
    assert_eq!(view.current_trick.lead_card, Some(card("AH")));
    assert_eq!(view.opponent.hand_size, 4);
    assert!(view
        .legal_moves
        .iter()
        .all(|m| matches!(m, Move::PlayCard { .. })));

    engine.submit(play(P2, "KH")).unwrap();
    let view = engine.player_view(&pid(P2)).unwrap();
    let last = view.last_trick.unwrap();
    assert_eq!(last.winner, Some(pid(P1)));
    assert_eq!(view.opponent.tricks_won, 1);
    assert_eq!(view.hand.len(), 5);
    assert_eq!(view.talon_size, 8);
}

#[test]
fn state_json_restores_an_equal_engine() {
    let mut engine = standard();
    engine.submit(play(P1, "TH")).unwrap();
    let json = serde_json::to_string(&engine.snapshot()).unwrap();
    let state: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(state, engine.snapshot());

    let mut restored = GameEngine::from_state(state, GameConfig::default()).unwrap();
    let a = engine.submit(play(P2, "QH")).unwrap();
    let b = restored.submit(play(P2, "QH")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn phase_serializes_in_snake_case() {
    let json = serde_json::to_value(Phase::TalonClosed).unwrap();
    assert_eq!(json, "talon_closed");
    let view: PlayerView =
        serde_json::from_value(serde_json::to_value(standard().player_view(&pid(P1)).unwrap()).unwrap())
            .unwrap();
    assert_eq!(view.phase, Phase::Playing);
}
