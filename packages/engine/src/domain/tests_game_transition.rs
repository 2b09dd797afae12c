use crate::config::GameConfig;
use crate::domain::game_transition::{derive_game_transitions, GameTransition};
use crate::domain::test_state_helpers::{card, pid, play, rigged_engine, scripted_engine, Rig, P1, P2};
use crate::domain::{GameEngine, Move, Suit};

fn standard() -> GameEngine {
    scripted_engine(
        &["AH", "TH", "KB", "QB", "JL"],
        &["KH", "QH", "AB", "JA", "TL"],
        "QL",
        &[],
        GameConfig::default(),
    )
}

fn step(engine: &mut GameEngine, mv: Move) -> Vec<GameTransition> {
    let before = engine.snapshot();
    let after = engine.submit(mv).unwrap();
    derive_game_transitions(&before, &after)
}

#[test]
fn derive_transitions_empty_for_identical_snapshots() {
    let engine = standard();
    let s = engine.snapshot();
    assert!(derive_game_transitions(&s, &s).is_empty());
}

#[test]
fn derive_transitions_lead_emits_card_led_then_turn() {
    let mut engine = standard();
    let t = step(&mut engine, play(P1, "AH"));
    assert_eq!(
        t,
        vec![
            GameTransition::CardLed {
                player_id: pid(P1),
                card: card("AH"),
            },
            GameTransition::TurnBecame { player_id: pid(P2) },
        ]
    );
}

#[test]
fn derive_transitions_follow_emits_trick_won() {
    let mut engine = standard();
    engine.submit(play(P1, "AH")).unwrap();
    let t = step(&mut engine, play(P2, "KH"));
    assert_eq!(
        t,
        vec![
            GameTransition::TrickWon {
                player_id: pid(P1),
                lead: card("AH"),
                follow: card("KH"),
            },
            GameTransition::TurnBecame { player_id: pid(P1) },
        ]
    );
}

#[test]
fn derive_transitions_no_turn_event_when_follower_wins() {
    let mut engine = standard();
    engine.submit(play(P1, "KB")).unwrap();
    let t = step(&mut engine, play(P2, "AB"));
    assert_eq!(
        t,
        vec![GameTransition::TrickWon {
            player_id: pid(P2),
            lead: card("KB"),
            follow: card("AB"),
        }]
    );
}

#[test]
fn derive_transitions_leader_actions() {
    let mut engine = standard();
    assert_eq!(
        step(
            &mut engine,
            Move::AnnounceMarriage {
                player_id: pid(P1),
                suit: Suit::Bells,
            }
        ),
        vec![GameTransition::MarriageAnnounced {
            player_id: pid(P1),
            points: 20,
        }]
    );
    assert_eq!(
        step(&mut engine, Move::ExchangeTrump { player_id: pid(P1) }),
        vec![GameTransition::TrumpExchanged {
            player_id: pid(P1),
            taken: card("QL"),
        }]
    );
    assert_eq!(
        step(&mut engine, Move::CloseTalon { player_id: pid(P1) }),
        vec![GameTransition::TalonClosed { player_id: pid(P1) }]
    );
}

#[test]
fn derive_transitions_last_draw_is_not_an_exchange() {
    let mut engine = rigged_engine(
        Rig {
            hands: [&["AH"], &["KH"]],
            tricks: [
                &["AB", "TB", "KB", "QB", "JB", "TH", "QH", "JL"],
                &["AL", "TL", "KL", "AA", "TA", "KA", "QA", "JA"],
            ],
            announcements: [0, 0],
            trump_suit: Suit::Leaves,
            trump_card: Some("QL"),
        },
        GameConfig::default(),
    );
    engine.submit(play(P1, "AH")).unwrap();
    let t = step(&mut engine, play(P2, "KH"));
    assert!(!t
        .iter()
        .any(|e| matches!(e, GameTransition::TrumpExchanged { .. })));
    assert!(engine.state().trump_card.is_none());
}

#[test]
fn derive_transitions_game_end_replaces_turn_event() {
    let mut engine = rigged_engine(
        Rig {
            hands: [&["AH", "KL"], &["JH", "TL"]],
            tricks: [&["AB", "TB", "KB", "QB", "JB", "QA"], &[]],
            announcements: [20, 0],
            trump_suit: Suit::Leaves,
            trump_card: Some("QL"),
        },
        GameConfig::default(),
    );
    engine.submit(play(P1, "AH")).unwrap();
    let t = step(&mut engine, play(P2, "JH"));
    assert_eq!(
        t,
        vec![
            GameTransition::TrickWon {
                player_id: pid(P1),
                lead: card("AH"),
                follow: card("JH"),
            },
            GameTransition::GameEnded {
                winner_id: pid(P1),
                game_points: 3,
            },
        ]
    );
}

#[test]
fn transitions_serialize_with_event_tag() {
    let json = serde_json::to_value(GameTransition::TurnBecame { player_id: pid(P2) }).unwrap();
    assert_eq!(json, serde_json::json!({"event": "turn_became", "player_id": "p2"}));

    let json = serde_json::to_value(GameTransition::CardLed {
        player_id: pid(P1),
        card: card("TH"),
    })
    .unwrap();
    assert_eq!(json["card"], "TH");
}
