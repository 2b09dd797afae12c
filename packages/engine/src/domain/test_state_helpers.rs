//! Test-only builders for scripted deals and rigged mid-game states.

use crate::config::GameConfig;
use crate::domain::dealing::full_deck;
use crate::domain::scoring::recompute_score;
use crate::domain::state::{GameState, Phase, Player, PlayerId, Trick};
use crate::domain::{try_parse_cards, Card, GameEngine, Move, Suit};

pub const P1: &str = "p1";
pub const P2: &str = "p2";

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

pub fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

pub fn pid(id: &str) -> PlayerId {
    PlayerId::from(id)
}

pub fn play(player: &str, token: &str) -> Move {
    Move::PlayCard {
        player_id: pid(player),
        card: card(token),
    }
}

/// Every deck card not listed in `used`, in canonical order.
pub fn remaining(used: &[Card]) -> Vec<Card> {
    full_deck()
        .into_iter()
        .filter(|c| !used.contains(c))
        .collect()
}

/// Deck order that deals the given hands and trump card; the talon starts
/// with `talon` and continues with the unlisted cards in canonical order.
pub fn scripted_deck(p1: &[&str], p2: &[&str], trump: &str, talon: &[&str]) -> Vec<Card> {
    let (h1, h2) = (cards(p1), cards(p2));
    let mut deck = Vec::with_capacity(20);
    for (a, b) in h1.iter().zip(h2.iter()) {
        deck.push(*a);
        deck.push(*b);
    }
    deck.push(card(trump));
    deck.extend(cards(talon));
    let rest = remaining(&deck);
    deck.extend(rest);
    deck
}

pub fn scripted_engine(
    p1: &[&str],
    p2: &[&str],
    trump: &str,
    talon: &[&str],
    config: GameConfig,
) -> GameEngine {
    let deck = scripted_deck(p1, p2, trump, talon);
    GameEngine::with_deck(P1, "Anna", P2, "Bert", config, &deck).expect("scripted deal")
}

/// Mid-game layout for `rigged_state`. Cards not placed anywhere else end up
/// in the talon in canonical order.
pub struct Rig<'a> {
    pub hands: [&'a [&'a str]; 2],
    pub tricks: [&'a [&'a str]; 2],
    pub announcements: [u16; 2],
    pub trump_suit: Suit,
    pub trump_card: Option<&'a str>,
}

pub fn rigged_state(rig: Rig<'_>) -> GameState {
    let mut players = [Player::new(pid(P1), "Anna"), Player::new(pid(P2), "Bert")];
    let mut placed = Vec::new();
    for (i, p) in players.iter_mut().enumerate() {
        p.hand = cards(rig.hands[i]);
        p.tricks = cards(rig.tricks[i]);
        p.announcements = rig.announcements[i];
        p.score = recompute_score(p);
        placed.extend(p.hand.iter().copied());
        placed.extend(p.tricks.iter().copied());
    }
    let trump_card = rig.trump_card.map(card);
    placed.extend(trump_card);

    GameState {
        id: "game-rigged".into(),
        phase: Phase::Playing,
        players,
        current_player_id: pid(P1),
        deck: remaining(&placed),
        trump_suit: rig.trump_suit,
        trump_card,
        current_trick: Trick::default(),
        trick_history: Vec::new(),
        talon_closed: false,
        closed_by: None,
        winner_id: None,
        winner_points: 0,
    }
}

pub fn rigged_engine(rig: Rig<'_>, config: GameConfig) -> GameEngine {
    GameEngine::from_state(rigged_state(rig), config).expect("rigged state is consistent")
}

/// Deck partition: every card exactly once across all locations.
pub fn assert_deck_partition(state: &GameState) {
    let mut all = state.accounted_cards();
    all.sort();
    let mut expected = full_deck();
    expected.sort();
    assert_eq!(all, expected, "cards lost or duplicated");
}

pub fn assert_scores_derived(state: &GameState) {
    for p in &state.players {
        assert_eq!(p.score, recompute_score(p), "score of {} drifted", p.id);
    }
}
