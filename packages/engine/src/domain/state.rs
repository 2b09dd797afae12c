//! The authoritative game snapshot and its players.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rules::PLAYERS;
use crate::domain::Card;
use crate::domain::Suit;

/// Caller-chosen player identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Position of a player in `GameState::players` (0 deals first and leads first).
pub type Seat = usize;

#[inline]
pub fn other_seat(seat: Seat) -> Seat {
    1 - seat
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Unplayed cards; order carries no meaning.
    pub hand: Vec<Card>,
    /// Cards won, in pairs (lead then follow).
    pub tricks: Vec<Card>,
    /// Always `points(tricks) + announcements`; see `scoring::recompute_score`.
    pub score: u16,
    /// Marriage bonuses (20/40 each); never decreases.
    pub announcements: u16,
    /// Suits already announced; each marriage counts once per game.
    #[serde(default)]
    pub marriages: Vec<Suit>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
            tricks: Vec::new(),
            score: 0,
            announcements: 0,
            marriages: Vec::new(),
        }
    }
}

/// The in-progress or just-resolved two-card exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    pub lead_card: Option<Card>,
    pub follow_card: Option<Card>,
    pub winner: Option<PlayerId>,
}

impl Trick {
    pub fn is_empty(&self) -> bool {
        self.lead_card.is_none()
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.lead_card.iter().chain(self.follow_card.iter()).copied()
    }
}

/// Game progression. `TalonClosed` is still active play.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Playing,
    TalonClosed,
    Finished,
}

impl Phase {
    pub const fn accepts_moves(self) -> bool {
        !matches!(self, Phase::Finished)
    }
}

/// Entire game container, sufficient for pure rule operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub id: String,
    pub phase: Phase,
    pub players: [Player; PLAYERS],
    pub current_player_id: PlayerId,
    /// Face-down talon; the front card is drawn first. Excludes `trump_card`.
    pub deck: Vec<Card>,
    pub trump_suit: Suit,
    /// Face-up trump card; `None` once it has been drawn as the last talon card.
    pub trump_card: Option<Card>,
    pub current_trick: Trick,
    pub trick_history: Vec<Trick>,
    pub talon_closed: bool,
    pub closed_by: Option<PlayerId>,
    pub winner_id: Option<PlayerId>,
    /// Game points (1–3) awarded to the winner; 0 until finished.
    pub winner_points: u8,
}

impl GameState {
    pub fn seat_of(&self, id: &PlayerId) -> Option<Seat> {
        self.players.iter().position(|p| &p.id == id)
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn opponent(&self, id: &PlayerId) -> Option<&Player> {
        self.seat_of(id).map(|seat| &self.players[other_seat(seat)])
    }

    /// Seat of the current player. The turn invariant guarantees it exists;
    /// seat 0 is returned only for a state that already violates it.
    pub fn current_seat(&self) -> Seat {
        self.seat_of(&self.current_player_id).unwrap_or(0)
    }

    /// Cards still available to draw: face-down talon plus the face-up trump.
    pub fn talon_size(&self) -> usize {
        self.deck.len() + usize::from(self.trump_card.is_some())
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Every card in every location: hands, trick piles, face-up trump,
    /// talon, and the current trick. Equals the 20-card deck exactly once each.
    pub fn accounted_cards(&self) -> Vec<Card> {
        let mut all = Vec::with_capacity(super::rules::DECK_SIZE);
        for p in &self.players {
            all.extend(p.hand.iter().copied());
            all.extend(p.tricks.iter().copied());
        }
        all.extend(self.trump_card);
        all.extend(self.deck.iter().copied());
        all.extend(self.current_trick.cards());
        all
    }
}
