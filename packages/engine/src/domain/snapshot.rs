//! Per-player snapshot for observing the game without seeing hidden cards.

use serde::{Deserialize, Serialize};

use super::moves::Move;
use super::state::{GameState, Phase, PlayerId, Trick};
use crate::domain::{Card, Suit};

/// What the opponent shows: no hand contents, only counts and public piles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentPublic {
    pub id: PlayerId,
    pub name: String,
    pub hand_size: usize,
    /// Tricks won (two cards each).
    pub tricks_won: usize,
    pub announcements: u16,
}

/// Everything one player is entitled to see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub game_id: String,
    pub phase: Phase,
    pub viewer: PlayerId,
    pub hand: Vec<Card>,
    pub tricks: Vec<Card>,
    pub score: u16,
    pub announcements: u16,
    pub opponent: OpponentPublic,
    pub trump_suit: Suit,
    pub trump_card: Option<Card>,
    /// Face-down talon plus the face-up trump card.
    pub talon_size: usize,
    pub talon_closed: bool,
    pub closed_by: Option<PlayerId>,
    pub current_trick: Trick,
    /// Most recently completed trick, for display.
    pub last_trick: Option<Trick>,
    pub to_act: PlayerId,
    pub legal_moves: Vec<Move>,
    pub winner_id: Option<PlayerId>,
    pub winner_points: u8,
}

impl PlayerView {
    /// Build the view for `viewer`; `None` if they are not seated.
    pub fn for_player(state: &GameState, viewer: &PlayerId, legal_moves: Vec<Move>) -> Option<Self> {
        let me = state.player(viewer)?;
        let them = state.opponent(viewer)?;

        Some(Self {
            game_id: state.id.clone(),
            phase: state.phase,
            viewer: viewer.clone(),
            hand: me.hand.clone(),
            tricks: me.tricks.clone(),
            score: me.score,
            announcements: me.announcements,
            opponent: OpponentPublic {
                id: them.id.clone(),
                name: them.name.clone(),
                hand_size: them.hand.len(),
                tricks_won: them.tricks.len() / 2,
                announcements: them.announcements,
            },
            trump_suit: state.trump_suit,
            trump_card: state.trump_card,
            talon_size: state.talon_size(),
            talon_closed: state.talon_closed,
            closed_by: state.closed_by.clone(),
            current_trick: state.current_trick.clone(),
            last_trick: state.trick_history.last().cloned(),
            to_act: state.current_player_id.clone(),
            legal_moves,
            winner_id: state.winner_id.clone(),
            winner_points: state.winner_points,
        })
    }
}
