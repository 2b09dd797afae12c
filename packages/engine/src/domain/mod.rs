//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod engine;
pub mod game_transition;
pub mod moves;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod tricks;
pub mod validation;

#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_game_transition;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use cards_logic::{
    can_announce_marriage, calculate_points, lead_wins, marriage_points, sort_hand,
};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal, deal_from, full_deck, shuffled};
pub use engine::GameEngine;
pub use game_transition::{derive_game_transitions, GameTransition};
pub use moves::{Move, MoveRequest, MoveValidation};
pub use scoring::{recompute_score, GameResult};
pub use snapshot::{OpponentPublic, PlayerView};
pub use state::{GameState, Phase, Player, PlayerId, Trick};
