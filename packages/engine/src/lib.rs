#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rules engine for two-player Schnapsen (66).
//!
//! The engine deals a 20-card deck, validates and applies the four move
//! kinds (play a card, close the talon, announce a marriage, exchange the
//! trump Jack), resolves tricks, and detects the end of the game. Rendering,
//! opponents, and scheduling belong to the caller: it reads snapshots,
//! submits moves, and reacts to rejections.
//!
//! ```rust,ignore
//! use schnapsen_engine::{GameConfig, GameEngine, Move};
//!
//! let mut engine = GameEngine::new("p1", "Anna", "p2", "Bert", GameConfig::default())?;
//! let card = engine.state().players[0].hand[0];
//! let next = engine.submit(Move::PlayCard { player_id: "p1".into(), card })?;
//! ```

pub mod config;
pub mod domain;
pub mod errors;

// Re-exports for public API
pub use config::GameConfig;
pub use domain::{
    derive_game_transitions, Card, GameEngine, GameResult, GameState, GameTransition, Move,
    MoveRequest, MoveValidation, Phase, Player, PlayerId, PlayerView, Rank, Suit, Trick,
};
pub use errors::{DomainError, ErrorCode, MoveError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
