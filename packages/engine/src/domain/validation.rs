//! Side-effect-free move validation.
//!
//! Checks run in a fixed order: turn first (an unknown player id is simply
//! not on turn), then game-over, then the checks specific to the move kind.
//! Following suit is never required, even after the talon is closed.

use super::cards_logic::{can_announce_marriage, hand_has_card};
use super::moves::Move;
use super::state::{GameState, Player};
use crate::config::GameConfig;
use crate::domain::{Card, Rank, Suit};
use crate::errors::MoveError;

pub fn validate_move(state: &GameState, config: &GameConfig, mv: &Move) -> Result<(), MoveError> {
    if mv.player_id() != &state.current_player_id {
        return Err(MoveError::NotYourTurn);
    }
    if !state.phase.accepts_moves() {
        return Err(MoveError::GameFinished);
    }
    let player = state
        .player(mv.player_id())
        .ok_or(MoveError::NotYourTurn)?;

    match mv {
        Move::PlayCard { card, .. } => validate_play_card(player, *card),
        Move::CloseTalon { .. } => validate_close_talon(state, config),
        Move::AnnounceMarriage { suit, .. } => validate_marriage(state, player, *suit),
        Move::ExchangeTrump { .. } => validate_trump_exchange(state, config, player),
    }
}

fn validate_play_card(player: &Player, card: Card) -> Result<(), MoveError> {
    if !player.hand.contains(&card) {
        return Err(MoveError::CardNotInHand);
    }
    Ok(())
}

fn validate_close_talon(state: &GameState, config: &GameConfig) -> Result<(), MoveError> {
    if !config.allow_talon_close {
        return Err(MoveError::TalonCloseNotAllowed);
    }
    if state.talon_closed {
        return Err(MoveError::TalonAlreadyClosed);
    }
    if !state.current_trick.is_empty() {
        return Err(MoveError::CannotCloseDuringTrick);
    }
    Ok(())
}

fn validate_marriage(state: &GameState, player: &Player, suit: Suit) -> Result<(), MoveError> {
    if !can_announce_marriage(&player.hand, suit) {
        return Err(MoveError::NoMarriageInSuit);
    }
    if player.marriages.contains(&suit) {
        return Err(MoveError::MarriageAlreadyAnnounced);
    }
    if !state.current_trick.is_empty() {
        return Err(MoveError::MarriageOnlyWhenLeading);
    }
    Ok(())
}

fn validate_trump_exchange(
    state: &GameState,
    config: &GameConfig,
    player: &Player,
) -> Result<(), MoveError> {
    if !config.allow_trump_exchange {
        return Err(MoveError::TrumpExchangeNotAllowed);
    }
    if !hand_has_card(&player.hand, state.trump_suit, Rank::Jack) {
        return Err(MoveError::NoTrumpJackInHand);
    }
    if state.talon_closed {
        return Err(MoveError::CannotExchangeAfterClose);
    }
    if state.trump_card.is_none() {
        return Err(MoveError::TrumpCardTaken);
    }
    Ok(())
}
