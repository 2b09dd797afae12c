//! Engine error types.
//!
//! `MoveError` is the closed set of reasons a submitted move can be rejected.
//! Every rejection is recoverable: the caller submits a different move.
//! `DomainError` wraps it together with the non-move failures (card parsing,
//! configuration, construction input).

use thiserror::Error;

use super::error_code::ErrorCode;

/// Reason a move failed validation. `Display` is the reason string surfaced
/// to collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("not your turn")]
    NotYourTurn,
    #[error("game is finished")]
    GameFinished,
    #[error("card not in hand")]
    CardNotInHand,
    #[error("talon close not allowed")]
    TalonCloseNotAllowed,
    #[error("talon already closed")]
    TalonAlreadyClosed,
    #[error("cannot close during trick")]
    CannotCloseDuringTrick,
    #[error("no marriage in this suit")]
    NoMarriageInSuit,
    #[error("marriage can only be announced when leading")]
    MarriageOnlyWhenLeading,
    #[error("marriage already announced in this suit")]
    MarriageAlreadyAnnounced,
    #[error("trump exchange not allowed")]
    TrumpExchangeNotAllowed,
    #[error("no trump jack in hand")]
    NoTrumpJackInHand,
    #[error("cannot exchange after talon close")]
    CannotExchangeAfterClose,
    #[error("trump card already taken")]
    TrumpCardTaken,
    #[error("unknown move type")]
    UnknownMoveType,
    #[error("malformed move: {0}")]
    MalformedMove(&'static str),
}

impl MoveError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            MoveError::NotYourTurn => ErrorCode::NotYourTurn,
            MoveError::GameFinished => ErrorCode::GameFinished,
            MoveError::CardNotInHand => ErrorCode::CardNotInHand,
            MoveError::TalonCloseNotAllowed => ErrorCode::TalonCloseNotAllowed,
            MoveError::TalonAlreadyClosed => ErrorCode::TalonAlreadyClosed,
            MoveError::CannotCloseDuringTrick => ErrorCode::CannotCloseDuringTrick,
            MoveError::NoMarriageInSuit => ErrorCode::NoMarriageInSuit,
            MoveError::MarriageOnlyWhenLeading => ErrorCode::MarriageOnlyWhenLeading,
            MoveError::MarriageAlreadyAnnounced => ErrorCode::MarriageAlreadyAnnounced,
            MoveError::TrumpExchangeNotAllowed => ErrorCode::TrumpExchangeNotAllowed,
            MoveError::NoTrumpJackInHand => ErrorCode::NoTrumpJackInHand,
            MoveError::CannotExchangeAfterClose => ErrorCode::CannotExchangeAfterClose,
            MoveError::TrumpCardTaken => ErrorCode::TrumpCardTaken,
            MoveError::UnknownMoveType => ErrorCode::UnknownMoveType,
            MoveError::MalformedMove(_) => ErrorCode::MalformedMove,
        }
    }
}

/// Central engine error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Move rejected by validation; state is untouched
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),
    /// Card token could not be parsed
    #[error("parse card: {0}")]
    ParseCard(String),
    /// Configuration value missing or out of range
    #[error("configuration error: {0}")]
    Config(String),
    /// Construction input (players, deck, resumed state) is inconsistent
    #[error("setup error: {0}")]
    Setup(String),
}

impl DomainError {
    pub fn parse_card(token: impl Into<String>) -> Self {
        Self::ParseCard(token.into())
    }
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }
    pub fn setup(detail: impl Into<String>) -> Self {
        Self::Setup(detail.into())
    }

    pub const fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidMove(e) => e.code(),
            DomainError::ParseCard(_) => ErrorCode::ParseCard,
            DomainError::Config(_) => ErrorCode::ConfigError,
            DomainError::Setup(_) => ErrorCode::SetupError,
        }
    }

    /// The move rejection, if this error is one.
    pub fn as_move_error(&self) -> Option<MoveError> {
        match self {
            DomainError::InvalidMove(e) => Some(*e),
            _ => None,
        }
    }
}
