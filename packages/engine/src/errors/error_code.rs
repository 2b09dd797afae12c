//! Stable error codes for engine rejections.
//!
//! Collaborators (UIs, bots, transports) should branch on these codes rather
//! than on the human-readable reason text, which may be reworded.

use core::fmt;

/// Centralized error codes for the rules engine.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Move rejections
    /// Mover is not the current player
    NotYourTurn,
    /// Game already finished
    GameFinished,
    /// Played card is not in the mover's hand
    CardNotInHand,
    /// Talon closing disabled by configuration
    TalonCloseNotAllowed,
    /// Talon is already closed
    TalonAlreadyClosed,
    /// A trick is in progress
    CannotCloseDuringTrick,
    /// Mover lacks King and Queen of the named suit
    NoMarriageInSuit,
    /// Marriage attempted while following
    MarriageOnlyWhenLeading,
    /// Suit's marriage was already announced this game
    MarriageAlreadyAnnounced,
    /// Trump exchange disabled by configuration
    TrumpExchangeNotAllowed,
    /// Mover lacks the trump Jack
    NoTrumpJackInHand,
    /// Trump exchange after the talon was closed
    CannotExchangeAfterClose,
    /// Face-up trump card already drawn
    TrumpCardTaken,
    /// Move kind not recognised
    UnknownMoveType,
    /// Move request missing its payload
    MalformedMove,

    // Domain errors
    /// Card token could not be parsed
    ParseCard,
    /// Invalid configuration value
    ConfigError,
    /// Invalid construction input
    SetupError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::GameFinished => "GAME_FINISHED",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::TalonCloseNotAllowed => "TALON_CLOSE_NOT_ALLOWED",
            Self::TalonAlreadyClosed => "TALON_ALREADY_CLOSED",
            Self::CannotCloseDuringTrick => "CANNOT_CLOSE_DURING_TRICK",
            Self::NoMarriageInSuit => "NO_MARRIAGE_IN_SUIT",
            Self::MarriageOnlyWhenLeading => "MARRIAGE_ONLY_WHEN_LEADING",
            Self::MarriageAlreadyAnnounced => "MARRIAGE_ALREADY_ANNOUNCED",
            Self::TrumpExchangeNotAllowed => "TRUMP_EXCHANGE_NOT_ALLOWED",
            Self::NoTrumpJackInHand => "NO_TRUMP_JACK_IN_HAND",
            Self::CannotExchangeAfterClose => "CANNOT_EXCHANGE_AFTER_CLOSE",
            Self::TrumpCardTaken => "TRUMP_CARD_TAKEN",
            Self::UnknownMoveType => "UNKNOWN_MOVE_TYPE",
            Self::MalformedMove => "MALFORMED_MOVE",

            Self::ParseCard => "PARSE_CARD",
            Self::ConfigError => "CONFIG_ERROR",
            Self::SetupError => "SETUP_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
