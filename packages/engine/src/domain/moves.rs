//! Move vocabulary submitted by collaborators.

use serde::{Deserialize, Serialize};

use super::state::PlayerId;
use crate::domain::{Card, Suit};
use crate::errors::MoveError;

/// A move, one variant per kind with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Move {
    PlayCard { player_id: PlayerId, card: Card },
    CloseTalon { player_id: PlayerId },
    AnnounceMarriage { player_id: PlayerId, suit: Suit },
    ExchangeTrump { player_id: PlayerId },
}

impl Move {
    pub fn player_id(&self) -> &PlayerId {
        match self {
            Move::PlayCard { player_id, .. }
            | Move::CloseTalon { player_id }
            | Move::AnnounceMarriage { player_id, .. }
            | Move::ExchangeTrump { player_id } => player_id,
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Move::PlayCard { .. } => "play_card",
            Move::CloseTalon { .. } => "close_talon",
            Move::AnnounceMarriage { .. } => "announce_marriage",
            Move::ExchangeTrump { .. } => "exchange_trump",
        }
    }
}

/// Loose move form as sent by a UI: a kind string plus optional payloads.
///
/// Convert with `Move::try_from`; unknown kinds and missing payloads are
/// rejected instead of reaching the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub player_id: PlayerId,
    #[serde(default)]
    pub card: Option<Card>,
    #[serde(default)]
    pub marriage: Option<Suit>,
}

impl TryFrom<MoveRequest> for Move {
    type Error = MoveError;

    fn try_from(req: MoveRequest) -> Result<Self, Self::Error> {
        let player_id = req.player_id;
        match req.kind.as_str() {
            "play_card" => {
                let card = req
                    .card
                    .ok_or(MoveError::MalformedMove("play_card requires a card"))?;
                Ok(Move::PlayCard { player_id, card })
            }
            "close_talon" => Ok(Move::CloseTalon { player_id }),
            "announce_marriage" => {
                let suit = req.marriage.ok_or(MoveError::MalformedMove(
                    "announce_marriage requires a suit",
                ))?;
                Ok(Move::AnnounceMarriage { player_id, suit })
            }
            "exchange_trump" => Ok(Move::ExchangeTrump { player_id }),
            _ => Err(MoveError::UnknownMoveType),
        }
    }
}

/// Outcome of a side-effect-free validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl MoveValidation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    pub fn rejected(err: MoveError) -> Self {
        Self {
            valid: false,
            reason: Some(err.to_string()),
        }
    }
}

impl From<Result<(), MoveError>> for MoveValidation {
    fn from(res: Result<(), MoveError>) -> Self {
        match res {
            Ok(()) => Self::ok(),
            Err(e) => Self::rejected(e),
        }
    }
}
