//! Events derived by diffing two snapshots, for presentation layers that
//! animate or announce what a move changed.

use serde::{Deserialize, Serialize};

use super::state::{GameState, PlayerId};
use crate::domain::Card;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameTransition {
    /// Edge-triggered: the turn became a specific player.
    TurnBecame { player_id: PlayerId },

    /// A card was led into an empty trick.
    CardLed { player_id: PlayerId, card: Card },

    /// A trick completed.
    TrickWon {
        player_id: PlayerId,
        lead: Card,
        follow: Card,
    },

    /// Talon closed (Zudrehen).
    TalonClosed { player_id: PlayerId },

    /// Marriage bonus added.
    MarriageAnnounced { player_id: PlayerId, points: u16 },

    /// Trump Jack swapped for the face-up trump card.
    TrumpExchanged { player_id: PlayerId, taken: Card },

    /// Edge-triggered: game moved to Finished.
    GameEnded { winner_id: PlayerId, game_points: u8 },
}

/// Derive transitions from before/after snapshots of the same game.
pub fn derive_game_transitions(before: &GameState, after: &GameState) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Card led
    if before.current_trick.lead_card.is_none() {
        if let Some(card) = after.current_trick.lead_card {
            transitions.push(GameTransition::CardLed {
                player_id: before.current_player_id.clone(),
                card,
            });
        }
    }

    // 2. Tricks completed
    for trick in after.trick_history.iter().skip(before.trick_history.len()) {
        if let (Some(winner), Some(lead), Some(follow)) =
            (&trick.winner, trick.lead_card, trick.follow_card)
        {
            transitions.push(GameTransition::TrickWon {
                player_id: winner.clone(),
                lead,
                follow,
            });
        }
    }

    // 3. Talon closed
    if !before.talon_closed && after.talon_closed {
        if let Some(player_id) = &after.closed_by {
            transitions.push(GameTransition::TalonClosed {
                player_id: player_id.clone(),
            });
        }
    }

    // 4. Marriages
    for (b, a) in before.players.iter().zip(after.players.iter()) {
        if a.announcements > b.announcements {
            transitions.push(GameTransition::MarriageAnnounced {
                player_id: a.id.clone(),
                points: a.announcements - b.announcements,
            });
        }
    }

    // 5. Trump exchange: face-up card replaced while still on the table
    if let (Some(old), Some(new)) = (before.trump_card, after.trump_card) {
        if old != new {
            transitions.push(GameTransition::TrumpExchanged {
                player_id: before.current_player_id.clone(),
                taken: old,
            });
        }
    }

    // 6. Turn change
    if before.current_player_id != after.current_player_id && !after.is_finished() {
        transitions.push(GameTransition::TurnBecame {
            player_id: after.current_player_id.clone(),
        });
    }

    // 7. Game end
    if !before.is_finished() && after.is_finished() {
        if let Some(winner_id) = &after.winner_id {
            transitions.push(GameTransition::GameEnded {
                winner_id: winner_id.clone(),
                game_points: after.winner_points,
            });
        }
    }

    transitions
}
