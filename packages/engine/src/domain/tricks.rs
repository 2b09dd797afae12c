//! Card play and trick resolution. Callers validate first; nothing here
//! re-checks legality.

use tracing::debug;

use super::cards_logic::lead_wins;
use super::scoring::{detect_winner, finish_game, refresh_scores};
use super::state::{other_seat, GameState, Phase, PlayerId, Seat};
use crate::domain::Card;

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether the card completed a trick.
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<PlayerId>,
    /// Whether each player drew a card after the trick.
    pub drew: bool,
    /// Phase transitioned to, if any.
    pub phase_transitioned: Option<Phase>,
}

/// Play `card` from `seat`'s hand into the current trick.
pub fn play_card(state: &mut GameState, seat: Seat, card: Card, target_score: u16) -> PlayCardResult {
    let hand = &mut state.players[seat].hand;
    if let Some(pos) = hand.iter().position(|&c| c == card) {
        hand.remove(pos);
    }

    if state.current_trick.lead_card.is_none() {
        state.current_trick.lead_card = Some(card);
        state.current_player_id = state.players[other_seat(seat)].id.clone();
        return PlayCardResult {
            trick_completed: false,
            trick_winner: None,
            drew: false,
            phase_transitioned: None,
        };
    }

    state.current_trick.follow_card = Some(card);
    resolve_trick(state, seat, target_score)
}

/// Resolve a two-card trick whose follow card was just played by `follower`.
fn resolve_trick(state: &mut GameState, follower: Seat, target_score: u16) -> PlayCardResult {
    let leader = other_seat(follower);
    let (Some(lead), Some(follow)) = (state.current_trick.lead_card, state.current_trick.follow_card)
    else {
        return PlayCardResult {
            trick_completed: false,
            trick_winner: None,
            drew: false,
            phase_transitioned: None,
        };
    };

    let winner = if lead_wins(lead, follow, state.trump_suit) {
        leader
    } else {
        follower
    };
    let loser = other_seat(winner);
    let winner_id = state.players[winner].id.clone();

    state.players[winner].tricks.extend([lead, follow]);
    refresh_scores(state);

    let mut finished = std::mem::take(&mut state.current_trick);
    finished.winner = Some(winner_id.clone());
    state.trick_history.push(finished);

    let drew = draw_after_trick(state, winner, loser);
    state.current_player_id = winner_id.clone();

    debug!(
        game_id = %state.id,
        %lead,
        %follow,
        winner = %winner_id,
        drew,
        talon = state.talon_size(),
        "Trick resolved"
    );

    let mut result = PlayCardResult {
        trick_completed: true,
        trick_winner: Some(winner_id),
        drew,
        phase_transitioned: None,
    };

    if let Some(game_winner) = detect_winner(state, target_score) {
        finish_game(state, game_winner);
        result.phase_transitioned = Some(Phase::Finished);
    }

    result
}

/// Winner draws first, then the loser. The face-up trump card is the last
/// card of the talon, so it goes to the loser of the trick that empties it.
fn draw_after_trick(state: &mut GameState, winner: Seat, loser: Seat) -> bool {
    if state.talon_closed || state.talon_size() < 2 {
        return false;
    }
    for seat in [winner, loser] {
        if let Some(card) = draw_one(state) {
            state.players[seat].hand.push(card);
        }
    }
    true
}

fn draw_one(state: &mut GameState) -> Option<Card> {
    if state.deck.is_empty() {
        state.trump_card.take()
    } else {
        Some(state.deck.remove(0))
    }
}
