//! Score derivation, game-end detection, and the final result.

use serde::{Deserialize, Serialize};

use super::cards_logic::calculate_points;
use super::rules::game_points_for_loser;
use super::state::{other_seat, GameState, Phase, Player, PlayerId, Seat};

/// `points(tricks) + announcements`. The only definition of a player's score.
pub fn recompute_score(player: &Player) -> u16 {
    calculate_points(&player.tricks).saturating_add(player.announcements)
}

/// Refresh both players' stored scores from their piles.
pub fn refresh_scores(state: &mut GameState) {
    for p in state.players.iter_mut() {
        p.score = recompute_score(p);
    }
}

/// Final outcome, available once the game is finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub winner_score: u16,
    pub loser_score: u16,
    /// 1 (plain), 2 (Schneider), or 3 (Schwarz).
    pub game_points: u8,
}

/// Who, if anyone, has won after a trick resolved.
///
/// Reaching `target_score` wins at once, checking seat 0 first. Otherwise,
/// once both hands are empty the higher score wins; equal scores go to the
/// winner of the final trick.
pub fn detect_winner(state: &GameState, target_score: u16) -> Option<Seat> {
    if let Some(seat) = state
        .players
        .iter()
        .position(|p| p.score >= target_score)
    {
        return Some(seat);
    }

    if state.players.iter().all(|p| p.hand.is_empty()) {
        let [first, second] = &state.players;
        let seat = match first.score.cmp(&second.score) {
            std::cmp::Ordering::Greater => 0,
            std::cmp::Ordering::Less => 1,
            std::cmp::Ordering::Equal => last_trick_winner(state).unwrap_or(0),
        };
        return Some(seat);
    }

    None
}

fn last_trick_winner(state: &GameState) -> Option<Seat> {
    state
        .trick_history
        .last()
        .and_then(|t| t.winner.as_ref())
        .and_then(|id| state.seat_of(id))
}

/// Mark the game finished with `winner` and grade the win by the loser's score.
pub fn finish_game(state: &mut GameState, winner: Seat) {
    let loser_score = state.players[other_seat(winner)].score;
    state.phase = Phase::Finished;
    state.winner_id = Some(state.players[winner].id.clone());
    state.winner_points = game_points_for_loser(loser_score);
}

pub fn game_result(state: &GameState) -> Option<GameResult> {
    if state.phase != Phase::Finished {
        return None;
    }
    let winner_id = state.winner_id.as_ref()?;
    let winner = state.player(winner_id)?;
    let loser = state.opponent(winner_id)?;
    Some(GameResult {
        winner_id: winner.id.clone(),
        loser_id: loser.id.clone(),
        winner_score: winner.score,
        loser_score: loser.score,
        game_points: state.winner_points,
    })
}
