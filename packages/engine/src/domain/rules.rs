pub const PLAYERS: usize = 2;
pub const DECK_SIZE: usize = 20;
pub const HAND_SIZE: usize = 5;
/// Card points in the whole deck.
pub const DECK_POINTS: u16 = 120;
pub const DEFAULT_TARGET_SCORE: u16 = 66;
/// Loser scores below this concede a Schneider.
pub const SCHNEIDER_THRESHOLD: u16 = 33;

/// Game points awarded to the winner, graded on the loser's score:
/// 3 (Schwarz) at 0, 2 (Schneider) below 33, otherwise 1.
pub fn game_points_for_loser(loser_score: u16) -> u8 {
    if loser_score == 0 {
        3
    } else if loser_score < SCHNEIDER_THRESHOLD {
        2
    } else {
        1
    }
}
