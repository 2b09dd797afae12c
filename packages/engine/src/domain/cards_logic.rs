//! Card game logic: trick comparison, points, and marriages

use super::cards_types::{Card, Rank, Suit};

pub const TRUMP_MARRIAGE_POINTS: u16 = 40;
pub const PLAIN_MARRIAGE_POINTS: u16 = 20;

pub fn is_trump(card: Card, trump: Suit) -> bool {
    card.suit == trump
}

/// Whether the lead card takes the trick against the follow card.
///
/// Same suit (trump or not): stronger rank wins. Exactly one trump: the trump
/// wins. Two different plain suits: the lead wins, since following suit is
/// not obligatory.
pub fn lead_wins(lead: Card, follow: Card, trump: Suit) -> bool {
    let lead_trump = is_trump(lead, trump);
    let follow_trump = is_trump(follow, trump);

    if lead_trump && !follow_trump {
        return true;
    }
    if follow_trump && !lead_trump {
        return false;
    }
    if lead.suit == follow.suit {
        return lead.rank.strength() > follow.rank.strength();
    }
    true
}

/// Sum of card points in a pile.
pub fn calculate_points(cards: &[Card]) -> u16 {
    cards.iter().map(|c| c.points()).sum()
}

pub fn hand_has_card(hand: &[Card], suit: Suit, rank: Rank) -> bool {
    hand.iter().any(|c| c.suit == suit && c.rank == rank)
}

/// True iff the hand holds both King and Queen of `suit`.
pub fn can_announce_marriage(hand: &[Card], suit: Suit) -> bool {
    hand_has_card(hand, suit, Rank::King) && hand_has_card(hand, suit, Rank::Queen)
}

pub fn marriage_points(suit: Suit, trump: Suit) -> u16 {
    if suit == trump {
        TRUMP_MARRIAGE_POINTS
    } else {
        PLAIN_MARRIAGE_POINTS
    }
}

/// Display order for a hand: trumps first, then the other suits by name,
/// strongest rank first within a suit.
pub fn sort_hand(cards: &mut [Card], trump: Suit) {
    cards.sort_by_key(|c| {
        (
            !is_trump(*c, trump),
            c.suit.name(),
            std::cmp::Reverse(c.rank.strength()),
        )
    });
}
