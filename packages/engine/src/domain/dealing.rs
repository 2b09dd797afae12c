//! Deck construction, shuffling, and the opening deal.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::rules::{DECK_SIZE, HAND_SIZE};
use crate::domain::{Card, Rank, Suit};
use crate::errors::DomainError;

/// The 20-card deck in canonical order (suit-major).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// RNG used for dealing: seeded when a seed is configured, OS entropy otherwise.
pub fn dealing_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_os_rng(),
    }
}

/// Fisher-Yates shuffle: for i from the last index down to 1, swap i with a
/// uniformly chosen index in `0..=i`. Returns a new vector; `cards` is untouched.
pub fn shuffled<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut out = cards.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Result of the opening deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hands: [Vec<Card>; 2],
    /// Face-up card under the talon; its suit is trump.
    pub trump_card: Card,
    /// Face-down draw pile, front is drawn first.
    pub talon: Vec<Card>,
}

/// Deal from an already shuffled deck.
///
/// Alternating draw: positions 0,2,4,6,8 go to the first player and 1,3,5,7,9
/// to the second. The 11th card is turned face up as trump; the remaining 9
/// cards form the face-down talon.
pub fn deal_from(deck: &[Card]) -> Result<Deal, DomainError> {
    require_full_deck(deck)?;

    let dealt = 2 * HAND_SIZE;
    let mut hands: [Vec<Card>; 2] = Default::default();
    for (i, card) in deck[..dealt].iter().enumerate() {
        hands[i % 2].push(*card);
    }

    Ok(Deal {
        hands,
        trump_card: deck[dealt],
        talon: deck[dealt + 1..].to_vec(),
    })
}

/// Shuffle a fresh deck and deal it.
pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Result<Deal, DomainError> {
    let deck = shuffled(&full_deck(), rng);
    deal_from(&deck)
}

/// Check that `cards` is a permutation of the 20-card deck.
pub fn require_full_deck(cards: &[Card]) -> Result<(), DomainError> {
    if cards.len() != DECK_SIZE {
        return Err(DomainError::setup(format!(
            "expected {DECK_SIZE} cards, got {}",
            cards.len()
        )));
    }
    let mut sorted = cards.to_vec();
    sorted.sort();
    let mut canonical = full_deck();
    canonical.sort();
    if sorted != canonical {
        return Err(DomainError::setup(
            "cards are not a permutation of the 20-card deck",
        ));
    }
    Ok(())
}
