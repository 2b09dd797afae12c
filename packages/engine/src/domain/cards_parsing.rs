//! Card parsing from compact tokens (e.g., "AH", "QB", "JA")
//!
//! Rank char first (`A T K Q J`), then suit char (`H` hearts, `B` bells,
//! `L` leaves, `A` acorns).

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::DomainError;

impl Rank {
    pub const fn to_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Ten => 'T',
            Rank::King => 'K',
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
        }
    }

    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'A' => Some(Rank::Ace),
            'T' => Some(Rank::Ten),
            'K' => Some(Rank::King),
            'Q' => Some(Rank::Queen),
            'J' => Some(Rank::Jack),
            _ => None,
        }
    }
}

impl Suit {
    pub const fn to_char(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Bells => 'B',
            Suit::Leaves => 'L',
            Suit::Acorns => 'A',
        }
    }

    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'H' => Some(Suit::Hearts),
            'B' => Some(Suit::Bells),
            'L' => Some(Suit::Leaves),
            'A' => Some(Suit::Acorns),
            _ => None,
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(DomainError::parse_card(s));
        };
        let rank = Rank::from_char(rank_ch).ok_or_else(|| DomainError::parse_card(s))?;
        let suit = Suit::from_char(suit_ch).ok_or_else(|| DomainError::parse_card(s))?;
        Ok(Card { suit, rank })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
