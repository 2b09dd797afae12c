//! Core card-related types: Card, Rank, Suit

/// The four suits of the Austrian pattern. Suits have no ranking among
/// themselves; the derived `Ord` exists only for stable sorting.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Hearts,
    Bells,
    Leaves,
    Acorns,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Bells, Suit::Leaves, Suit::Acorns];

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Bells => "bells",
            Suit::Leaves => "leaves",
            Suit::Acorns => "acorns",
        }
    }
}

/// Ranks, declared strongest first. The derived `Ord` is for sorting only;
/// compare trick strength with [`Rank::strength`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Ace,
    Ten,
    King,
    Queen,
    Jack,
}

impl Rank {
    pub const ALL: [Rank; 5] = [Rank::Ace, Rank::Ten, Rank::King, Rank::Queen, Rank::Jack];

    /// Card points counted towards the 66.
    pub const fn points(self) -> u16 {
        match self {
            Rank::Ace => 11,
            Rank::Ten => 10,
            Rank::King => 4,
            Rank::Queen => 3,
            Rank::Jack => 2,
        }
    }

    /// Trick-taking strength; higher beats lower within a suit.
    pub const fn strength(self) -> u8 {
        match self {
            Rank::Ace => 4,
            Rank::Ten => 3,
            Rank::King => 2,
            Rank::Queen => 1,
            Rank::Jack => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "ace",
            Rank::Ten => "ten",
            Rank::King => "king",
            Rank::Queen => "queen",
            Rank::Jack => "jack",
        }
    }
}

/// A card of the 20-card deck. Suit and rank together are its identity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub const fn points(self) -> u16 {
        self.rank.points()
    }

    /// Stable identity string, e.g. `"hearts-ace"`.
    pub fn id(self) -> String {
        format!("{}-{}", self.suit.name(), self.rank.name())
    }
}

// Note: Ord on Card is only for stable sorting (suit, then strongest rank first).
// Do not use for trick resolution; see `cards_logic::lead_wins`.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
