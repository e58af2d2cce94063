//! Card, suit and rank types.

use core::fmt;
use core::str::FromStr;

use crate::error::RankError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Spades, Self::Hearts, Self::Diamonds];

    /// Returns all suits in deck-building order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        Self::ALL
    }

    /// Returns the display symbol of the suit (glyph plus emoji variation selector).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Clubs => "\u{2663}\u{fe0f}",
            Self::Spades => "\u{2660}\u{fe0f}",
            Self::Hearts => "\u{2665}\u{fe0f}",
            Self::Diamonds => "\u{2666}\u{fe0f}",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Face card kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// Jack (`J`).
    Jack,
    /// Queen (`Q`).
    Queen,
    /// King (`K`).
    King,
}

impl Face {
    /// Parses a face symbol (`J`, `Q` or `K`).
    ///
    /// # Errors
    ///
    /// Returns [`RankError::InvalidFace`] for any other string.
    pub fn from_symbol(symbol: &str) -> Result<Self, RankError> {
        match symbol {
            "J" => Ok(Self::Jack),
            "Q" => Ok(Self::Queen),
            "K" => Ok(Self::King),
            _ => Err(RankError::InvalidFace),
        }
    }

    /// Returns the face symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

impl FromStr for Face {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

/// Pip count of a numeric card, always in `2..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pips(u8);

impl Pips {
    /// Creates a pip count.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::InvalidPips`] if `pips` is outside `2..=10`.
    pub const fn new(pips: u8) -> Result<Self, RankError> {
        if matches!(pips, 2..=10) {
            Ok(Self(pips))
        } else {
            Err(RankError::InvalidPips)
        }
    }

    /// Returns the pip count.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Card rank.
///
/// Payloads are validated on construction, so every value has an order in `1..=13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace (order 1).
    Ace,
    /// Face card (orders 11 to 13).
    Face(Face),
    /// Numeric card (orders 2 to 10).
    Numeric(Pips),
}

impl Rank {
    /// All ranks in deck-building order: ace, 2 through 10, then J, Q, K.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Numeric(Pips(2)),
        Self::Numeric(Pips(3)),
        Self::Numeric(Pips(4)),
        Self::Numeric(Pips(5)),
        Self::Numeric(Pips(6)),
        Self::Numeric(Pips(7)),
        Self::Numeric(Pips(8)),
        Self::Numeric(Pips(9)),
        Self::Numeric(Pips(10)),
        Self::Face(Face::Jack),
        Self::Face(Face::Queen),
        Self::Face(Face::King),
    ];

    /// Returns all ranks in deck-building order.
    #[must_use]
    pub const fn all() -> [Self; 13] {
        Self::ALL
    }

    /// Creates a numeric rank.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::InvalidPips`] if `pips` is outside `2..=10`.
    pub const fn numeric(pips: u8) -> Result<Self, RankError> {
        match Pips::new(pips) {
            Ok(pips) => Ok(Self::Numeric(pips)),
            Err(err) => Err(err),
        }
    }

    /// Creates a face rank from its symbol.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::InvalidFace`] unless `kind` is `J`, `Q` or `K`.
    pub fn face(kind: &str) -> Result<Self, RankError> {
        Face::from_symbol(kind).map(Self::Face)
    }

    /// Creates a rank from its order (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    ///
    /// # Errors
    ///
    /// Returns [`RankError::InvalidOrder`] if `order` is outside `1..=13`.
    pub const fn from_order(order: u8) -> Result<Self, RankError> {
        match order {
            1 => Ok(Self::Ace),
            2..=10 => Ok(Self::Numeric(Pips(order))),
            11 => Ok(Self::Face(Face::Jack)),
            12 => Ok(Self::Face(Face::Queen)),
            13 => Ok(Self::Face(Face::King)),
            _ => Err(RankError::InvalidOrder),
        }
    }

    /// Returns the rank order (1 = Ace, 2-10 = pips, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn order(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Numeric(pips) => pips.get(),
            Self::Face(Face::Jack) => 11,
            Self::Face(Face::Queen) => 12,
            Self::Face(Face::King) => 13,
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = RankError;

    fn try_from(order: u8) -> Result<Self, Self::Error> {
        Self::from_order(order)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ace => f.write_str("A"),
            Self::Numeric(pips) => write!(f, "{}", pips.get()),
            Self::Face(face) => f.write_str(face.symbol()),
        }
    }
}

/// A playing card.
///
/// Displays as the suit symbol followed by the rank, e.g. `♥️A` or `♣️9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the order of the card's rank.
    #[must_use]
    pub const fn order(&self) -> u8 {
        self.rank.order()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();
