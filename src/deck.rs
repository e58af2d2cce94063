//! A 52-card deck with random draw.

use alloc::vec::Vec;

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A deck of playing cards drawn from at random.
///
/// The deck starts with one card per suit and rank, ordered suit by suit
/// (clubs, spades, hearts, diamonds) and rank by rank (ace, 2 to 10, J, Q, K).
/// It is never shuffled; [`Deck::draw`] removes a uniformly random card
/// instead, so the remaining cards keep their original relative order.
///
/// # Example
///
/// ```
/// use playing_card::Deck;
///
/// let mut deck = Deck::with_seed(42);
/// assert_eq!(deck.remaining_count(), 52);
///
/// let card = deck.draw().unwrap();
/// assert_eq!(deck.remaining_count(), 51);
/// assert!(!deck.contains(&card));
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards left in the deck.
    cards: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full deck seeded from the operating system.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn new() -> Self {
        debug!("building deck with os-seeded rng");
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }

    /// Creates a full deck whose draws are determined by `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        debug!("building deck with seed {seed}");
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        let cards = Self::create_cards();
        debug!("deck holds {} cards", cards.len());
        Self { cards, rng }
    }

    /// Builds every suit and rank combination in deck-building order.
    fn create_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::all() {
            for rank in Rank::all() {
                cards.push(Card::new(suit, rank));
            }
        }

        cards
    }

    /// Removes and returns a uniformly random card.
    ///
    /// Returns `None` once the deck is empty; the deck is left unchanged.
    pub fn draw(&mut self) -> Option<Card> {
        let Some(index) = pick_index(&mut self.rng, self.cards.len()) else {
            trace!("draw from empty deck");
            return None;
        };

        let card = self.cards.remove(index);
        trace!(
            "drew {card} at index {index}, {} remaining",
            self.cards.len()
        );
        Some(card)
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether `card` is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the cards left in the deck, in deck-building order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(feature = "std")]
impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks an index in `0..len`, or `None` when `len` is zero.
fn pick_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Option<usize> {
    (len > 0).then(|| rng.random_range(0..len))
}
