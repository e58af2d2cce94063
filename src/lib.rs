//! A playing-card model and a 52-card deck, with optional `no_std` support.
//!
//! The crate provides [`Card`] values built from a [`Suit`] and a validated
//! [`Rank`], and a [`Deck`] that hands out uniformly random cards until it
//! runs out.
//!
//! # Example
//!
//! ```
//! use playing_card::{Card, Deck, Rank, Suit};
//!
//! let mut deck = Deck::with_seed(42);
//! while let Some(card) = deck.draw() {
//!     let _ = (card.order(), card.suit.symbol());
//! }
//! assert!(deck.is_empty());
//!
//! let card = Card::new(Suit::Hearts, Rank::Ace);
//! assert_eq!(card.to_string(), "\u{2665}\u{fe0f}A");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, Pips, Rank, Suit};
pub use deck::Deck;
pub use error::RankError;
