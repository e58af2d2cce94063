//! Draws ten cards from a fresh deck and prints them.
//!
//! Run with `RUST_LOG=trace` to see the deck's log output.

use playing_card::Deck;

fn main() {
    env_logger::init();

    let mut deck = Deck::new();

    for _ in 0..10 {
        if let Some(card) = deck.draw() {
            println!("{card}");
        }
    }

    println!("{} cards left", deck.remaining_count());
}
