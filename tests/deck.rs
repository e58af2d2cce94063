//! Deck integration tests.

use std::collections::HashSet;

use playing_card::{Card, DECK_SIZE, Deck, Rank, RankError, Suit};

fn draw_all(deck: &mut Deck) -> Vec<Card> {
    let mut drawn = Vec::with_capacity(deck.remaining_count());
    while let Some(card) = deck.draw() {
        drawn.push(card);
    }
    drawn
}

#[test]
fn new_deck_holds_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.remaining_count(), 52);
    assert_eq!(DECK_SIZE, 52);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::all() {
        for rank in Rank::all() {
            assert!(deck.contains(&Card::new(suit, rank)), "{suit:?} {rank:?}");
        }
    }
}

#[test]
fn each_draw_removes_exactly_one_present_card() {
    let mut deck = Deck::with_seed(7);

    while !deck.is_empty() {
        let before = deck.remaining_count();
        let snapshot = deck.cards().to_vec();

        let card = deck.draw().unwrap();

        assert!(snapshot.contains(&card));
        assert!(!deck.contains(&card));
        assert_eq!(deck.remaining_count(), before - 1);
    }
}

#[test]
fn exhausting_the_deck_yields_distinct_cards() {
    let mut deck = Deck::with_seed(42);
    let drawn = draw_all(&mut deck);

    assert_eq!(drawn.len(), DECK_SIZE);
    let unique: HashSet<Card> = drawn.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    assert_eq!(deck.draw(), None);
    assert_eq!(deck.draw(), None);
    assert_eq!(deck.remaining_count(), 0);
}

#[test]
fn many_draws_over_varying_sizes_never_panic() {
    let mut draws = 0;
    let mut seed = 0;

    while draws < 10_000 {
        let mut deck = Deck::with_seed(seed);
        let keep = (seed as usize) % DECK_SIZE;

        while deck.remaining_count() > keep {
            assert!(deck.draw().is_some());
            draws += 1;
        }
        // Finish the deck, then draw past the end.
        draw_all(&mut deck);
        assert_eq!(deck.draw(), None);

        seed += 1;
    }
}

#[test]
fn same_seed_draws_same_sequence() {
    let first = draw_all(&mut Deck::with_seed(1234));
    let second = draw_all(&mut Deck::with_seed(1234));
    assert_eq!(first, second);

    let other = draw_all(&mut Deck::with_seed(4321));
    assert_ne!(first, other);
}

#[test]
fn draws_cover_the_whole_deck() {
    let mut firsts = HashSet::new();
    for seed in 0..2_000 {
        if let Some(card) = Deck::with_seed(seed).draw() {
            firsts.insert(card);
        }
    }
    assert_eq!(firsts.len(), DECK_SIZE);
}

#[test]
fn default_deck_is_full() {
    let deck = Deck::default();
    assert_eq!(deck.remaining_count(), DECK_SIZE);
}

#[test]
fn drawn_cards_project_to_order_and_symbol() {
    let mut deck = Deck::with_seed(3);
    let card = deck.draw().unwrap();

    assert!((1..=13).contains(&card.order()));
    assert_eq!(card.to_string(), format!("{}{}", card.suit.symbol(), card.rank));
}

#[test]
fn rank_construction_errors() {
    assert_eq!(Rank::face("X").unwrap_err(), RankError::InvalidFace);
    assert_eq!(Rank::numeric(0).unwrap_err(), RankError::InvalidPips);
    assert_eq!(Rank::try_from(14).unwrap_err(), RankError::InvalidOrder);
}
