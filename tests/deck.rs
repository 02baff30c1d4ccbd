//! Deck integration tests.

use std::collections::HashSet;

use bjsolo::{Card, DECK_SIZE, Deck, DeckError, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn draw_all(deck: &mut Deck) -> Vec<Card> {
    let mut cards = Vec::new();
    while let Ok(card) = deck.draw() {
        cards.push(card);
    }
    cards
}

#[test]
fn gather_restores_every_card_once() {
    let mut deck = Deck::new();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    deck.shuffle(&mut rng);
    for _ in 0..20 {
        deck.draw().unwrap();
    }

    deck.gather();
    assert_eq!(deck.remaining(), DECK_SIZE);

    let cards = draw_all(&mut deck);
    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(unique.contains(&Card::new(rank, suit)));
        }
    }
}

#[test]
fn gather_uses_canonical_order() {
    let mut deck = Deck::new();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(1));
    deck.gather();

    assert_eq!(deck.draw().unwrap(), Card::new(Rank::Two, Suit::Clubs));
    assert_eq!(deck.draw().unwrap(), Card::new(Rank::Three, Suit::Clubs));
    assert_eq!(
        deck.undealt().last(),
        Some(&Card::new(Rank::Ace, Suit::Spades))
    );
}

#[test]
fn shuffle_then_draw_is_a_permutation() {
    for seed in 0..10 {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        let cards = draw_all(&mut deck);
        let unique: HashSet<Card> = cards.iter().copied().collect();
        assert_eq!(cards.len(), DECK_SIZE);
        assert_eq!(unique.len(), DECK_SIZE);
        assert!(deck.is_empty());
    }
}

#[test]
fn shuffle_is_reproducible_with_seed() {
    let mut first = Deck::new();
    let mut second = Deck::new();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
    assert_eq!(first.undealt(), second.undealt());

    let mut other = Deck::new();
    other.shuffle(&mut ChaCha8Rng::seed_from_u64(43));
    assert_ne!(first.undealt(), other.undealt());
}

#[test]
fn shuffle_leaves_dealt_cards_out() {
    let mut deck = Deck::new();
    let dealt: Vec<Card> = (0..5).map(|_| deck.draw().unwrap()).collect();

    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(9));
    assert_eq!(deck.remaining(), DECK_SIZE - 5);

    let rest = draw_all(&mut deck);
    assert_eq!(rest.len(), DECK_SIZE - 5);
    assert!(rest.iter().all(|card| !dealt.contains(card)));
}

#[test]
fn draw_from_empty_deck_always_fails() {
    let mut deck = Deck::new();
    draw_all(&mut deck);

    for _ in 0..3 {
        assert_eq!(deck.draw(), Err(DeckError::InsufficientCards));
        assert_eq!(deck.remaining(), 0);
    }
}

#[test]
fn stacked_deck_draws_in_given_order() {
    let cards = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Nine, Suit::Clubs),
    ];
    let mut deck = Deck::stacked(&cards);

    assert_eq!(deck.remaining(), 2);
    assert_eq!(deck.draw().unwrap(), cards[0]);
    assert_eq!(deck.draw().unwrap(), cards[1]);
    assert_eq!(deck.draw(), Err(DeckError::InsufficientCards));
}
