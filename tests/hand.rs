//! Hand scoring tests.

use bjsolo::{Card, Deck, Hand, Rank, Suit};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for &card in cards {
        hand.add_card(card);
    }
    hand
}

/// Tries every ace as 1 or 11 and picks the best total.
fn brute_force_value(cards: &[Card]) -> u32 {
    let base: u32 = cards.iter().map(|c| u32::from(c.value())).sum();
    let aces = cards.iter().filter(|c| c.rank == Rank::Ace).count() as u32;

    let totals: Vec<u32> = (0..=aces).map(|eleven| base + eleven * 10).collect();
    totals
        .iter()
        .copied()
        .filter(|&total| total <= 21)
        .max()
        .unwrap_or_else(|| totals.iter().copied().min().unwrap())
}

#[test]
fn value_matches_every_ace_interpretation() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for _ in 0..2000 {
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        let len = rng.random_range(1..=9);
        let cards: Vec<Card> = (0..len).map(|_| deck.draw().unwrap()).collect();

        let hand = hand_of(&cards);
        let expected = brute_force_value(&cards);
        assert_eq!(u32::from(hand.value()), expected, "cards: {cards:?}");
        assert_eq!(hand.is_busted(), expected > 21);
        assert_eq!(hand.is_blackjack(), cards.len() == 2 && expected == 21);
    }
}

#[test]
fn aces_degrade_one_at_a_time() {
    let two_aces = hand_of(&[card(Rank::Ace, Suit::Hearts), card(Rank::Ace, Suit::Spades)]);
    assert_eq!(two_aces.value(), 12);
    assert!(two_aces.is_soft());

    let soft_21 = hand_of(&[
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Spades),
        card(Rank::Nine, Suit::Clubs),
    ]);
    assert_eq!(soft_21.value(), 21);
    assert!(soft_21.is_soft());

    let hard = hand_of(&[
        card(Rank::Ace, Suit::Hearts),
        card(Rank::King, Suit::Spades),
        card(Rank::Five, Suit::Clubs),
    ]);
    assert_eq!(hard.value(), 16);
    assert!(!hard.is_soft());
}

#[test]
fn busted_hand_reports_minimum_total() {
    let hand = hand_of(&[
        card(Rank::King, Suit::Hearts),
        card(Rank::Queen, Suit::Spades),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Ace, Suit::Diamonds),
    ]);
    assert_eq!(hand.value(), 22);
    assert!(hand.is_busted());
}

#[test]
fn blackjack_requires_exactly_two_cards() {
    let natural = hand_of(&[card(Rank::Ten, Suit::Spades), card(Rank::Ace, Suit::Diamonds)]);
    assert!(natural.is_blackjack());

    let three_card_21 = hand_of(&[
        card(Rank::Seven, Suit::Spades),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Seven, Suit::Clubs),
    ]);
    assert_eq!(three_card_21.value(), 21);
    assert!(!three_card_21.is_blackjack());

    let mut hit_to_21 = hand_of(&[card(Rank::Five, Suit::Spades), card(Rank::Ace, Suit::Hearts)]);
    hit_to_21.add_card(card(Rank::Five, Suit::Clubs));
    assert_eq!(hit_to_21.value(), 21);
    assert!(!hit_to_21.is_blackjack());
}

#[test]
fn value_follows_added_cards() {
    let mut hand = Hand::new();
    assert_eq!(hand.value(), 0);
    assert!(hand.is_empty());

    hand.add_card(card(Rank::Ace, Suit::Spades));
    assert_eq!(hand.value(), 11);
    hand.add_card(card(Rank::Six, Suit::Hearts));
    assert_eq!(hand.value(), 17);
    hand.add_card(card(Rank::Nine, Suit::Clubs));
    assert_eq!(hand.value(), 16);
    assert_eq!(hand.len(), 3);
}

#[test]
fn visible_top_card_is_second_card() {
    let mut dealer = Hand::new();
    assert_eq!(dealer.visible_top_card(), None);

    dealer.add_card(card(Rank::King, Suit::Clubs));
    dealer.add_card(card(Rank::Ace, Suit::Hearts));
    assert_eq!(
        dealer.visible_top_card(),
        Some(&card(Rank::Ace, Suit::Hearts))
    );
}

#[test]
fn rendering_shows_cards_and_value() {
    let hand = hand_of(&[card(Rank::Ten, Suit::Spades), card(Rank::Ace, Suit::Diamonds)]);
    assert_eq!(hand.to_string(), "10♠ A♦ (21)");
    assert_eq!(hand.with_hole_hidden().to_string(), "?? A♦");
    assert_eq!(Hand::new().to_string(), "(empty)");
}
