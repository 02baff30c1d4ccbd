//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest total a hand can reach without busting.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
            value = value.saturating_add(11);
        } else {
            value = value.saturating_add(card.value());
        }
    }

    // Each demotion trades an 11 for a 1.
    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// A hand of cards held by the player or the dealer.
///
/// The value is always derived from the cards, so it cannot fall out of sync
/// with them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    /// When every interpretation busts, the lowest total is returned.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the dealer's face-up card.
    ///
    /// The first card dealt is the hole card, so the second one is shown.
    #[must_use]
    pub fn visible_top_card(&self) -> Option<&Card> {
        self.cards.get(1)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns a view that renders the hand with the hole card face down.
    #[must_use]
    pub const fn with_hole_hidden(&self) -> HoleHidden<'_> {
        HoleHidden(self)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("(empty)");
        }
        for card in &self.cards {
            write!(f, "{card} ")?;
        }
        write!(f, "({})", self.value())
    }
}

/// Renders a dealer hand while the hole card is still face down.
#[derive(Debug, Clone, Copy)]
pub struct HoleHidden<'a>(&'a Hand);

impl fmt::Display for HoleHidden<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cards = self.0.cards.iter();
        if cards.next().is_none() {
            return f.write_str("(empty)");
        }
        f.write_str("??")?;
        for card in cards {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}
