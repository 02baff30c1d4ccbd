//! The single-deck card supply.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// An ordered supply of cards with a dealt boundary.
///
/// Cards before the boundary have been dealt; cards after it are still in the
/// deck and are drawn from the front.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    dealt: usize,
}

impl Deck {
    /// Creates a full deck in canonical order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: full_deck(),
            dealt: 0,
        }
    }

    /// Creates a deck that deals exactly `cards`, front first.
    ///
    /// Intended for replaying known sequences. At most [`DECK_SIZE`] cards are
    /// kept.
    #[must_use]
    pub fn stacked(cards: &[Card]) -> Self {
        let len = cards.len().min(DECK_SIZE);
        Self {
            cards: cards[..len].to_vec(),
            dealt: 0,
        }
    }

    /// Returns every card to the deck in canonical order.
    pub fn gather(&mut self) {
        self.cards = full_deck();
        self.dealt = 0;
    }

    /// Shuffles the undealt cards using the given random source.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards[self.dealt..].shuffle(rng);
    }

    /// Draws the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] if every card has been dealt.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let card = *self
            .cards
            .get(self.dealt)
            .ok_or(DeckError::InsufficientCards)?;
        self.dealt += 1;
        Ok(card)
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.dealt
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the undealt cards in draw order.
    #[must_use]
    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.dealt..]
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
