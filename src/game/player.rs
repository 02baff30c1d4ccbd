use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::Hand;

use super::Strategy;
use super::decision::{DecisionSource, Move};
use super::state::TurnState;

/// Plays the human's hand by asking a [`DecisionSource`] before every card.
pub struct PlayerStrategy<'a, D: DecisionSource + ?Sized> {
    source: &'a mut D,
    dealer: &'a Hand,
    state: TurnState,
}

impl<'a, D: DecisionSource + ?Sized> PlayerStrategy<'a, D> {
    /// Creates a strategy that consults `source`, showing it `dealer`.
    pub const fn new(source: &'a mut D, dealer: &'a Hand) -> Self {
        Self {
            source,
            dealer,
            state: TurnState::AwaitingDecision,
        }
    }

    /// Returns the current turn state.
    #[must_use]
    pub const fn state(&self) -> TurnState {
        self.state
    }
}

impl<D: DecisionSource + ?Sized> Strategy for PlayerStrategy<'_, D> {
    /// Runs the turn until the player stands or busts.
    ///
    /// A natural blackjack stands without asking. Malformed responses are
    /// retried without drawing.
    ///
    /// Returns the cards drawn by the player.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty when the player hits.
    fn play(&mut self, hand: &mut Hand, deck: &mut Deck) -> Result<Vec<Card>, DeckError> {
        let mut drawn_cards = Vec::new();

        self.state = if hand.is_busted() {
            TurnState::Busted
        } else if hand.is_blackjack() {
            TurnState::Stand
        } else {
            TurnState::AwaitingDecision
        };

        while !self.state.is_finished() {
            match self.state {
                TurnState::AwaitingDecision => match self.source.next_move(hand, self.dealer) {
                    Some(Move::Hit) => self.state = TurnState::Hit,
                    Some(Move::Stand) => self.state = TurnState::Stand,
                    None => warn!("unrecognized decision, asking again"),
                },
                TurnState::Hit => {
                    let card = deck.draw()?;
                    hand.add_card(card);
                    drawn_cards.push(card);
                    debug!(%card, value = hand.value(), "player hits");

                    self.state = if hand.is_busted() {
                        TurnState::Busted
                    } else {
                        TurnState::AwaitingDecision
                    };
                }
                TurnState::Stand | TurnState::Busted => {}
            }
        }

        debug!(state = ?self.state, value = hand.value(), "player turn over");
        Ok(drawn_cards)
    }
}
