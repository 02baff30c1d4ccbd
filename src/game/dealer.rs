use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::Hand;

use super::Strategy;

/// Value at which the dealer stops drawing, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

/// The house policy: draw below 17, stand on any 17 or higher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DealerStrategy;

impl Strategy for DealerStrategy {
    /// Dealer plays their hand according to the house rule.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty while the dealer must draw.
    fn play(&mut self, hand: &mut Hand, deck: &mut Deck) -> Result<Vec<Card>, DeckError> {
        let mut drawn_cards = Vec::new();

        while hand.value() < DEALER_STANDS_ON {
            let card = deck.draw()?;
            hand.add_card(card);
            drawn_cards.push(card);
            debug!(%card, value = hand.value(), "dealer draws");
        }

        debug!(
            value = hand.value(),
            soft = hand.is_soft(),
            bust = hand.is_busted(),
            "dealer stands"
        );
        Ok(drawn_cards)
    }
}
