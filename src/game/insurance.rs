use tracing::{debug, warn};

use crate::result::Insurance;

use super::decision::DecisionSource;
use super::round::Round;

impl Round {
    /// Returns whether insurance is on offer (dealer's face-up card is an ace).
    #[must_use]
    pub fn offers_insurance(&self) -> bool {
        self.dealer()
            .visible_top_card()
            .is_some_and(|card| card.rank.is_ace())
    }

    /// Returns whether the dealer holds a natural blackjack.
    ///
    /// This is what an insurance bet is settled against.
    #[must_use]
    pub fn dealer_has_blackjack(&self) -> bool {
        self.dealer().is_blackjack()
    }

    /// Asks the player about insurance until a valid answer arrives.
    pub(super) fn ask_insurance<D: DecisionSource + ?Sized>(&self, source: &mut D) -> Insurance {
        let taken = loop {
            match source.take_insurance(self.player(), self.dealer()) {
                Some(answer) => break answer,
                None => warn!("unrecognized insurance answer, asking again"),
            }
        };

        debug!(taken, "insurance decision");
        if taken {
            Insurance::Taken
        } else {
            Insurance::Declined
        }
    }
}
