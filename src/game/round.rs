use tracing::debug;

use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::Hand;
use crate::result::{Insurance, RoundReport, compare};

use super::Strategy;
use super::dealer::DealerStrategy;
use super::decision::DecisionSource;
use super::player::PlayerStrategy;
use super::state::RoundPhase;

/// One round of play between the player and the dealer.
///
/// A round is dealt from a deck with [`Round::deal`] and then driven to the
/// end with [`Round::play`]. Hands never outlive the round.
#[derive(Debug, Clone)]
pub struct Round {
    player: Hand,
    dealer: Hand,
    phase: RoundPhase,
}

impl Round {
    /// Deals two cards each, alternating player and dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out while dealing.
    pub fn deal(deck: &mut Deck) -> Result<Self, DeckError> {
        let mut player = Hand::new();
        let mut dealer = Hand::new();

        for _ in 0..2 {
            player.add_card(deck.draw()?);
            dealer.add_card(deck.draw()?);
        }

        let mut round = Self {
            player,
            dealer,
            phase: RoundPhase::Dealing,
        };
        round.phase = if round.offers_insurance() {
            RoundPhase::Insurance
        } else {
            RoundPhase::PlayerTurn
        };

        debug!(
            player = %round.player,
            dealer = %round.dealer.with_hole_hidden(),
            phase = ?round.phase,
            "dealt"
        );
        Ok(round)
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Plays the round to completion.
    ///
    /// When `insurance_offered` is set and the dealer shows an ace, the
    /// player is asked about insurance first. Buying insurance against a
    /// dealer blackjack ends the round there. Otherwise the player plays,
    /// then the dealer plays unless the player busted.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out mid-round.
    pub fn play<D: DecisionSource + ?Sized>(
        mut self,
        deck: &mut Deck,
        source: &mut D,
        insurance_offered: bool,
    ) -> Result<RoundReport, DeckError> {
        let insurance = if insurance_offered && self.phase == RoundPhase::Insurance {
            self.ask_insurance(source)
        } else {
            Insurance::NotOffered
        };

        if insurance == Insurance::Taken && self.dealer_has_blackjack() {
            debug!(dealer = %self.dealer, "dealer blackjack at insurance check");
            self.phase = RoundPhase::RoundOver;
            return Ok(self.finish(insurance, true));
        }

        self.phase = RoundPhase::PlayerTurn;
        PlayerStrategy::new(source, &self.dealer).play(&mut self.player, deck)?;

        if !self.player.is_busted() {
            self.phase = RoundPhase::DealerTurn;
            DealerStrategy.play(&mut self.dealer, deck)?;
        }

        self.phase = RoundPhase::RoundOver;
        Ok(self.finish(insurance, false))
    }

    fn finish(self, insurance: Insurance, ended_early: bool) -> RoundReport {
        let outcome = compare(&self.player, &self.dealer);
        debug!(
            player = %self.player,
            dealer = %self.dealer,
            ?outcome,
            "round over"
        );
        RoundReport {
            player: self.player,
            dealer: self.dealer,
            outcome,
            insurance,
            ended_early,
        }
    }
}
