//! Round flow, strategies and the table session.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DeckError, RoundError};
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::result::{Insurance, RoundResult};

mod bet;
mod dealer;
mod decision;
mod insurance;
mod player;
mod round;
pub mod state;

pub use bet::{Settlement, insurance_stake, settle};
pub use dealer::{DEALER_STANDS_ON, DealerStrategy};
pub use decision::{DecisionSource, Move, parse_yes_no};
pub use player::PlayerStrategy;
pub use round::Round;
pub use state::{RoundPhase, TurnState};

/// Turn-taking policy for one side of the table.
///
/// Both sides share the same [`Hand`]; only the decision to draw differs.
pub trait Strategy {
    /// Draws into `hand` until the policy stands or the hand busts.
    ///
    /// Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out.
    fn play(&mut self, hand: &mut Hand, deck: &mut Deck) -> Result<Vec<Card>, DeckError>;
}

/// A single-player blackjack table.
///
/// The table owns the deck, the random source and the player's pot. Each call
/// to [`Table::play_round`] gathers and shuffles the deck, plays one round and
/// settles it.
#[derive(Debug, Clone)]
pub struct Table {
    deck: Deck,
    /// Table options.
    pub options: TableOptions,
    pot: usize,
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a new table with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bjsolo::{Table, TableOptions};
    ///
    /// let options = TableOptions::default();
    /// let table = Table::new(options, 42);
    /// let _ = table;
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let pot = options.starting_pot;
        Self {
            deck: Deck::new(),
            options,
            pot,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the player's current pot.
    #[must_use]
    pub const fn pot(&self) -> usize {
        self.pot
    }

    /// Returns whether the player has no money left.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.pot == 0
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Plays one full round for `bet`.
    ///
    /// The deck is gathered and shuffled, the round is dealt and played with
    /// `source` making the player's decisions, and the pot is settled.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Bet`] if the bet is rejected (no cards are dealt
    /// and the pot is unchanged), or [`RoundError::Deck`] if the deck runs
    /// out, which a single round never legitimately does.
    pub fn play_round<D: DecisionSource + ?Sized>(
        &mut self,
        bet: usize,
        source: &mut D,
    ) -> Result<RoundResult, RoundError> {
        self.check_bet(bet)?;

        self.deck.gather();
        self.deck.shuffle(&mut self.rng);

        let insurance_offered = self.can_insure(bet);
        let round = Round::deal(&mut self.deck)?;
        let report = round.play(&mut self.deck, source, insurance_offered)?;

        let insurance_bet = if report.insurance == Insurance::Taken {
            insurance_stake(bet)
        } else {
            0
        };
        let settlement = settle(&report, bet, insurance_bet, &self.options);

        self.pot = self.pot - bet - insurance_bet + settlement.payout + settlement.insurance_payout;

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = (settlement.payout + settlement.insurance_payout) as isize
            - (bet + insurance_bet) as isize;

        info!(
            bet,
            outcome = ?report.outcome,
            net,
            pot = self.pot,
            "round settled"
        );

        Ok(RoundResult {
            report,
            bet,
            payout: settlement.payout,
            insurance_bet,
            insurance_payout: settlement.insurance_payout,
            net,
            pot: self.pot,
        })
    }
}
