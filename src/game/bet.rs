use crate::error::BetError;
use crate::options::{RoundingMode, TableOptions};
use crate::result::{Insurance, Outcome, RoundReport};

use super::Table;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Returns the insurance stake for a main bet (half the bet, rounded down).
#[must_use]
pub const fn insurance_stake(bet: usize) -> usize {
    bet / 2
}

/// Amounts returned to the player at the end of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Returned on the main bet, stake included.
    pub payout: usize,
    /// Returned on the insurance bet, stake included.
    pub insurance_payout: usize,
}

/// Settles a finished round.
///
/// A win pays 1:1, a winning natural pays `blackjack_pays` (rounded per
/// the options) and a push returns the bet. Insurance pays 2:1 when the
/// dealer holds a natural blackjack.
#[must_use]
pub fn settle(
    report: &RoundReport,
    bet: usize,
    insurance_bet: usize,
    options: &TableOptions,
) -> Settlement {
    let payout = match report.outcome {
        Outcome::DealerWins => 0,
        Outcome::Push => bet,
        Outcome::PlayerWins if report.player.is_blackjack() => {
            #[expect(
                clippy::cast_precision_loss,
                reason = "f64 has sufficient precision for monetary values"
            )]
            let winnings = (bet as f64) * options.blackjack_pays;
            bet + round_amount(winnings, options.rounding_blackjack)
        }
        Outcome::PlayerWins => bet * 2,
    };

    let insurance_payout = if report.insurance == Insurance::Taken && report.dealer.is_blackjack() {
        // Original stake + 2x winnings
        insurance_bet * 3
    } else {
        0
    };

    Settlement {
        payout,
        insurance_payout,
    }
}

impl Table {
    /// Checks a bet against the table limit and the pot.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is zero, above the table limit, or larger
    /// than the pot.
    pub const fn check_bet(&self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.options.max_bet {
            return Err(BetError::ExceedsLimit {
                max: self.options.max_bet,
            });
        }
        if amount > self.pot {
            return Err(BetError::InsufficientFunds);
        }
        Ok(())
    }

    /// Returns the largest bet currently accepted.
    #[must_use]
    pub fn max_bet(&self) -> usize {
        self.options.max_bet.min(self.pot)
    }

    /// Returns whether the pot can cover insurance on `bet` on top of the bet.
    pub(super) const fn can_insure(&self, bet: usize) -> bool {
        self.options.insurance && self.pot >= bet + insurance_stake(bet)
    }
}
