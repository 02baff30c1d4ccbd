//! Round outcome types and the hand comparator.

use crate::hand::Hand;

/// Result of comparing the player's finished hand against the dealer's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts, player has the higher value, or a lone natural).
    PlayerWins,
    /// Dealer wins (player busts, dealer has the higher value, or a lone natural).
    DealerWins,
    /// Push (tie).
    Push,
}

/// Compares two finished hands.
///
/// A player bust loses even if the dealer also busted. A natural blackjack
/// beats any other hand, including a 21 made with three or more cards.
///
/// # Example
///
/// ```
/// use bjsolo::{Card, Hand, Outcome, Rank, Suit, compare};
///
/// let mut player = Hand::new();
/// player.add_card(Card::new(Rank::Ten, Suit::Spades));
/// player.add_card(Card::new(Rank::Ace, Suit::Diamonds));
///
/// let mut dealer = Hand::new();
/// dealer.add_card(Card::new(Rank::Nine, Suit::Clubs));
/// dealer.add_card(Card::new(Rank::Eight, Suit::Hearts));
///
/// assert_eq!(compare(&player, &dealer), Outcome::PlayerWins);
/// ```
#[must_use]
pub fn compare(player: &Hand, dealer: &Hand) -> Outcome {
    if player.is_busted() {
        return Outcome::DealerWins;
    }
    if dealer.is_busted() {
        return Outcome::PlayerWins;
    }

    match (player.is_blackjack(), dealer.is_blackjack()) {
        (true, true) => Outcome::Push,
        (true, false) => Outcome::PlayerWins,
        (false, true) => Outcome::DealerWins,
        (false, false) => match player.value().cmp(&dealer.value()) {
            core::cmp::Ordering::Greater => Outcome::PlayerWins,
            core::cmp::Ordering::Less => Outcome::DealerWins,
            core::cmp::Ordering::Equal => Outcome::Push,
        },
    }
}

/// What happened with the insurance side bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insurance {
    /// Dealer was not showing an ace, or the table did not offer it.
    NotOffered,
    /// Player turned insurance down.
    Declined,
    /// Player bought insurance.
    Taken,
}

/// The finished hands of a round and how they compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// The player's final hand.
    pub player: Hand,
    /// The dealer's final hand.
    pub dealer: Hand,
    /// Comparison of the two hands.
    pub outcome: Outcome,
    /// The insurance decision for this round.
    pub insurance: Insurance,
    /// Whether the round ended at the insurance checkpoint because the
    /// dealer held a natural blackjack.
    pub ended_early: bool,
}

/// A settled round at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The hands and outcome.
    pub report: RoundReport,
    /// The main bet.
    pub bet: usize,
    /// Amount returned on the main bet (stake included, 0 on a loss).
    pub payout: usize,
    /// Insurance bet amount (0 if no insurance taken).
    pub insurance_bet: usize,
    /// Insurance payout (0 if dealer didn't have blackjack or no insurance taken).
    pub insurance_payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The pot after settlement.
    pub pot: usize,
}
