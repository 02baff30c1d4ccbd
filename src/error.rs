//! Error types for deck and round operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
///
/// A single deck always holds enough cards for one round, so running out is
/// an internal invariant violation rather than a game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No undealt cards are left in the deck.
    #[error("no cards left in the deck")]
    InsufficientCards,
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet amount is above the table limit.
    #[error("bet exceeds the table limit of {max}")]
    ExceedsLimit {
        /// The table limit.
        max: usize,
    },
    /// The pot cannot cover the bet.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur while playing a round at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The bet was rejected before any card was dealt.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The deck ran out mid-round.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
