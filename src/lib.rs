//! A single-deck blackjack engine with optional `no_std` support.
//!
//! The crate provides the rules core (a [`Deck`], [`Hand`] scoring, the
//! [`DealerStrategy`] and [`PlayerStrategy`] turn policies and the
//! [`compare`] function) and a [`Table`] that plays and settles whole rounds
//! for one player against the dealer.
//!
//! # Example
//!
//! ```no_run
//! use bjsolo::{DecisionSource, Hand, Move, Table, TableOptions};
//!
//! struct StandOnSeventeen;
//!
//! impl DecisionSource for StandOnSeventeen {
//!     fn next_move(&mut self, hand: &Hand, _dealer: &Hand) -> Option<Move> {
//!         Some(if hand.value() < 17 { Move::Hit } else { Move::Stand })
//!     }
//!
//!     fn take_insurance(&mut self, _hand: &Hand, _dealer: &Hand) -> Option<bool> {
//!         Some(false)
//!     }
//! }
//!
//! let mut table = Table::new(TableOptions::default(), 42);
//! let result = table.play_round(10, &mut StandOnSeventeen).unwrap();
//! println!("{:?}, pot is now {}", result.report.outcome, result.pot);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{BetError, DeckError, RoundError};
pub use game::{
    DEALER_STANDS_ON, DealerStrategy, DecisionSource, Move, PlayerStrategy, Round, RoundPhase,
    Settlement, Strategy, Table, TurnState, insurance_stake, parse_yes_no, settle,
};
pub use hand::{BLACKJACK, Hand, HoleHidden};
pub use options::{RoundingMode, TableOptions};
pub use result::{Insurance, Outcome, RoundReport, RoundResult, compare};
