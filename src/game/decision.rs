//! External decisions and input parsing.

use crate::hand::Hand;

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl Move {
    /// Parses a hit/stand response.
    ///
    /// Accepts `h`, `hit`, `s` and `stand` in any case, ignoring surrounding
    /// whitespace. Anything else is malformed and yields `None`.
    ///
    /// ```
    /// use bjsolo::Move;
    ///
    /// assert_eq!(Move::parse(" Hit\n"), Some(Move::Hit));
    /// assert_eq!(Move::parse("s"), Some(Move::Stand));
    /// assert_eq!(Move::parse("double"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("h") || input.eq_ignore_ascii_case("hit") {
            Some(Self::Hit)
        } else if input.eq_ignore_ascii_case("s") || input.eq_ignore_ascii_case("stand") {
            Some(Self::Stand)
        } else {
            None
        }
    }
}

/// Parses a yes/no response (`y`, `yes`, `n`, `no`, any case).
#[must_use]
pub fn parse_yes_no(input: &str) -> Option<bool> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("y") || input.eq_ignore_ascii_case("yes") {
        Some(true)
    } else if input.eq_ignore_ascii_case("n") || input.eq_ignore_ascii_case("no") {
        Some(false)
    } else {
        None
    }
}

/// Source of the human player's decisions.
///
/// Calls block until a response is available. Returning `None` means the
/// response was malformed; the caller asks again without changing any state.
pub trait DecisionSource {
    /// Asks whether to hit or stand on `hand` while the dealer shows `dealer`.
    fn next_move(&mut self, hand: &Hand, dealer: &Hand) -> Option<Move>;

    /// Asks whether to buy insurance against a dealer blackjack.
    fn take_insurance(&mut self, hand: &Hand, dealer: &Hand) -> Option<bool>;
}

impl<D: DecisionSource + ?Sized> DecisionSource for &mut D {
    fn next_move(&mut self, hand: &Hand, dealer: &Hand) -> Option<Move> {
        (**self).next_move(hand, dealer)
    }

    fn take_insurance(&mut self, hand: &Hand, dealer: &Hand) -> Option<bool> {
        (**self).take_insurance(hand, dealer)
    }
}
