//! Table configuration options.

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsolo::TableOptions;
///
/// let options = TableOptions::default()
///     .with_max_bet(25)
///     .with_blackjack_pays(1.2)
///     .with_insurance(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Whether insurance is offered when the dealer shows an ace.
    pub insurance: bool,
    /// Largest bet accepted for a single round.
    pub max_bet: usize,
    /// Money the player sits down with.
    pub starting_pot: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            insurance: true,
            max_bet: 10,
            starting_pot: 100,
        }
    }
}

impl TableOptions {
    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::TableOptions;
    ///
    /// let options = TableOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{RoundingMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets whether insurance is offered.
    #[must_use]
    pub const fn with_insurance(mut self, offered: bool) -> Self {
        self.insurance = offered;
        self
    }

    /// Sets the table limit for a single bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_bet(50);
    /// assert_eq!(options.max_bet, 50);
    /// ```
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: usize) -> Self {
        self.max_bet = max_bet;
        self
    }

    /// Sets the starting pot.
    #[must_use]
    pub const fn with_starting_pot(mut self, pot: usize) -> Self {
        self.starting_pot = pot;
        self
    }
}
