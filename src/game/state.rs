//! Round and turn state types.

/// Phase of a round in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Initial cards are being dealt.
    Dealing,
    /// Waiting on the insurance decision.
    Insurance,
    /// Player is hitting or standing.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Both hands are final and can be compared.
    RoundOver,
}

/// State of the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for a hit or stand decision.
    AwaitingDecision,
    /// Player asked for another card.
    Hit,
    /// Player has stood.
    Stand,
    /// Hand has busted (over 21).
    Busted,
}

impl TurnState {
    /// Returns whether the turn is over.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Stand | Self::Busted)
    }
}
