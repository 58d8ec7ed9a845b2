//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Wager is below the table minimum.
    #[error("bet of {bet} is below the table minimum of {minimum}")]
    BelowMinimum {
        /// The rejected wager.
        bet: usize,
        /// The configured minimum.
        minimum: usize,
    },
    /// Wager could not be doubled without overflowing the balance.
    #[error("bet of {bet} is above the table maximum of {maximum}")]
    TooLarge {
        /// The rejected wager.
        bet: usize,
        /// The largest accepted wager.
        maximum: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No wager has been placed for this round.
    #[error("no wager has been placed")]
    NoBet,
    /// Not enough cards in the shoe.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
}

/// Errors that can occur while applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round is not in a turn-taking state.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The hit pushed the hand over 21. The drawn card stays in the hand.
    #[error("hand score exceeded 21")]
    Bust,
    /// Doubling requires exactly two cards.
    #[error("can only double on a hand with 2 cards")]
    CannotDouble,
    /// Splitting requires exactly two cards.
    #[error("can only split a hand with 2 cards")]
    SplitCardCount,
    /// Splitting requires both cards to share a rank.
    #[error("both cards must have the same rank to split")]
    SplitRankMismatch,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

impl ActionError {
    /// Returns whether the acting player may simply choose another move.
    #[must_use]
    pub const fn is_recoverable(self) -> bool {
        matches!(
            self,
            Self::CannotDouble | Self::SplitCardCount | Self::SplitRankMismatch
        )
    }
}

/// Errors that can occur during settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// Invalid game state for settlement.
    #[error("invalid game state for settlement")]
    InvalidState,
}

/// Fatal errors that abort a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Betting failed.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A move could not be applied.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Settlement failed.
    #[error(transparent)]
    Settle(#[from] SettleError),
}
