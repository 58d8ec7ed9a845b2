//! Game state types.

/// Round state. Within a round it only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GameState {
    /// Accepting the wager for the next round.
    Betting,
    /// Waiting for player moves.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and is ready to settle.
    HandOver,
}
