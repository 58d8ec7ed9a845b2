//! Round state machine and session driver.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use tracing::info;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::shoe::{CardSource, ShuffledShoe};

mod actions;
mod bet;
mod dealer;
mod session;
pub mod state;

pub use bet::MAX_BET;
pub use state::GameState;

/// A blackjack session: the shoe, the running balance, and the state of the
/// round in progress.
///
/// All mutation goes through `&mut self`; a session owns exactly one game.
/// The shoe and balance persist across rounds while the hands are rebuilt
/// every deal.
#[derive(Debug)]
pub struct Game<S = ShuffledShoe> {
    /// Game options.
    options: GameOptions,
    /// Where fresh shoes come from.
    source: S,
    /// Cards in the shoe, dealt from the front.
    shoe: VecDeque<Card>,
    /// Current round state.
    state: GameState,
    /// Wager placed for the round being dealt.
    round_bet: Option<usize>,
    /// Player hands; grows on split.
    player: Vec<Hand>,
    /// Index of the acting player hand.
    hand_idx: usize,
    /// Dealer's hand.
    dealer: DealerHand,
    /// Running total across every settled round.
    balance: isize,
}

impl Game {
    /// Creates a game that shuffles its shoes with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Betting);
    /// assert_eq!(game.balance(), 0);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_source(options, ShuffledShoe::new(seed))
    }
}

impl<S: CardSource> Game<S> {
    /// Creates a game drawing its shoes from `source`.
    ///
    /// The shoe starts empty, so the first round always reshuffles.
    pub fn with_source(options: GameOptions, source: S) -> Self {
        Self {
            options,
            source,
            shoe: VecDeque::new(),
            state: GameState::Betting,
            round_bet: None,
            player: Vec::new(),
            hand_idx: 0,
            dealer: DealerHand::new(),
            balance: 0,
        }
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the running balance.
    pub const fn balance(&self) -> isize {
        self.balance
    }

    /// Returns the index of the acting player hand.
    pub const fn hand_index(&self) -> usize {
        self.hand_idx
    }

    /// Returns the player's hands for the current round.
    pub fn player_hands(&self) -> &[Hand] {
        &self.player
    }

    /// Returns the dealer's hand for the current round.
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Returns whether the shoe has run low enough to reshuffle.
    pub fn needs_reshuffle(&self) -> bool {
        if self.shoe.is_empty() {
            return true;
        }

        // Truncated to whole cards: one deck at a third reshuffles below 17.
        #[expect(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "card counts are small and the threshold is a fraction"
        )]
        let minimum = (self.options.shoe_size() as f64 * self.options.reshuffle_threshold) as usize;

        self.shoe.len() < minimum
    }

    /// Replaces the shoe with a freshly shuffled one.
    ///
    /// Only takes effect between rounds; returns `false` while a round is in
    /// progress.
    pub fn reshuffle(&mut self) -> bool {
        if self.state != GameState::Betting || !self.player.is_empty() {
            return false;
        }

        self.shoe = self.source.shuffled(self.options.decks).into();
        info!(cards = self.shoe.len(), "shoe reshuffled");
        true
    }

    /// Checks the reshuffle threshold and reshuffles if needed.
    ///
    /// Returns `true` if a reshuffle was performed.
    pub fn check_and_reshuffle(&mut self) -> bool {
        self.needs_reshuffle() && self.reshuffle()
    }

    /// Drops the round in progress without touching the balance, so the next
    /// round can be bet.
    fn abandon_round(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.hand_idx = 0;
        self.round_bet = None;
        self.state = GameState::Betting;
    }

    /// Draws a card from the front of the shoe.
    fn draw(&mut self) -> Option<Card> {
        self.shoe.pop_front()
    }

    /// Returns the cards of the hand that is currently acting.
    fn active_cards_mut(&mut self) -> Result<&mut Vec<Card>, ActionError> {
        match self.state {
            GameState::PlayerTurn => self
                .player
                .get_mut(self.hand_idx)
                .map(Hand::cards_mut)
                .ok_or(ActionError::InvalidState),
            GameState::DealerTurn => Ok(self.dealer.cards_mut()),
            GameState::Betting | GameState::HandOver => Err(ActionError::InvalidState),
        }
    }

    /// Returns the acting player hand, if it is the player's turn.
    pub fn active_hand(&self) -> Option<&Hand> {
        if self.state == GameState::PlayerTurn {
            self.player.get(self.hand_idx)
        } else {
            None
        }
    }
}
