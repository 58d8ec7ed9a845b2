use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::error::{BetError, DealError};
use crate::hand::Hand;
use crate::shoe::CardSource;

use super::{Game, GameState};

/// Largest wager [`Game::place_bet`] accepts: doubled, it still fits in the
/// signed balance.
pub const MAX_BET: usize = isize::MAX.unsigned_abs() / 2;

impl<S: CardSource> Game<S> {
    /// Places the wager for the next round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state or the wager is
    /// below the configured minimum or above [`MAX_BET`]. The wager is never
    /// clamped.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        if amount < self.options.min_bet {
            return Err(BetError::BelowMinimum {
                bet: amount,
                minimum: self.options.min_bet,
            });
        }

        if amount > MAX_BET {
            return Err(BetError::TooLarge {
                bet: amount,
                maximum: MAX_BET,
            });
        }

        self.round_bet = Some(amount);
        Ok(())
    }

    /// Deals two cards each to a fresh player hand and the dealer.
    ///
    /// Cards alternate player, dealer, player, dealer; the dealer's first card
    /// is the up card. A dealer natural moves the round straight to
    /// [`GameState::HandOver`], otherwise the player's turn begins.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, no wager has been
    /// placed, or fewer than four cards remain in the shoe.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Betting {
            return Err(DealError::InvalidState);
        }

        let bet = self.round_bet.ok_or(DealError::NoBet)?;

        if self.cards_remaining() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        let mut player_cards: Vec<Card> = Vec::with_capacity(5);
        self.dealer.clear();
        for _ in 0..2 {
            let (Some(to_player), Some(to_dealer)) = (self.draw(), self.draw()) else {
                return Err(DealError::NotEnoughCards);
            };
            player_cards.push(to_player);
            self.dealer.add_card(to_dealer);
        }

        self.player = alloc::vec![Hand::with_cards(player_cards, bet)];
        self.hand_idx = 0;
        self.round_bet = None;

        self.state = if self.dealer.is_blackjack() {
            GameState::HandOver
        } else {
            GameState::PlayerTurn
        };

        debug!(
            bet,
            player_score = self.player[0].score(),
            up_card = ?self.dealer.up_card(),
            dealer_blackjack = self.dealer.is_blackjack(),
            "dealt"
        );

        Ok(())
    }
}
