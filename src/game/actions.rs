use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{Hand, score};
use crate::player::Move;
use crate::shoe::CardSource;

use super::{Game, GameState};

impl<S: CardSource> Game<S> {
    /// Applies `mv` to the acting hand.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying move returns.
    pub fn apply(&mut self, mv: Move) -> Result<(), ActionError> {
        debug!(?mv, state = ?self.state, hand = self.hand_idx, "applying move");
        match mv {
            Move::Hit => self.hit().map(drop),
            Move::Stand => self.stand(),
            Move::Double => self.double_down().map(drop),
            Move::Split => self.split(),
        }
    }

    /// Draws one card into the acting hand.
    ///
    /// The acting hand is the player's current hand during
    /// [`GameState::PlayerTurn`] and the dealer's hand during
    /// [`GameState::DealerTurn`].
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Bust`] when the new card takes the hand over 21;
    /// the card is kept. Returns [`ActionError::InvalidState`] outside a turn
    /// and [`ActionError::NoCards`] if the shoe is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        // Validate the state before touching the shoe.
        self.active_cards_mut()?;
        let card = self.draw().ok_or(ActionError::NoCards)?;

        let cards = self.active_cards_mut()?;
        cards.push(card);

        if score(cards) > 21 {
            return Err(ActionError::Bust);
        }

        Ok(card)
    }

    /// Ends the acting hand's turn.
    ///
    /// During the player's turn this moves to the next hand, or to the
    /// dealer's turn once every hand has been played. During the dealer's
    /// turn it ends the round.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] outside a turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        match self.state {
            GameState::PlayerTurn => {
                self.hand_idx += 1;
                if self.hand_idx >= self.player.len() {
                    self.state = GameState::DealerTurn;
                }
                Ok(())
            }
            GameState::DealerTurn => {
                self.state = GameState::HandOver;
                Ok(())
            }
            GameState::Betting | GameState::HandOver => Err(ActionError::InvalidState),
        }
    }

    /// Splits a pair into two hands.
    ///
    /// The acting hand keeps its first card and a new hand holding the second
    /// card, with the same wager, is inserted right after it. Neither hand is
    /// dealt a replacement card.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] outside the player's turn,
    /// [`ActionError::SplitCardCount`] unless the hand has exactly two cards,
    /// and [`ActionError::SplitRankMismatch`] if the ranks differ.
    pub fn split(&mut self) -> Result<(), ActionError> {
        let hand = self.acting_player_hand()?;

        let &[first, second] = hand.cards() else {
            return Err(ActionError::SplitCardCount);
        };
        if first.rank != second.rank {
            return Err(ActionError::SplitRankMismatch);
        }

        let new_hand = Hand::from_split(second, hand.bet());
        hand.cards_mut().truncate(1);
        self.player.insert(self.hand_idx + 1, new_hand);

        Ok(())
    }

    /// Doubles the wager, draws exactly one card, then stands.
    ///
    /// The hand's turn ends even if the drawn card busts it.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] outside the player's turn,
    /// [`ActionError::CannotDouble`] unless the hand has exactly two cards
    /// (the wager is left untouched), and [`ActionError::NoCards`] if the shoe
    /// is empty.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        if self.acting_player_hand()?.len() != 2 {
            return Err(ActionError::CannotDouble);
        }
        if self.shoe.is_empty() {
            return Err(ActionError::NoCards);
        }

        self.acting_player_hand()?.double_bet();
        let card = match self.hit() {
            Ok(card) => card,
            Err(ActionError::Bust) => self
                .active_hand()
                .and_then(|hand| hand.cards().last().copied())
                .ok_or(ActionError::InvalidState)?,
            Err(err) => return Err(err),
        };
        self.stand()?;

        Ok(card)
    }

    fn acting_player_hand(&mut self) -> Result<&mut Hand, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        self.player
            .get_mut(self.hand_idx)
            .ok_or(ActionError::InvalidState)
    }
}
