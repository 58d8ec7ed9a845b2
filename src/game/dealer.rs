use alloc::vec::Vec;
use core::mem;

use tracing::info;

use crate::error::{ActionError, SettleError};
use crate::hand::Hand;
use crate::options::RoundingMode;
use crate::player::{DealerPolicy, Player};
use crate::result::{HandOutcome, HandResult, RoundResult};
use crate::shoe::CardSource;

use super::{Game, GameState};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

fn signed(amount: usize) -> isize {
    isize::try_from(amount).unwrap_or(isize::MAX)
}

impl<S: CardSource> Game<S> {
    /// Plays the dealer's hand under [`DealerPolicy`] until the round is over.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the shoe
    /// runs out while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<(), ActionError> {
        if self.state != GameState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        let mut policy = DealerPolicy;
        while self.state == GameState::DealerTurn {
            let up_card = self.dealer.up_card().ok_or(ActionError::InvalidState)?;
            let mv = policy.play(self.dealer.cards(), up_card);
            match self.apply(mv) {
                // A busted dealer stands on the next decision.
                Ok(()) | Err(ActionError::Bust) => {}
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }

    /// Scores one player hand against the dealer.
    fn settle_hand(&self, hand_index: usize, hand: &Hand) -> HandResult {
        let bet = hand.bet();
        let player_score = hand.score();
        let dealer_score = self.dealer.score();
        let player_blackjack = hand.is_blackjack();
        let dealer_blackjack = self.dealer.is_blackjack();

        let (outcome, net) = if player_blackjack && dealer_blackjack {
            (HandOutcome::Push, 0)
        } else if dealer_blackjack {
            (HandOutcome::Lose, -signed(bet))
        } else if player_blackjack {
            #[expect(
                clippy::cast_precision_loss,
                reason = "f64 has sufficient precision for monetary values"
            )]
            let winnings = (bet as f64) * self.options.blackjack_pays;
            let rounded = round_amount(winnings, self.options.rounding_blackjack);
            (HandOutcome::Blackjack, signed(rounded))
        } else if player_score > 21 {
            (HandOutcome::Lose, -signed(bet))
        } else if dealer_score > 21 || player_score > dealer_score {
            (HandOutcome::Win, signed(bet))
        } else if player_score < dealer_score {
            (HandOutcome::Lose, -signed(bet))
        } else {
            (HandOutcome::Push, 0)
        };

        HandResult {
            hand_index,
            outcome,
            bet,
            net,
            player_score,
            dealer_score,
        }
    }

    /// Settles every player hand against the dealer and updates the balance.
    ///
    /// Each hand is settled on its own, so split hands can win and lose in
    /// the same round. The settled hands are moved into the result and the
    /// game returns to [`GameState::Betting`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in hand-over state.
    pub fn settle(&mut self) -> Result<RoundResult, SettleError> {
        if self.state != GameState::HandOver {
            return Err(SettleError::InvalidState);
        }

        let hands: Vec<HandResult> = self
            .player
            .iter()
            .enumerate()
            .map(|(index, hand)| self.settle_hand(index, hand))
            .collect();
        let net = hands
            .iter()
            .fold(0_isize, |total, result| total.saturating_add(result.net));
        self.balance = self.balance.saturating_add(net);

        let result = RoundResult {
            hands,
            player_hands: mem::take(&mut self.player),
            dealer_score: self.dealer.score(),
            dealer_bust: self.dealer.is_bust(),
            dealer_blackjack: self.dealer.is_blackjack(),
            dealer_hand: mem::take(&mut self.dealer),
            net,
            balance: self.balance,
        };

        self.hand_idx = 0;
        self.round_bet = None;
        self.state = GameState::Betting;

        info!(
            net,
            balance = self.balance,
            hands = result.hands.len(),
            dealer_score = result.dealer_score,
            "round settled"
        );

        Ok(result)
    }
}
