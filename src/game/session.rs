use tracing::{debug, info, warn};

use crate::error::{ActionError, SessionError};
use crate::player::Player;
use crate::result::RoundResult;
use crate::shoe::CardSource;

use super::{Game, GameState};

impl<S: CardSource> Game<S> {
    /// Plays one full round with `player` making the decisions.
    ///
    /// The shoe is reshuffled first if it has run low. A dealer natural is
    /// settled straight away; otherwise the player acts until every hand has
    /// stood, then the dealer plays, then the round is settled and
    /// [`Player::results`] is called.
    ///
    /// A bust ends the acting hand's turn. Rejected doubles and splits are
    /// reported through [`Player::rejected`] and the player is asked again.
    ///
    /// # Errors
    ///
    /// Returns an error, abandoning the round, if the wager is out of range
    /// or the round cannot otherwise continue (for example the shoe runs
    /// dry). The game is back in [`GameState::Betting`] afterwards with the
    /// balance untouched.
    pub fn play_round<P: Player + ?Sized>(
        &mut self,
        player: &mut P,
    ) -> Result<RoundResult, SessionError> {
        let result = self.run_round(player);
        if let Err(err) = &result {
            warn!(%err, "round abandoned");
            self.abandon_round();
        }
        result
    }

    fn run_round<P: Player + ?Sized>(
        &mut self,
        player: &mut P,
    ) -> Result<RoundResult, SessionError> {
        let shuffled = self.check_and_reshuffle();
        let bet = player.bet(shuffled);
        self.place_bet(bet)?;
        self.deal()?;

        while self.state == GameState::PlayerTurn {
            let hand = self.active_hand().ok_or(ActionError::InvalidState)?;
            let up_card = self.dealer.up_card().ok_or(ActionError::InvalidState)?;
            let mv = player.play(hand.cards(), up_card);

            match self.apply(mv) {
                Ok(()) => {}
                Err(ActionError::Bust) => {
                    debug!(hand = self.hand_idx, "hand busted");
                    self.stand()?;
                }
                Err(err) if err.is_recoverable() => {
                    warn!(?mv, %err, "move rejected");
                    player.rejected(err);
                }
                Err(err) => return Err(err.into()),
            }
        }

        if self.state == GameState::DealerTurn {
            self.dealer_play()?;
        }

        let result = self.settle()?;
        player.results(&result.player_hands, result.dealer_hand.cards());
        Ok(result)
    }

    /// Plays [`GameOptions::rounds`](crate::GameOptions::rounds) rounds and
    /// returns the final balance.
    ///
    /// The session starts from a freshly shuffled shoe. The balance carries
    /// over from any earlier session on this game and may be negative.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error raised by [`Game::play_round`].
    pub fn play<P: Player + ?Sized>(&mut self, player: &mut P) -> Result<isize, SessionError> {
        self.shoe.clear();

        for round in 0..self.options.rounds {
            let result = self.play_round(player)?;
            debug!(round, net = result.net, "round complete");
        }

        info!(balance = self.balance, rounds = self.options.rounds, "session complete");
        Ok(self.balance)
    }
}
