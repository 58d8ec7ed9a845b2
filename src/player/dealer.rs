use crate::card::Card;
use crate::hand::{Hand, is_soft, score};

use super::{Move, Player};

/// The house rule: hit on 16 or less and on soft 17, stand otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DealerPolicy;

impl DealerPolicy {
    /// Returns whether the dealer must draw another card.
    #[must_use]
    pub fn must_hit(cards: &[Card]) -> bool {
        let total = score(cards);
        total <= 16 || (total == 17 && is_soft(cards))
    }
}

impl Player for DealerPolicy {
    fn bet(&mut self, _shuffled: bool) -> usize {
        1
    }

    fn play(&mut self, hand: &[Card], _dealer_up: Card) -> Move {
        if Self::must_hit(hand) {
            Move::Hit
        } else {
            Move::Stand
        }
    }

    fn results(&mut self, _hands: &[Hand], _dealer: &[Card]) {}
}
