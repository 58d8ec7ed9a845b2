//! Hand scoring and the player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Sums the hand with every Ace counted as 1.
#[must_use]
pub fn min_score(cards: &[Card]) -> u8 {
    cards
        .iter()
        .fold(0u8, |total, card| total.saturating_add(card.rank.value()))
}

/// Returns the best score for the hand.
///
/// At most one Ace is ever promoted to 11, and only when doing so does not
/// push the total past 21.
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    let min = min_score(cards);
    if min > 11 {
        return min;
    }

    if cards.iter().any(|card| card.rank == Rank::Ace) {
        min + 10
    } else {
        min
    }
}

/// Returns whether an Ace is currently being counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    score(cards) != min_score(cards)
}

/// Returns whether the cards form a natural: two cards scoring 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == 21
}

/// A player's hand together with the wager riding on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Wager for this hand.
    bet: usize,
}

impl Hand {
    /// Creates a new empty hand with the given wager.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            bet,
        }
    }

    /// Creates a hand from existing cards.
    #[must_use]
    pub fn with_cards(cards: Vec<Card>, bet: usize) -> Self {
        Self { cards, bet }
    }

    /// Creates the second hand of a split, holding a single card.
    #[must_use]
    pub fn from_split(card: Card, bet: usize) -> Self {
        Self {
            cards: alloc::vec![card],
            bet,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) const fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }

    /// Returns the wager for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Doubles the wager, saturating at `usize::MAX`.
    pub const fn double_bet(&mut self) {
        self.bet = self.bet.saturating_mul(2);
    }

    /// Returns the best score of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns the score with every Ace counted as 1.
    #[must_use]
    pub fn min_score(&self) -> u8 {
        min_score(&self.cards)
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is a natural blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand. Carries no wager.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    cards: Vec<Card>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) const fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }

    /// Returns the face-up card (the first card dealt).
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Returns the best score of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is a natural blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
