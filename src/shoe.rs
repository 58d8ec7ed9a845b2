//! Card supply: building, shuffling, and replaying shoes.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A supplier of freshly shuffled shoes.
///
/// The game asks its source for a new shoe whenever the remaining cards drop
/// below the reshuffle threshold. Cards are dealt from the front of the
/// returned vector.
pub trait CardSource {
    /// Returns a shuffled shoe made of `decks` standard decks.
    fn shuffled(&mut self, decks: u8) -> Vec<Card>;
}

/// Builds an unshuffled shoe of `decks` standard 52-card decks.
#[must_use]
pub fn standard_shoe(decks: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

    for _ in 0..decks {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
    }

    cards
}

/// Shuffles standard decks with a seeded `ChaCha8` generator.
#[derive(Debug, Clone)]
pub struct ShuffledShoe {
    rng: ChaCha8Rng,
}

impl ShuffledShoe {
    /// Creates a shuffler with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl CardSource for ShuffledShoe {
    fn shuffled(&mut self, decks: u8) -> Vec<Card> {
        let mut cards = standard_shoe(decks);
        cards.shuffle(&mut self.rng);
        cards
    }
}

/// Replays predetermined stacks of cards, one per reshuffle.
///
/// Once every stack has been handed out, further reshuffles produce an empty
/// shoe.
#[derive(Debug, Clone, Default)]
pub struct StackedShoe {
    stacks: VecDeque<Vec<Card>>,
}

impl StackedShoe {
    /// Creates a source from stacks in the order they should be dealt.
    pub fn new<I>(stacks: I) -> Self
    where
        I: IntoIterator<Item = Vec<Card>>,
    {
        Self {
            stacks: stacks.into_iter().collect(),
        }
    }

    /// Returns the number of stacks not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.stacks.len()
    }
}

impl CardSource for StackedShoe {
    fn shuffled(&mut self, _decks: u8) -> Vec<Card> {
        self.stacks.pop_front().unwrap_or_default()
    }
}
