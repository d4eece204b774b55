use rand::Rng;

use crate::engine::models::{Card, Rank, Suit, TrainerError};

/// A dealing shoe holding one or more 52-card decks shuffled together.
///
/// Cards are drawn from the top, which is the end of the internal sequence.
#[derive(Debug)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Build a shoe of `decks` standard decks and shuffle it with `rng`.
    pub fn new_shuffled<R: Rng>(decks: u8, rng: &mut R) -> Result<Self, TrainerError> {
        if decks == 0 {
            return Err(TrainerError::InvalidConfiguration(decks));
        }

        let mut cards = Vec::with_capacity(usize::from(decks) * 52);
        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card { rank, suit });
                }
            }
        }

        let mut shoe = Shoe { cards };
        shoe.shuffle(rng);
        Ok(shoe)
    }

    /// Fisher-Yates shuffle: walk from the last index down to 1, swapping each
    /// card with one at a uniform index at or below it.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, TrainerError> {
        self.cards.pop().ok_or(TrainerError::EmptyShoe)
    }

    /// Cards left in the shoe.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// All undrawn cards, bottom to top (useful for integrity checks).
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
