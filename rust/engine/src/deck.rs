use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::collections::HashSet;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// The draw pile. Shuffled once when built; cards only ever leave it.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut cards = full_deck();
        cards.shuffle(&mut rng);
        Self { cards, position: 0 }
    }

    /// Builds a deck that deals `top` first, in order, followed by every
    /// other card in canonical order.
    pub fn stacked(top: &[Card]) -> Result<Self, GameError> {
        let mut seen = HashSet::with_capacity(top.len());
        for &card in top {
            if !seen.insert(card) {
                return Err(GameError::DuplicateCard { card });
            }
        }
        let mut cards = top.to_vec();
        cards.extend(full_deck().into_iter().filter(|c| !seen.contains(c)));
        Ok(Self { cards, position: 0 })
    }

    /// Takes the top card, or `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}
