//! The 40-card deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};

/// An ordered pile of cards drawn from the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck: suits in [`Suit::ALL`] order, ranks ascending.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in MIN_RANK..=MAX_RANK {
                if let Ok(card) = Card::new(suit, rank) {
                    cards.push(card);
                }
            }
        }
        Self { cards }
    }

    /// Creates a deck holding `cards` in the given order, top card first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the deck.
    ///
    /// With a seed the resulting order depends only on the seed. Without one
    /// the thread-local generator is used.
    #[cfg(feature = "std")]
    pub fn shuffle(&mut self, seed: Option<u64>) {
        match seed {
            Some(seed) => self.shuffle_seeded(seed),
            None => self.shuffle_with(&mut rand::rng()),
        }
    }

    /// Shuffles the deck with a `ChaCha8` generator seeded from `seed`.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Shuffles the deck with the given generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns up to `n` cards from the top.
    ///
    /// Returns fewer than `n` cards when the deck runs short.
    pub fn take(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Returns the remaining cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the deck holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Deck;
    use crate::card::{Card, DECK_SIZE, Suit};

    #[test]
    fn new_deck_is_suit_major_rank_ascending() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck.cards()[0], Card::new(Suit::Cups, 1).unwrap());
        assert_eq!(deck.cards()[9], Card::new(Suit::Cups, 10).unwrap());
        assert_eq!(deck.cards()[10], Card::new(Suit::Coins, 1).unwrap());
        assert_eq!(deck.cards()[39], Card::new(Suit::Batons, 10).unwrap());
    }

    #[test]
    fn seeded_shuffle_is_deterministic() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        a.shuffle_seeded(42);
        b.shuffle_seeded(42);
        assert_eq!(a.cards(), b.cards());
        assert_ne!(a.cards(), Deck::new().cards());
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        a.shuffle_seeded(1);
        b.shuffle_seeded(2);
        assert_ne!(a.cards(), b.cards());
    }

    #[test]
    fn take_removes_from_the_top() {
        let mut deck = Deck::new();
        let top = deck.take(3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0], Card::new(Suit::Cups, 1).unwrap());
        assert_eq!(deck.len(), DECK_SIZE - 3);
        assert!(!deck.contains(top[0]));
    }

    #[test]
    fn take_truncates_when_short() {
        let mut deck = Deck::new();
        deck.take(38);
        let rest = deck.take(4);
        assert_eq!(rest.len(), 2);
        assert!(deck.is_empty());
        assert!(deck.take(1).is_empty());
    }
}
