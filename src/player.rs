//! Per-seat player state.

use alloc::vec::Vec;

use crate::card::{Card, HAND_SIZE};
use crate::error::PlayError;

/// A seat at the table: the cards held and the cards won.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    /// Cards currently held, in the order they were dealt.
    hand: Vec<Card>,
    /// Cards won in tricks.
    pile: Vec<Card>,
}

impl Player {
    /// Creates a player with an empty hand and pile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Vec::new(),
            pile: Vec::new(),
        }
    }

    /// Returns the cards in hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the cards won so far.
    #[must_use]
    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    /// Returns whether the player holds `card`.
    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Returns whether the hand is at its full size.
    #[must_use]
    pub fn has_full_hand(&self) -> bool {
        self.hand.len() >= HAND_SIZE
    }

    /// Sum of the point values of the cards in the pile.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.pile.iter().map(|card| u32::from(card.score())).sum()
    }

    /// Adds a dealt card to the hand.
    pub fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Removes `card` from the hand.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::CardNotInHand`] if the player does not hold `card`.
    pub fn remove_from_hand(&mut self, card: Card) -> Result<(), PlayError> {
        let position = self
            .hand
            .iter()
            .position(|held| *held == card)
            .ok_or(PlayError::CardNotInHand(card))?;
        self.hand.remove(position);
        Ok(())
    }

    /// Adds won trick cards to the pile.
    pub fn take_trick<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.pile.extend(cards);
    }
}

#[cfg(test)]
mod tests {
    use super::Player;
    use crate::card::{Card, Suit};
    use crate::error::PlayError;

    fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, rank).unwrap()
    }

    #[test]
    fn removing_an_absent_card_is_an_error() {
        let mut player = Player::new();
        player.receive(card(Suit::Cups, 4));
        let missing = card(Suit::Coins, 4);
        assert_eq!(
            player.remove_from_hand(missing),
            Err(PlayError::CardNotInHand(missing))
        );
        assert_eq!(player.hand().len(), 1);
        assert_eq!(player.remove_from_hand(card(Suit::Cups, 4)), Ok(()));
        assert!(player.hand().is_empty());
    }

    #[test]
    fn score_sums_the_pile() {
        let mut player = Player::new();
        player.take_trick([card(Suit::Cups, 1), card(Suit::Swords, 3)]);
        player.take_trick([card(Suit::Batons, 10), card(Suit::Coins, 6)]);
        assert_eq!(player.score(), 25);
        assert_eq!(player.pile().len(), 4);
    }
}
