use crate::error::RedealError;

use super::Game;

impl Game {
    /// Deals `per_player` cards to each seat, one at a time, starting at `from`.
    ///
    /// When the deck runs short the briscola is dealt as the final card.
    pub(super) fn deal_cards(&mut self, per_player: usize, from: usize) -> usize {
        let seats = self.players.len();
        let wanted = per_player * seats;
        let mut cards = self.deck.take(wanted);
        if cards.len() < wanted && !self.briscola_dealt {
            cards.push(self.briscola);
            self.briscola_dealt = true;
        }

        let dealt = cards.len();
        for (offset, card) in cards.into_iter().enumerate() {
            self.players[(from + offset) % seats].receive(card);
        }
        dealt
    }

    /// Returns whether every player must be dealt a card before play continues.
    ///
    /// True when no trick is in progress, cards remain to be dealt and no
    /// player holds a full hand.
    #[must_use]
    pub fn needs_redeal(&self) -> bool {
        self.trick.is_empty()
            && self.stock_len() > 0
            && self.players.iter().all(|player| !player.has_full_hand())
    }

    /// Deals one card to each player, starting with the seat on turn.
    ///
    /// # Errors
    ///
    /// Returns an error if a player still holds a full hand, a trick is in
    /// progress, or nothing is left to deal.
    pub fn redeal(&mut self) -> Result<(), RedealError> {
        if self.players.iter().any(|player| player.has_full_hand()) {
            return Err(RedealError::PlayersHaveCards);
        }
        if !self.trick.is_empty() {
            return Err(RedealError::TrickInProgress);
        }
        if self.stock_len() == 0 {
            return Err(RedealError::StockEmpty);
        }

        let dealt = self.deal_cards(1, self.action_on);
        tracing::debug!(
            dealt,
            from = self.action_on,
            stock = self.stock_len(),
            "redealt"
        );
        Ok(())
    }
}
