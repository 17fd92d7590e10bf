use crate::card::{Card, Suit};
use crate::error::{PlayError, ScoreError};

use super::{Game, GamePhase};

/// Returns the card currently winning `trick` under `trump`.
///
/// The lead suit is the suit of the first card. A later card takes over
/// when it is trump over a non-trump, lead over an off-suit card, or a
/// stronger card of the same trump or lead suit. Off-suit cards never win.
#[must_use]
pub fn winning_card(trick: &[Card], trump: Suit) -> Option<Card> {
    let (&first, rest) = trick.split_first()?;
    let lead = first.suit();

    let best = rest.iter().fold(first, |best, &card| {
        let beats = if card.suit() == trump {
            best.suit() != trump || card.strength() > best.strength()
        } else if card.suit() == lead {
            (best.suit() != lead && best.suit() != trump)
                || (best.suit() == lead && card.strength() > best.strength())
        } else {
            false
        };
        if beats { card } else { best }
    });
    Some(best)
}

/// Returns the position in `trick` of the winning card.
///
/// ```
/// use briscola::{Card, Suit, trick_winner};
///
/// let trick = [
///     Card::new(Suit::Batons, 7).unwrap(),
///     Card::new(Suit::Batons, 1).unwrap(),
/// ];
/// assert_eq!(trick_winner(&trick, Suit::Cups), Some(1));
/// ```
#[must_use]
pub fn trick_winner(trick: &[Card], trump: Suit) -> Option<usize> {
    let winner = winning_card(trick, trump)?;
    trick.iter().rposition(|card| *card == winner)
}

impl Game {
    fn ensure_awaiting_play(&self) -> Result<(), PlayError> {
        match self.phase() {
            GamePhase::AwaitingPlay => Ok(()),
            GamePhase::TrickComplete => Err(PlayError::TrickAlreadyComplete),
            GamePhase::RedealPending => Err(PlayError::RedealPending),
            GamePhase::GameOver => Err(PlayError::GameOver),
        }
    }

    /// Returns whether the trick holds one card per player.
    #[must_use]
    pub fn should_score_trick(&self) -> bool {
        self.trick.len() == self.players.len()
    }

    /// Returns whether the acting player may play `card` now.
    #[must_use]
    pub fn playable(&self, card: Card) -> bool {
        self.phase() == GamePhase::AwaitingPlay
            && self.players[self.action_on].holds(card)
    }

    /// Plays `card` from the acting player's hand and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::TrickAlreadyComplete`] if the trick must be scored
    /// first, and an illegal-play error if a redeal is pending, the game is
    /// over, or the acting player does not hold the card.
    pub fn play(&mut self, card: Card) -> Result<(), PlayError> {
        self.ensure_awaiting_play()?;

        let seat = self.action_on;
        self.players[seat].remove_from_hand(card)?;
        self.trick.push(card);
        self.action_on = (seat + 1) % self.players.len();

        tracing::trace!(seat, card = %card, "card played");
        Ok(())
    }

    /// Plays the card at `index` in the acting player's hand.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::HandIndexOutOfRange`] if there is no card at
    /// `index`, otherwise the same errors as [`Game::play`].
    pub fn play_index(&mut self, index: usize) -> Result<(), PlayError> {
        self.ensure_awaiting_play()?;
        let hand = self.players[self.action_on].hand();
        let card = hand
            .get(index)
            .copied()
            .ok_or(PlayError::HandIndexOutOfRange {
                index,
                len: hand.len(),
            })?;
        self.play(card)
    }

    /// Awards the completed trick to its winner, who leads next.
    ///
    /// Returns the winner's seat.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::TrickNotComplete`] unless every player has played.
    pub fn score_trick(&mut self) -> Result<usize, ScoreError> {
        let seats = self.players.len();
        let incomplete = ScoreError::TrickNotComplete {
            played: self.trick.len(),
            needed: seats,
        };
        if !self.should_score_trick() {
            return Err(incomplete);
        }

        // After a full trick the turn is back on the seat that led it.
        let position = trick_winner(&self.trick, self.trump_suit()).ok_or(incomplete)?;
        let winner = (self.action_on + position) % seats;

        let points: u32 = self.trick.iter().map(|card| u32::from(card.score())).sum();
        self.players[winner].take_trick(self.trick.drain(..));
        self.action_on = winner;

        tracing::debug!(winner, points, "trick scored");
        if self.game_over() {
            let leader = self.leaders().first().copied();
            if let Some(leader) = leader {
                tracing::debug!(seat = leader.seat, score = leader.score, "game over");
            }
        }

        Ok(winner)
    }
}
