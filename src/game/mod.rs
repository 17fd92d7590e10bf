//! Game engine and state management.

use alloc::vec::Vec;
use core::cmp::Reverse;
use core::fmt;

use crate::card::{Card, DECK_SIZE, HAND_SIZE, Suit};
use crate::deck::Deck;
use crate::error::SetupError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::Standing;

mod deal;
mod play;
pub mod state;

pub use play::{trick_winner, winning_card};
pub use state::GamePhase;

/// A Briscola game engine for 2 or 4 players.
///
/// The game owns the deck, the players and the trick in progress. It is
/// driven in lock-step by a single caller:
///
/// ```
/// use briscola::{Game, GameOptions};
///
/// let mut game = Game::new(GameOptions::default().with_players(2).with_seed(42)).unwrap();
/// while !game.game_over() {
///     game.play_index(0).unwrap();
///     if game.should_score_trick() {
///         game.score_trick().unwrap();
///     }
///     if game.needs_redeal() {
///         game.redeal().unwrap();
///     }
/// }
/// let total: u32 = game.leaders().iter().map(|standing| standing.score).sum();
/// assert_eq!(total, 120);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Seats in table order.
    players: Vec<Player>,
    /// Undealt cards, top first.
    deck: Deck,
    /// The face-up trump card.
    briscola: Card,
    /// Whether the briscola has been dealt as the last card of the stock.
    briscola_dealt: bool,
    /// Cards played to the current trick, in play order.
    trick: Vec<Card>,
    /// Seat whose turn it is.
    action_on: usize,
}

impl Game {
    /// Creates a new game with a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the player count is not 2 or 4 or the first player
    /// is not a seat at the table. Without the `std` feature an unseeded game
    /// fails with `SetupError::SeedRequired`.
    pub fn new(options: GameOptions) -> Result<Self, SetupError> {
        options.validate()?;

        let mut deck = Deck::new();
        match options.seed {
            Some(seed) => deck.shuffle_seeded(seed),
            #[cfg(feature = "std")]
            None => deck.shuffle(None),
            #[cfg(not(feature = "std"))]
            None => return Err(SetupError::SeedRequired),
        }

        Self::with_deck(options, deck)
    }

    /// Creates a game from a deck in a known order, ignoring `options.seed`.
    ///
    /// The top card becomes the briscola; the next cards are dealt three to
    /// each player, one at a time, starting from seat 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or the deck does not hold
    /// each of the 40 cards exactly once.
    pub fn with_deck(options: GameOptions, mut deck: Deck) -> Result<Self, SetupError> {
        options.validate()?;
        if !is_complete(deck.cards()) {
            return Err(SetupError::IncompleteDeck);
        }

        let briscola = deck
            .take(1)
            .first()
            .copied()
            .ok_or(SetupError::IncompleteDeck)?;

        let mut game = Self {
            players: (0..options.players).map(|_| Player::new()).collect(),
            deck,
            briscola,
            briscola_dealt: false,
            trick: Vec::with_capacity(options.players),
            action_on: options.first_player,
        };
        game.deal_cards(HAND_SIZE, 0);

        tracing::debug!(
            players = options.players,
            first_player = options.first_player,
            briscola = %briscola,
            "game started"
        );

        Ok(game)
    }

    /// Returns the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `seat`.
    #[must_use]
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns the undealt deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the trump card.
    #[must_use]
    pub const fn briscola(&self) -> Card {
        self.briscola
    }

    /// Returns whether the briscola has left the table as the last dealt card.
    #[must_use]
    pub const fn briscola_dealt(&self) -> bool {
        self.briscola_dealt
    }

    /// Returns the trump suit.
    #[must_use]
    pub const fn trump_suit(&self) -> Suit {
        self.briscola.suit()
    }

    /// Returns the suit of the first card of the current trick.
    #[must_use]
    pub fn lead_suit(&self) -> Option<Suit> {
        self.trick.first().map(|card| card.suit())
    }

    /// Returns the cards played to the current trick, in play order.
    #[must_use]
    pub fn trick(&self) -> &[Card] {
        &self.trick
    }

    /// Returns the seat whose turn it is.
    #[must_use]
    pub const fn action_on(&self) -> usize {
        self.action_on
    }

    /// Returns the number of cards still to be dealt, briscola included.
    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.deck.len() + usize::from(!self.briscola_dealt)
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.should_score_trick() {
            GamePhase::TrickComplete
        } else if self.needs_redeal() {
            GamePhase::RedealPending
        } else if self.game_over() {
            GamePhase::GameOver
        } else {
            GamePhase::AwaitingPlay
        }
    }

    /// Returns whether the stock and every hand are empty.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.stock_len() == 0 && self.players.iter().all(|p| p.hand().is_empty())
    }

    /// Ranks the seats by pile score, highest first.
    ///
    /// Seats with equal scores keep their table order.
    #[must_use]
    pub fn leaders(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .players
            .iter()
            .enumerate()
            .map(|(seat, player)| Standing {
                seat,
                score: player.score(),
            })
            .collect();
        standings.sort_by_key(|standing| Reverse(standing.score));
        standings
    }
}

/// Returns whether `cards` holds each of the 40 cards exactly once.
fn is_complete(cards: &[Card]) -> bool {
    if cards.len() != DECK_SIZE {
        return false;
    }
    let mut seen = [false; DECK_SIZE];
    for card in cards {
        let index = crate::encoding::encode_card(*card) as usize;
        if seen[index] {
            return false;
        }
        seen[index] = true;
    }
    true
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    f.write_str("[")?;
    for (index, card) in cards.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{card}")?;
    }
    f.write_str("]")
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (seat, player) in self.players.iter().enumerate() {
            write!(f, "Player {seat}: hand=")?;
            write_cards(f, player.hand())?;
            writeln!(f, " pile={} score={}", player.pile().len(), player.score())?;
        }
        writeln!(f, "Action on: {}", self.action_on)?;
        f.write_str("Trick: ")?;
        write_cards(f, &self.trick)?;
        writeln!(f)?;
        write!(f, "Briscola: {} | stock: {}", self.briscola, self.stock_len())
    }
}
