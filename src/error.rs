//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building or decoding a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `1..=10`.
    #[error("invalid rank: {0}")]
    InvalidRank(u8),
    /// Suit ordinal outside `0..4`.
    #[error("invalid suit ordinal: {0}")]
    InvalidSuit(u8),
    /// Suit name not recognized.
    #[error("unknown suit name")]
    UnknownSuit,
    /// Card index outside `0..40`.
    #[error("invalid card index: {0}")]
    InvalidIndex(u8),
}

/// Errors that can occur when setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Only 2 and 4 player games are supported.
    #[error("invalid number of players: {0}")]
    InvalidPlayerCount(usize),
    /// Starting seat is not a seat at the table.
    #[error("invalid first player index {index} for {players} players")]
    InvalidStartIndex {
        /// Requested starting seat.
        index: usize,
        /// Number of players at the table.
        players: usize,
    },
    /// A supplied deck is not exactly the 40 distinct cards.
    #[error("deck must hold each of the 40 cards exactly once")]
    IncompleteDeck,
    /// Unseeded games need an entropy source, which requires `std`.
    #[cfg(not(feature = "std"))]
    #[error("a seed is required without the `std` feature")]
    SeedRequired,
}

/// Errors that can occur when playing a card.
///
/// Every variant other than [`PlayError::TrickAlreadyComplete`] is an illegal
/// play: the card cannot be played right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The trick holds one card per player and must be scored first.
    #[error("trick already complete")]
    TrickAlreadyComplete,
    /// Players must be dealt a card before anyone plays.
    #[error("redeal pending")]
    RedealPending,
    /// Every card has been played.
    #[error("game is over")]
    GameOver,
    /// The acting player does not hold this card.
    #[error("card not in hand: {0}")]
    CardNotInHand(Card),
    /// The acting player has no card at this hand position.
    #[error("hand index {index} out of range for hand of {len}")]
    HandIndexOutOfRange {
        /// Requested hand position.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
}

/// Errors that can occur when scoring a trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Not every player has played to the trick yet.
    #[error("trick not complete: {played} of {needed} cards played")]
    TrickNotComplete {
        /// Cards in the trick.
        played: usize,
        /// Cards needed to complete it.
        needed: usize,
    },
}

/// Errors that can occur when redealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RedealError {
    /// At least one player still holds a full hand.
    #[error("players have cards")]
    PlayersHaveCards,
    /// Cards are on the table.
    #[error("trick in progress")]
    TrickInProgress,
    /// No cards left to deal.
    #[error("no cards left to deal")]
    StockEmpty,
}

/// Errors that can occur when encoding game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// More cards than the fixed slot can hold.
    #[error("{len} cards exceed slot capacity {capacity}")]
    CardOverflow {
        /// Number of cards supplied.
        len: usize,
        /// Slot capacity.
        capacity: usize,
    },
    /// Observing seat is not at the table.
    #[error("seat {seat} out of range for {players} players")]
    SeatOutOfRange {
        /// Requested seat.
        seat: usize,
        /// Number of players at the table.
        players: usize,
    },
}

/// Errors that can occur when stepping the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// The episode has ended; call reset.
    #[error("episode finished")]
    Finished,
    /// The action is not a card index.
    #[error(transparent)]
    Action(#[from] CardError),
    /// The engine rejected the play.
    #[error(transparent)]
    Play(#[from] PlayError),
    /// The engine could not score the trick.
    #[error(transparent)]
    Score(#[from] ScoreError),
    /// The engine could not redeal.
    #[error(transparent)]
    Redeal(#[from] RedealError),
}
