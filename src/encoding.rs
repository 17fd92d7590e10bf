//! Card and state encoding for learning agents.
//!
//! Cards map to action indices `0..40` as `suit ordinal * 10 + (rank - 1)`.
//! The observation for a seat is a flat vector of small integers:
//!
//! | offset | length | field |
//! |-------:|-------:|-------|
//! | 0      | 40     | cards in the seat's hand |
//! | 40     | 3      | indices of cards played to the trick, zero padded |
//! | 43     | 1      | cards in the trick |
//! | 44     | 1      | briscola index |
//! | 45     | 1      | trump suit ordinal |
//! | 46     | 40     | cards the seat cannot see: deck and other hands |

use crate::card::{Card, DECK_SIZE, MIN_RANK, Suit};
use crate::error::{CardError, EncodeError};
use crate::game::Game;
use crate::options::MAX_PLAYERS;

/// Number of distinct actions: one per card.
pub const ACTION_SPACE: usize = DECK_SIZE;

/// Trick slots in an observation. A seat is only ever asked to act on a
/// trick missing its own card.
pub const TRICK_SLOTS: usize = MAX_PLAYERS - 1;

/// Length of a flattened [`Observation`].
pub const OBSERVATION_LEN: usize = DECK_SIZE + TRICK_SLOTS + 3 + DECK_SIZE;

const RANKS_PER_SUIT: u8 = 10;

/// Returns the action index of `card`.
#[must_use]
pub const fn encode_card(card: Card) -> u8 {
    card.suit().ordinal() * RANKS_PER_SUIT + (card.rank() - MIN_RANK)
}

/// Returns the card with action index `index`.
///
/// # Errors
///
/// Returns [`CardError::InvalidIndex`] if `index` is 40 or more.
///
/// ```
/// use briscola::encoding::{decode_card, encode_card};
///
/// for index in 0..40 {
///     assert_eq!(encode_card(decode_card(index).unwrap()), index);
/// }
/// assert!(decode_card(40).is_err());
/// ```
pub fn decode_card(index: u8) -> Result<Card, CardError> {
    if usize::from(index) >= DECK_SIZE {
        return Err(CardError::InvalidIndex(index));
    }
    let suit = Suit::from_ordinal(index / RANKS_PER_SUIT)?;
    Card::new(suit, index % RANKS_PER_SUIT + MIN_RANK)
}

/// Marks each card of `cards` with a 1 at its action index.
#[must_use]
pub fn card_membership<'a, I>(cards: I) -> [u8; DECK_SIZE]
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut membership = [0; DECK_SIZE];
    for card in cards {
        membership[usize::from(encode_card(*card))] = 1;
    }
    membership
}

/// Packs the action indices of `cards` into `N` slots, left aligned.
///
/// # Errors
///
/// Returns [`EncodeError::CardOverflow`] if there are more than `N` cards.
pub fn pack_cards<const N: usize>(cards: &[Card]) -> Result<[u8; N], EncodeError> {
    if cards.len() > N {
        return Err(EncodeError::CardOverflow {
            len: cards.len(),
            capacity: N,
        });
    }
    let mut slots = [0; N];
    for (slot, card) in slots.iter_mut().zip(cards) {
        *slot = encode_card(*card);
    }
    Ok(slots)
}

/// A seat's view of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// Cards in the seat's hand.
    pub hand: [u8; DECK_SIZE],
    /// Cards played to the trick so far.
    pub trick: [u8; TRICK_SLOTS],
    /// Number of cards in the trick.
    pub trick_len: u8,
    /// The briscola's action index.
    pub briscola: u8,
    /// The trump suit's ordinal.
    pub trump_suit: u8,
    /// Cards in the deck or in other players' hands.
    pub unseen: [u8; DECK_SIZE],
}

impl Observation {
    /// Builds the observation of `seat`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::SeatOutOfRange`] if `seat` is not at the table,
    /// and [`EncodeError::CardOverflow`] if called on a completed 4-card
    /// trick before it is scored.
    pub fn new(game: &Game, seat: usize) -> Result<Self, EncodeError> {
        let player = game.player(seat).ok_or(EncodeError::SeatOutOfRange {
            seat,
            players: game.player_count(),
        })?;

        let others = game
            .players()
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != seat)
            .flat_map(|(_, other)| other.hand());

        Ok(Self {
            hand: card_membership(player.hand()),
            trick: pack_cards(game.trick())?,
            trick_len: game.trick().len() as u8,
            briscola: encode_card(game.briscola()),
            trump_suit: game.trump_suit().ordinal(),
            unseen: card_membership(game.deck().cards().iter().chain(others)),
        })
    }

    /// Flattens the observation into a single array.
    #[must_use]
    pub fn as_array(&self) -> [u8; OBSERVATION_LEN] {
        let mut arr = [0; OBSERVATION_LEN];
        let mut offset = 0;

        arr[offset..offset + DECK_SIZE].copy_from_slice(&self.hand);
        offset += DECK_SIZE;

        arr[offset..offset + TRICK_SLOTS].copy_from_slice(&self.trick);
        offset += TRICK_SLOTS;

        arr[offset] = self.trick_len;
        offset += 1;
        arr[offset] = self.briscola;
        offset += 1;
        arr[offset] = self.trump_suit;
        offset += 1;

        arr[offset..offset + DECK_SIZE].copy_from_slice(&self.unseen);
        offset += DECK_SIZE;

        debug_assert_eq!(offset, OBSERVATION_LEN);
        arr
    }
}

/// Builds the flattened observation of `seat`.
///
/// # Errors
///
/// See [`Observation::new`].
pub fn observe(game: &Game, seat: usize) -> Result<[u8; OBSERVATION_LEN], EncodeError> {
    Observation::new(game, seat).map(|observation| observation.as_array())
}

/// Marks the actions `seat` holds a card for.
///
/// # Errors
///
/// Returns [`EncodeError::SeatOutOfRange`] if `seat` is not at the table.
pub fn action_mask(game: &Game, seat: usize) -> Result<[u8; ACTION_SPACE], EncodeError> {
    game.player(seat)
        .map(|player| card_membership(player.hand()))
        .ok_or(EncodeError::SeatOutOfRange {
            seat,
            players: game.player_count(),
        })
}
