//! Card types for the 40-card Italian deck.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit, in the fixed order used for deck construction and encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Cups (coppe).
    Cups,
    /// Coins (denari).
    Coins,
    /// Swords (spade).
    Swords,
    /// Batons (bastoni).
    Batons,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Cups, Self::Coins, Self::Swords, Self::Batons];

    /// Returns the position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the suit at the given ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] if `ordinal` is not in `0..4`.
    pub const fn from_ordinal(ordinal: u8) -> Result<Self, CardError> {
        match ordinal {
            0 => Ok(Self::Cups),
            1 => Ok(Self::Coins),
            2 => Ok(Self::Swords),
            3 => Ok(Self::Batons),
            _ => Err(CardError::InvalidSuit(ordinal)),
        }
    }

    /// Lowercase English name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cups => "cups",
            Self::Coins => "coins",
            Self::Swords => "swords",
            Self::Batons => "batons",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(CardError::UnknownSuit)
    }
}

/// Number of cards in a Briscola deck.
pub const DECK_SIZE: usize = 40;

/// Number of cards a player holds after a full deal.
pub const HAND_SIZE: usize = 3;

/// Lowest card rank (the ace).
pub const MIN_RANK: u8 = 1;

/// Highest card rank (the king).
pub const MAX_RANK: u8 = 10;

/// A playing card.
///
/// Cards are plain values: two cards are the same card when suit and rank
/// match. A `Card` can only be built through [`Card::new`], so it is always
/// one of the 40 cards of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=10`.
    ///
    /// # Example
    ///
    /// ```
    /// use briscola::{Card, Suit};
    ///
    /// let ace = Card::new(Suit::Batons, 1).unwrap();
    /// assert_eq!(ace.score(), 11);
    /// assert!(Card::new(Suit::Cups, 11).is_err());
    /// ```
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank < MIN_RANK || rank > MAX_RANK {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { suit, rank })
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// The rank of the card (1 = ace, 8 = jack, 9 = knight, 10 = king).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Point value of the card when it ends up in a pile.
    #[must_use]
    pub const fn score(self) -> u8 {
        match self.rank {
            1 => 11,
            3 => 10,
            10 => 4,
            9 => 3,
            8 => 2,
            _ => 0,
        }
    }

    /// Trick-taking strength among cards of the same suit.
    ///
    /// Scoring cards rank above every blank card: ace, three, king, knight,
    /// jack, then 7 down to 2.
    #[must_use]
    pub const fn strength(self) -> u8 {
        match self.score() {
            0 => self.rank,
            score => score + 10,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            1 => write!(f, "ace of {}", self.suit),
            8 => write!(f, "jack of {}", self.suit),
            9 => write!(f, "knight of {}", self.suit),
            10 => write!(f, "king of {}", self.suit),
            rank => write!(f, "{rank} of {}", self.suit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, CardError, Suit};

    #[test]
    fn rejects_ranks_outside_the_italian_deck() {
        assert_eq!(Card::new(Suit::Cups, 0), Err(CardError::InvalidRank(0)));
        assert_eq!(Card::new(Suit::Cups, 11), Err(CardError::InvalidRank(11)));
        assert!(Card::new(Suit::Cups, 10).is_ok());
    }

    #[test]
    fn strength_orders_scoring_cards_first() {
        let order: Vec<u8> = [1, 3, 10, 9, 8, 7, 6, 5, 4, 2]
            .into_iter()
            .map(|rank| Card::new(Suit::Swords, rank).unwrap().strength())
            .collect();
        assert_eq!(order, vec![21, 20, 14, 13, 12, 7, 6, 5, 4, 2]);
    }

    #[test]
    fn suit_names_parse_back() {
        for suit in Suit::ALL {
            assert_eq!(suit.name().parse::<Suit>(), Ok(suit));
            assert_eq!(Suit::from_ordinal(suit.ordinal()), Ok(suit));
        }
        assert_eq!("hearts".parse::<Suit>(), Err(CardError::UnknownSuit));
        assert_eq!(Suit::from_ordinal(4), Err(CardError::InvalidSuit(4)));
    }

    #[test]
    fn display_uses_court_names() {
        let knight = Card::new(Suit::Coins, 9).unwrap();
        assert_eq!(knight.to_string(), "knight of coins");
        let seven = Card::new(Suit::Batons, 7).unwrap();
        assert_eq!(seven.to_string(), "7 of batons");
    }
}
