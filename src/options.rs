//! Game and environment configuration options.

use crate::error::SetupError;

/// Fewest players at a table.
pub const MIN_PLAYERS: usize = 2;

/// Most players at a table.
pub const MAX_PLAYERS: usize = 4;

/// Checks that `players` is a supported table size and `first_player` sits at it.
pub(crate) const fn validate_table(players: usize, first_player: usize) -> Result<(), SetupError> {
    if players != MIN_PLAYERS && players != MAX_PLAYERS {
        return Err(SetupError::InvalidPlayerCount(players));
    }
    if first_player >= players {
        return Err(SetupError::InvalidStartIndex {
            index: first_player,
            players,
        });
    }
    Ok(())
}

/// Configuration options for a Briscola game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use briscola::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(2)
///     .with_first_player(1)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of players (2 or 4).
    pub players: usize,
    /// Seat that leads the first trick.
    pub first_player: usize,
    /// Shuffle seed. `None` shuffles from entropy.
    pub seed: Option<u64>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: MAX_PLAYERS,
            first_player: 0,
            seed: None,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use briscola::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(2);
    /// assert_eq!(options.players, 2);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets the seat that leads the first trick.
    ///
    /// # Example
    ///
    /// ```
    /// use briscola::GameOptions;
    ///
    /// let options = GameOptions::default().with_first_player(3);
    /// assert_eq!(options.first_player, 3);
    /// ```
    #[must_use]
    pub const fn with_first_player(mut self, seat: usize) -> Self {
        self.first_player = seat;
        self
    }

    /// Sets the shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use briscola::GameOptions;
    ///
    /// let options = GameOptions::default().with_seed(7);
    /// assert_eq!(options.seed, Some(7));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the player count and starting seat.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidPlayerCount`] unless there are 2 or 4
    /// players, and [`SetupError::InvalidStartIndex`] if the first player is
    /// not a seat at the table.
    pub const fn validate(&self) -> Result<(), SetupError> {
        validate_table(self.players, self.first_player)
    }
}

/// Configuration options for [`BriscolaEnv`](crate::env::BriscolaEnv).
///
/// ```
/// use briscola::EnvOptions;
///
/// let options = EnvOptions::default()
///     .with_players(2)
///     .with_placement_rewards([60, 0, 0, 0]);
/// assert_eq!(options.placement_rewards[0], 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvOptions {
    /// Number of players (2 or 4).
    pub players: usize,
    /// Reward paid at the end of an episode, indexed by final placement.
    pub placement_rewards: [u32; MAX_PLAYERS],
}

impl Default for EnvOptions {
    fn default() -> Self {
        Self {
            players: MAX_PLAYERS,
            placement_rewards: [120, 0, 0, 0],
        }
    }
}

impl EnvOptions {
    /// Sets the number of players.
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets the end-of-episode rewards by placement.
    #[must_use]
    pub const fn with_placement_rewards(mut self, rewards: [u32; MAX_PLAYERS]) -> Self {
        self.placement_rewards = rewards;
        self
    }

    /// Game options for an episode seeded with `seed`.
    ///
    /// A seeded episode starts at seat `seed % players`; an unseeded one at seat 0.
    #[must_use]
    pub const fn game_options(&self, seed: Option<u64>) -> GameOptions {
        let first_player = match seed {
            Some(seed) if self.players > 0 => (seed % self.players as u64) as usize,
            _ => 0,
        };
        GameOptions {
            players: self.players,
            first_player,
            seed,
        }
    }
}
