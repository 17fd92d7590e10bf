//! Turn-taking environment for learning agents.
//!
//! The environment drives a [`Game`] one action at a time: it decodes the
//! action index, plays the card, scores and redeals when due, and hands out
//! rewards. Trick points go to the trick winner; at the end of the episode
//! each seat also earns the reward for its final placement.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::encoding::{self, ACTION_SPACE, Observation};
use crate::error::{EncodeError, SetupError, StepError};
use crate::game::Game;
use crate::options::EnvOptions;
use crate::result::{AgentInfo, StepOutcome};

/// An observation paired with the seat's legal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvObservation {
    /// The seat's view of the game.
    pub observation: Observation,
    /// 1 for each card the seat holds.
    pub action_mask: [u8; ACTION_SPACE],
}

/// A Briscola environment with one agent per seat.
#[derive(Debug, Clone)]
pub struct BriscolaEnv {
    options: EnvOptions,
    game: Game,
    cumulative_rewards: Vec<u32>,
    terminated: Vec<bool>,
    infos: Vec<AgentInfo>,
}

impl BriscolaEnv {
    /// Creates an environment and starts the first episode.
    ///
    /// # Errors
    ///
    /// Returns an error if the options name an unsupported player count.
    pub fn new(options: EnvOptions, seed: Option<u64>) -> Result<Self, SetupError> {
        let game = Game::new(options.game_options(seed))?;
        let players = options.players;
        Ok(Self {
            options,
            game,
            cumulative_rewards: vec![0; players],
            terminated: vec![false; players],
            infos: vec![AgentInfo::default(); players],
        })
    }

    /// Starts a new episode.
    ///
    /// Rewards and termination flags are cleared; trick counts restart while
    /// win counts carry over.
    ///
    /// # Errors
    ///
    /// Returns an error if the game cannot be set up.
    pub fn reset(&mut self, seed: Option<u64>) -> Result<(), SetupError> {
        self.game = Game::new(self.options.game_options(seed))?;
        self.cumulative_rewards.fill(0);
        self.terminated.fill(false);
        for info in &mut self.infos {
            info.tricks = 0;
        }
        Ok(())
    }

    /// Returns the game being played.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the seat that acts next.
    #[must_use]
    pub const fn agent_selection(&self) -> usize {
        self.game.action_on()
    }

    /// Returns the rewards earned by each seat this episode.
    #[must_use]
    pub fn cumulative_rewards(&self) -> &[u32] {
        &self.cumulative_rewards
    }

    /// Returns whether `seat` has finished the episode.
    #[must_use]
    pub fn is_terminated(&self, seat: usize) -> bool {
        self.terminated.get(seat).copied().unwrap_or(true)
    }

    /// Returns the statistics of `seat`.
    #[must_use]
    pub fn info(&self, seat: usize) -> Option<AgentInfo> {
        self.infos.get(seat).copied()
    }

    /// Plays the card with action index `action` for the seat on turn.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Finished`] once the episode is over, and the
    /// decoding or engine error if the action cannot be played.
    pub fn step(&mut self, action: u8) -> Result<StepOutcome, StepError> {
        if self.game.game_over() {
            return Err(StepError::Finished);
        }

        let actor = self.game.action_on();
        let card = encoding::decode_card(action)?;
        self.game.play(card)?;

        let mut rewards = vec![0; self.game.player_count()];
        let mut trick_winner = None;

        if self.game.should_score_trick() {
            let points: u32 = self
                .game
                .trick()
                .iter()
                .map(|card| u32::from(card.score()))
                .sum();
            let winner = self.game.score_trick()?;
            rewards[winner] += points;
            self.infos[winner].tricks += 1;
            trick_winner = Some(winner);
        }

        if self.game.needs_redeal() {
            self.game.redeal()?;
        }

        let done = self.game.game_over();
        if done {
            self.settle(&mut rewards);
        }

        for (total, reward) in self.cumulative_rewards.iter_mut().zip(&rewards) {
            *total += reward;
        }

        Ok(StepOutcome {
            actor,
            trick_winner,
            rewards,
            done,
        })
    }

    fn settle(&mut self, rewards: &mut [u32]) {
        for (place, standing) in self.game.leaders().into_iter().enumerate() {
            if place == 0 {
                self.infos[standing.seat].wins += 1;
            }
            rewards[standing.seat] += self.options.placement_rewards[place];
            self.terminated[standing.seat] = true;
        }
    }

    /// Builds the observation and action mask of `seat`.
    ///
    /// # Errors
    ///
    /// Returns an error if `seat` is not at the table.
    pub fn observe(&self, seat: usize) -> Result<EnvObservation, EncodeError> {
        Ok(EnvObservation {
            observation: Observation::new(&self.game, seat)?,
            action_mask: encoding::action_mask(&self.game, seat)?,
        })
    }

    /// Renders the table as text.
    #[must_use]
    pub fn render(&self) -> String {
        self.game.to_string()
    }
}
