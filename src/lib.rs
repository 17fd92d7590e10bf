//! A Briscola game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs 2 and 4 player games of
//! Briscola: dealing, tricks, trumps, redeals and scoring. The [`encoding`]
//! module turns game state into fixed-size integer vectors and maps cards to
//! action indices, and [`BriscolaEnv`] drives a game one action at a time for
//! learning agents.
//!
//! # Example
//!
//! ```no_run
//! use briscola::{BriscolaEnv, EnvOptions};
//!
//! let mut env = BriscolaEnv::new(EnvOptions::default(), Some(42)).unwrap();
//! let seat = env.agent_selection();
//! let view = env.observe(seat).unwrap();
//! let action = view.action_mask.iter().position(|&legal| legal == 1).unwrap();
//! env.step(action as u8).unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod encoding;
pub mod env;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, HAND_SIZE, Suit};
pub use deck::Deck;
pub use encoding::{ACTION_SPACE, OBSERVATION_LEN, Observation};
pub use env::{BriscolaEnv, EnvObservation};
pub use error::{
    CardError, EncodeError, PlayError, RedealError, ScoreError, SetupError, StepError,
};
pub use game::{Game, GamePhase, trick_winner, winning_card};
pub use options::{EnvOptions, GameOptions, MAX_PLAYERS, MIN_PLAYERS};
pub use player::Player;
pub use result::{AgentInfo, Standing, StepOutcome};
