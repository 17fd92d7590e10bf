//! Result types for standings and environment steps.

use alloc::vec::Vec;

/// A seat's place in the final ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    /// The seat index.
    pub seat: usize,
    /// Points in the seat's pile.
    pub score: u32,
}

/// Per-seat episode statistics kept by the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgentInfo {
    /// Tricks won this episode.
    pub tricks: u32,
    /// Episodes finished in first place.
    pub wins: u32,
}

/// Result of a single environment step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// Seat that played the card.
    pub actor: usize,
    /// Winner of the trick this step completed, if any.
    pub trick_winner: Option<usize>,
    /// Reward earned by each seat during this step.
    pub rewards: Vec<u32>,
    /// Whether the episode ended with this step.
    pub done: bool,
}
