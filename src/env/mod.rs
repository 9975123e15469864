//! Environment traits and implementations
//!
//! This module defines the core environment interface and the guess-the-number
//! environment built on it.

use anyhow::Result;

/// Core trait for RL environments
///
/// Each environment owns its random source. Agent-facing harnesses such as
/// [`episode::run_episode`] are written against this trait only.
pub trait Environment {
    /// Observation type
    type Observation;

    /// Action type
    type Action;

    /// Diagnostic side-channel returned with every step
    type Info;

    /// Re-seed the environment's random source and return the seed used
    ///
    /// With `None` a seed is derived from OS entropy.
    fn seed(&mut self, seed: Option<u64>) -> u64;

    /// Reset the environment and return initial observation
    fn reset(&mut self) -> Result<Self::Observation>;

    /// Step the environment with an action
    fn step(&mut self, action: Self::Action) -> Result<StepResult<Self::Observation, Self::Info>>;

    /// Get the observation space dimensions
    fn observation_space(&self) -> SpaceInfo;

    /// Get the action space dimensions
    fn action_space(&self) -> SpaceInfo;
}

/// Result of an environment step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult<O, I> {
    /// Next observation
    pub observation: O,

    /// Reward received
    pub reward: f64,

    /// Whether the episode terminated
    pub terminated: bool,

    /// Whether the episode was truncated
    pub truncated: bool,

    /// Additional info
    pub info: I,
}

impl<O, I> StepResult<O, I> {
    /// Whether the episode ended for any reason
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Space information for observations and actions
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceInfo {
    /// Shape of the space
    pub shape: Vec<usize>,

    /// Data type
    pub dtype: SpaceType,
}

impl SpaceInfo {
    /// Whether a scalar value is a member of this space
    ///
    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        match self.dtype {
            SpaceType::Discrete(n) => value >= 0.0 && value.fract() == 0.0 && value < n as f64,
            SpaceType::Box { low, high } => (low..=high).contains(&value),
        }
    }
}

/// Space data types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpaceType {
    /// Discrete space with n options
    Discrete(usize),

    /// Continuous space bounded by `[low, high]` in every dimension
    Box {
        /// Inclusive lower bound
        low: f64,
        /// Inclusive upper bound
        high: f64,
    },
}

pub mod episode;
pub mod error;
pub mod guess_number;

pub use error::EnvError;
