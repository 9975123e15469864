//! Guess-the-number environment
//!
//! A hidden target is drawn uniformly from `[-range, range]` on every reset.
//! Each step the agent submits a continuous guess and receives:
//! - Observation: 1 if the guess is below the target, 2 on an exact match,
//!   3 if the guess is above the target (0 only right after reset)
//! - Reward: `((min(guess, target) + bounds) / (max(guess, target) + bounds))^2`
//! - Termination: after `guess_max` steps
//!
//! The reward grows as the guess closes in on the target from either side
//! and reaches 1.0 only on an exact match.

use anyhow::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::env::{
    episode::EpisodePhase, EnvError, Environment, SpaceInfo, SpaceType, StepResult,
};

pub mod config;

pub use config::GuessConfig;

/// Observation codes emitted by [`GuessNumber`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GuessObservation {
    /// No guess submitted since the last reset
    NoGuess = 0,
    /// Guess was below the target
    Lower = 1,
    /// Guess matched the target exactly
    Equal = 2,
    /// Guess was above the target
    Higher = 3,
}

impl GuessObservation {
    /// Number of distinct observation codes
    pub const COUNT: usize = 4;

    /// Integer code of this observation
    pub fn code(self) -> u8 {
        self as u8
    }

    fn from_comparison(action: f64, target: f64) -> Self {
        if action < target {
            GuessObservation::Lower
        } else if action > target {
            GuessObservation::Higher
        } else {
            GuessObservation::Equal
        }
    }
}

impl TryFrom<u8> for GuessObservation {
    type Error = EnvError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(GuessObservation::NoGuess),
            1 => Ok(GuessObservation::Lower),
            2 => Ok(GuessObservation::Equal),
            3 => Ok(GuessObservation::Higher),
            _ => Err(EnvError::InvalidArgument(format!("unknown observation code {}", code))),
        }
    }
}

impl From<GuessObservation> for u8 {
    fn from(obs: GuessObservation) -> Self {
        obs.code()
    }
}

/// Diagnostic info returned by every step
///
/// Exposes the hidden target. Meant for debugging and evaluation tooling,
/// never as input to an agent's decisions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuessInfo {
    /// The true target of the current episode
    pub number: f64,

    /// Steps taken since the last reset
    pub guesses: usize,
}

/// Guess-the-number environment
#[derive(Debug)]
pub struct GuessNumber {
    config: GuessConfig,

    // Episode state
    target: f64,
    guess_count: usize,
    last_observation: GuessObservation,

    rng: StdRng,
}

impl GuessNumber {
    /// Create a new environment with the default constants
    ///
    /// The random source is seeded from OS entropy and a first episode is
    /// started, so the environment is ready to step.
    pub fn new() -> Self {
        Self::build(GuessConfig::default())
    }

    /// Create a new environment from a validated configuration
    pub fn with_config(config: GuessConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GuessConfig) -> Self {
        let mut env = Self {
            config,
            target: 0.0,
            guess_count: 0,
            last_observation: GuessObservation::NoGuess,
            rng: StdRng::seed_from_u64(0),
        };
        env.seed(None);
        env.reset_state();
        env
    }

    /// Configuration this environment was built with
    pub fn config(&self) -> &GuessConfig {
        &self.config
    }

    /// Steps taken since the last reset
    pub fn guess_count(&self) -> usize {
        self.guess_count
    }

    /// Most recently emitted observation
    pub fn last_observation(&self) -> GuessObservation {
        self.last_observation
    }

    /// Current lifecycle phase of the episode
    pub fn phase(&self) -> EpisodePhase {
        if self.guess_count >= self.config.guess_max {
            EpisodePhase::Terminal
        } else if self.last_observation == GuessObservation::NoGuess {
            EpisodePhase::Fresh
        } else {
            EpisodePhase::InProgress
        }
    }

    /// Proximity reward for a guess against a target
    ///
    /// ```text
    /// reward = ((min(action, target) + bounds) / (max(action, target) + bounds))^2
    /// ```
    pub fn reward(action: f64, target: f64, bounds: f64) -> f64 {
        let low = action.min(target) + bounds;
        let high = action.max(target) + bounds;
        (low / high).powi(2)
    }

    fn reset_state(&mut self) {
        let range = self.config.range;
        self.target = self.rng.gen_range(-range..=range);
        self.guess_count = 0;
        self.last_observation = GuessObservation::NoGuess;
    }

    fn info(&self) -> GuessInfo {
        GuessInfo { number: self.target, guesses: self.guess_count }
    }
}

impl Default for GuessNumber {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for GuessNumber {
    type Observation = GuessObservation;
    type Action = f64;
    type Info = GuessInfo;

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        self.rng = StdRng::seed_from_u64(seed);
        tracing::debug!(seed, "seeded guess environment");
        seed
    }

    fn reset(&mut self) -> Result<Self::Observation> {
        self.reset_state();
        tracing::debug!(guess_max = self.config.guess_max, "reset guess environment");
        Ok(self.last_observation)
    }

    fn step(&mut self, action: Self::Action) -> Result<StepResult<Self::Observation, Self::Info>> {
        let bounds = self.config.bounds;
        if !self.action_space().contains(action) {
            tracing::warn!(action, bounds, "rejected out-of-range action");
            return Err(EnvError::action_out_of_range(action, -bounds, bounds).into());
        }

        let observation = GuessObservation::from_comparison(action, self.target);
        let reward = Self::reward(action, self.target, bounds);

        self.guess_count += 1;
        self.last_observation = observation;

        let terminated = self.guess_count >= self.config.guess_max;
        tracing::trace!(action, ?observation, reward, guesses = self.guess_count, "guess");

        Ok(StepResult { observation, reward, terminated, truncated: false, info: self.info() })
    }

    fn observation_space(&self) -> SpaceInfo {
        SpaceInfo { shape: vec![], dtype: SpaceType::Discrete(GuessObservation::COUNT) }
    }

    fn action_space(&self) -> SpaceInfo {
        let bounds = self.config.bounds;
        SpaceInfo { shape: vec![1], dtype: SpaceType::Box { low: -bounds, high: bounds } }
    }
}
