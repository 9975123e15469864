//! # guess-rl
//!
//! A minimal guess-the-number reinforcement learning environment
//!
//! A hidden target is drawn from a fixed range. Each step the agent submits a
//! continuous guess and gets back a directional signal (lower / equal /
//! higher) plus a reward shaped by proximity to the target.
//!
//! ## Quick Start
//!
//! ```rust
//! use guess_rl::prelude::*;
//!
//! let mut env = GuessNumber::new();
//! env.seed(Some(42));
//! let obs = env.reset().unwrap();
//! assert_eq!(obs, GuessObservation::NoGuess);
//!
//! let result = env.step(0.0).unwrap();
//! assert!(result.reward > 0.0 && result.reward <= 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Environment traits and implementations
pub mod env;

/// Prelude module for convenient imports
///
/// This module re-exports commonly used types and traits for convenience.
pub mod prelude {
    pub use crate::env::{
        episode::{run_episode, EpisodePhase, EpisodeSummary},
        guess_number::{GuessConfig, GuessInfo, GuessNumber, GuessObservation},
        EnvError, Environment, SpaceInfo, SpaceType, StepResult,
    };
}

/// Current version of guess-rl
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
