//! Play one guess-the-number episode with a bisection agent
//!
//! The agent only reads observation codes: it halves the candidate interval
//! after every "too low" / "too high" signal.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example bisect_guesser -- 42
//! RUST_LOG=guess_rl=trace cargo run --example bisect_guesser
//! ```

use anyhow::{Context, Result};
use guess_rl::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seed = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u64>().context("seed must be an unsigned integer"))
        .transpose()?;

    let mut env = GuessNumber::new();
    let seed = env.seed(seed);
    let range = env.config().range;

    tracing::info!("Environment: GuessNumber");
    tracing::info!("  Seed: {}", seed);
    tracing::info!("  Observation space: {:?}", env.observation_space().dtype);
    tracing::info!("  Action space: {:?}", env.action_space().dtype);

    let (mut low, mut high) = (-range, range);
    let mut guess = 0.0;
    let summary = run_episode(
        &mut env,
        |obs: &GuessObservation| {
            match obs {
                GuessObservation::Lower => low = guess,
                GuessObservation::Higher => high = guess,
                GuessObservation::NoGuess | GuessObservation::Equal => {}
            }
            guess = (low + high) / 2.0;
            guess
        },
        usize::MAX,
    )?;

    tracing::info!("Episode finished after {} steps", summary.steps);
    tracing::info!("  Total reward: {:.4}", summary.total_reward);
    tracing::info!("  Final reward: {:.6}", summary.last_reward);
    tracing::info!("  Final guess: {}", guess);

    Ok(())
}
