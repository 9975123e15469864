//! Episode lifecycle and a generic episode runner
//!
//! The runner only sees the [`Environment`] trait, so any agent written as a
//! closure over observations can drive any environment.

use anyhow::{Context, Result};

use crate::env::Environment;

/// Lifecycle phase of an episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EpisodePhase {
    /// Reset, no step taken yet
    Fresh,
    /// At least one step taken, horizon not reached
    InProgress,
    /// Horizon reached; only a reset starts a new episode
    Terminal,
}

impl EpisodePhase {
    /// Returns `true` once the episode has ended
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Terminal)
    }
}

/// Outcome of a single episode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeSummary {
    /// Steps taken
    pub steps: usize,

    /// Sum of all rewards
    pub total_reward: f64,

    /// Reward of the final step (0.0 if no step was taken)
    pub last_reward: f64,

    /// Whether the environment reported the episode as done
    pub done: bool,
}

/// Reset `env` and run one episode with `policy`
///
/// Stops when the environment reports done or after `max_steps` steps,
/// whichever comes first.
pub fn run_episode<E, P>(env: &mut E, mut policy: P, max_steps: usize) -> Result<EpisodeSummary>
where
    E: Environment,
    P: FnMut(&E::Observation) -> E::Action,
{
    let mut observation = env.reset().context("failed to reset environment")?;
    let mut summary = EpisodeSummary { steps: 0, total_reward: 0.0, last_reward: 0.0, done: false };

    while summary.steps < max_steps {
        let action = policy(&observation);
        let result = env
            .step(action)
            .with_context(|| format!("step {} failed", summary.steps + 1))?;

        summary.steps += 1;
        summary.total_reward += result.reward;
        summary.last_reward = result.reward;
        summary.done = result.done();
        observation = result.observation;

        if summary.done {
            break;
        }
    }

    tracing::debug!(
        steps = summary.steps,
        total_reward = summary.total_reward,
        done = summary.done,
        "episode finished"
    );
    Ok(summary)
}
