//! Episode loop control
//!
//! One episode at a time, one step at a time: the agent picks an action,
//! the environment executes it, the agent is told the outcome. Nothing is
//! skipped, reordered, or retried; collaborator errors propagate and end
//! the run.

use std::path::Path;

use tracing::info;

use badseeds_core::{Agent, Environment, EpisodeRecord, Result};

/// Drive a single episode to its terminal state.
///
/// Accumulates reward and length, feeding each transition back to the agent
/// strictly after the environment executed it.
pub async fn run_episode<E, A>(env: &mut E, agent: &mut A) -> Result<EpisodeRecord>
where
    E: Environment,
    A: Agent<Action = E::Action>,
{
    let mut state = env.reset().await?;
    let mut episode = EpisodeRecord::begin();

    loop {
        let action = agent.act(&state).await?;
        let step = env.execute(action).await?;
        episode.record(step.reward);
        agent.observe(step.terminal, step.reward).await?;
        if step.terminal {
            break;
        }
        state = step.state;
    }

    episode.finish();
    Ok(episode)
}

/// Bounded-count manual loop: a fixed number of sequential episodes.
///
/// Deliberately performs no teardown. An error mid-run propagates without
/// saving or closing the collaborators, keeping the fail-fast behavior of
/// an interactively supervised run.
pub async fn run_manual<E, A>(env: &mut E, agent: &mut A, episodes: usize) -> Result<Vec<EpisodeRecord>>
where
    E: Environment,
    A: Agent<Action = E::Action>,
{
    let mut records = Vec::with_capacity(episodes);
    for n in 0..episodes {
        let episode = run_episode(env, agent).await?;
        info!(
            episode = n + 1,
            reward = episode.total_reward,
            length = episode.steps,
            "episode finished"
        );
        records.push(episode);
    }
    Ok(records)
}

/// Aggregate outcome of a managed run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Episodes completed
    pub episodes: usize,
    /// Steps across all episodes
    pub total_steps: usize,
    /// Mean episode reward
    pub mean_reward: f64,
}

/// Managed runner owning both collaborators for the duration of a run.
pub struct Runner<E, A> {
    env: E,
    agent: A,
}

impl<E, A> Runner<E, A>
where
    E: Environment,
    A: Agent<Action = E::Action>,
{
    /// Create a runner from an environment and an agent
    pub fn new(env: E, agent: A) -> Self {
        Self { env, agent }
    }

    /// Run a fixed number of sequential episodes.
    pub async fn run(&mut self, episodes: usize) -> Result<RunSummary> {
        let mut total_steps = 0;
        let mut reward_sum = 0.0;

        for n in 0..episodes {
            let episode = run_episode(&mut self.env, &mut self.agent).await?;
            info!(
                episode = n + 1,
                reward = episode.total_reward,
                length = episode.steps,
                "episode finished"
            );
            total_steps += episode.steps;
            reward_sum += episode.total_reward;
        }

        let mean_reward = if episodes == 0 {
            0.0
        } else {
            reward_sum / episodes as f64
        };
        Ok(RunSummary {
            episodes,
            total_steps,
            mean_reward,
        })
    }

    /// Run and then tear down, consuming the runner.
    ///
    /// `agent.save` (when a directory is given), `agent.close` and
    /// `env.close` are each invoked exactly once on every exit path,
    /// including a mid-run collaborator failure. The run error takes
    /// precedence over teardown errors.
    pub async fn run_to_end(
        mut self,
        episodes: usize,
        save_dir: Option<&Path>,
    ) -> Result<RunSummary> {
        let outcome = self.run(episodes).await;
        let teardown = self.teardown(save_dir).await;
        let summary = outcome?;
        teardown?;
        Ok(summary)
    }

    /// All three teardown calls are attempted before any error returns.
    async fn teardown(&mut self, save_dir: Option<&Path>) -> Result<()> {
        let saved = match save_dir {
            Some(dir) => self.agent.save(dir).await,
            None => Ok(()),
        };
        let agent_closed = self.agent.close().await;
        let env_closed = self.env.close().await;
        saved?;
        agent_closed?;
        env_closed
    }
}
