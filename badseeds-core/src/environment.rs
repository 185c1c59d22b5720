//! Environment traits and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Action, ActionSpace, Reward, SeedState};

/// Result of a single environment transition
#[derive(Debug, Clone)]
pub struct Step {
    /// Next state handed to the agent
    pub state: SeedState,
    /// Whether the episode ended on this transition
    pub terminal: bool,
    /// Immediate reward for the transition
    pub reward: Reward,
}

/// Summary record of one episode, reported when the episode ends and
/// discarded afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Episode ID
    pub id: String,
    /// Cumulative reward over the episode
    pub total_reward: f64,
    /// Number of steps taken
    pub steps: usize,
    /// Start time
    pub start_time: chrono::DateTime<chrono::Utc>,
    /// End time
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
}

impl EpisodeRecord {
    /// Start a new episode record with zeroed accumulators.
    #[must_use]
    pub fn begin() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            total_reward: 0.0,
            steps: 0,
            start_time: chrono::Utc::now(),
            end_time: None,
        }
    }

    /// Fold one transition into the accumulators.
    pub fn record(&mut self, reward: Reward) {
        self.total_reward += reward.value();
        self.steps += 1;
    }

    /// Mark the episode as finished.
    pub fn finish(&mut self) {
        self.end_time = Some(chrono::Utc::now());
    }
}

/// Core environment trait.
///
/// This is the full surface the training harness relies on; any concrete
/// environment (or a scripted test double) implements exactly these calls.
#[async_trait]
pub trait Environment: Send + Sync {
    /// Action type
    type Action: Action;

    /// Get the action space
    fn action_space(&self) -> Box<dyn ActionSpace<Action = Self::Action>>;

    /// Reset the environment and return the initial state
    async fn reset(&mut self) -> crate::Result<SeedState>;

    /// Execute an action, returning the next state, terminal flag and reward
    async fn execute(&mut self, action: Self::Action) -> crate::Result<Step>;

    /// Release the environment's underlying resources
    async fn close(&mut self) -> crate::Result<()> {
        Ok(())
    }
}

#[async_trait]
impl<E> Environment for Box<E>
where
    E: Environment + ?Sized,
{
    type Action = E::Action;

    fn action_space(&self) -> Box<dyn ActionSpace<Action = Self::Action>> {
        (**self).action_space()
    }

    async fn reset(&mut self) -> crate::Result<SeedState> {
        (**self).reset().await
    }

    async fn execute(&mut self, action: Self::Action) -> crate::Result<Step> {
        (**self).execute(action).await
    }

    async fn close(&mut self) -> crate::Result<()> {
        (**self).close().await
    }
}
