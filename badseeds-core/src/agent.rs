//! Agent traits and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Action, Reward, SeedState};

/// Flat hyperparameter set consumed opaquely by agent constructors.
///
/// The harness never interprets these beyond passing them along; fields the
/// harness does not name travel in `params`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Learning rate
    pub learning_rate: f64,
    /// Discount factor
    pub discount: f64,
    /// Batch size for training
    pub batch_size: usize,
    /// Exploration rate
    pub exploration: f64,
    /// L2 regularization coefficient
    pub l2_regularization: f64,
    /// Entropy regularization coefficient
    pub entropy_regularization: f64,
    /// Variable noise
    pub variable_noise: f64,
    /// Estimation horizon
    pub horizon: Option<usize>,
    /// Additional parameters
    #[serde(flatten)]
    pub params: serde_json::Map<String, serde_json::Value>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            learning_rate: 1e-3,
            discount: 0.99,
            batch_size: 16,
            exploration: 0.0,
            l2_regularization: 0.0,
            entropy_regularization: 0.0,
            variable_noise: 0.0,
            horizon: None,
            params: serde_json::Map::new(),
        }
    }
}

/// Core agent trait.
///
/// The learning internals behind this interface are an opaque collaborator;
/// the harness only requests actions, feeds back transition outcomes, and
/// tears the agent down at end of run.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Action type
    type Action: Action;

    /// Select an action for the given state
    async fn act(&self, state: &SeedState) -> crate::Result<Self::Action>;

    /// Feed back the terminal flag and reward of the transition the agent's
    /// last action produced
    async fn observe(&mut self, terminal: bool, reward: Reward) -> crate::Result<()>;

    /// Save the agent to a directory
    async fn save(&self, path: &std::path::Path) -> crate::Result<()>;

    /// Release the agent's underlying resources
    async fn close(&mut self) -> crate::Result<()> {
        Ok(())
    }
}
