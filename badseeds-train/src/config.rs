//! Flat training-run configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use badseeds_core::AgentConfig;
use badseeds_env::CartSeedConfig;

/// Summarizer (run-artifact) options forwarded to the agent constructor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Base directory for run summaries
    pub directory: String,
    /// Summary labels to record, or `all`
    pub labels: Vec<String>,
    /// Store values every N timesteps
    pub frequency: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            directory: "training_data/a2c_cartseed".into(),
            labels: vec!["all".into()],
            frequency: 1,
        }
    }
}

/// Flat set of named hyperparameters for one training run.
///
/// The harness interprets only the fields it needs to assemble the run;
/// everything else travels opaquely to the agent and environment
/// constructors, with unrecognized keys collected in `params`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// Agent label (informational; the learning agent is external)
    pub agent: String,
    /// Batch size
    pub batch_size: usize,
    /// Learning rate
    pub learning_rate: f64,
    /// Discount factor
    pub discount: f64,
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
    /// Environment version (1 or 2; anything else fails the run)
    pub env_version: u32,
    /// Number of seeds in the row
    pub seed_count: usize,
    /// Number of bad seeds; `None` samples a count per episode
    pub bad_seed_count: Option<usize>,
    /// Measurements needed to finish a seed
    pub max_count: usize,
    /// Visit seeds in order
    pub sequential: bool,
    /// Allow measuring finished seeds
    pub revisiting: bool,
    /// Per-episode step budget inside the environment
    pub timelimit: Option<usize>,
    /// Outer episode step cap applied as a wrapper
    pub max_episode_timesteps: Option<usize>,
    /// Scoring key; unknown keys fall back to the built-in default reward
    pub scoring: Option<String>,
    /// Number of episodes to run
    pub episodes: usize,
    /// Requested accelerator index
    pub gpu_index: usize,
    /// Drive the manual episode loop instead of the managed runner
    pub manual: bool,
    /// Summarizer options
    pub summarizer: SummarizerConfig,
    /// Additional parameters, not interpreted by the harness
    #[serde(flatten)]
    pub params: serde_json::Map<String, serde_json::Value>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            agent: "a2c".into(),
            batch_size: 128,
            learning_rate: 1e-3,
            discount: 0.99,
            exploration: 0.0,
            l2_regularization: 0.0,
            entropy_regularization: 0.0,
            variable_noise: 0.0,
            horizon: None,
            env_version: 2,
            seed_count: 10,
            bad_seed_count: None,
            max_count: 10,
            sequential: true,
            revisiting: true,
            timelimit: None,
            max_episode_timesteps: None,
            scoring: Some("default".into()),
            episodes: 3000,
            gpu_index: 0,
            manual: false,
            summarizer: SummarizerConfig::default(),
            params: serde_json::Map::new(),
        }
    }
}

impl TrainConfig {
    /// Load a configuration from a JSON file; absent keys keep defaults.
    pub fn from_file(path: &Path) -> badseeds_core::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Environment slice of the configuration
    #[must_use]
    pub fn cart_seed(&self) -> CartSeedConfig {
        CartSeedConfig {
            seed_count: self.seed_count,
            bad_seed_count: self.bad_seed_count,
            max_count: self.max_count,
            sequential: self.sequential,
            revisiting: self.revisiting,
            measurement_time: self.timelimit,
            rng_seed: None,
        }
    }

    /// Agent slice of the configuration, forwarded opaquely
    #[must_use]
    pub fn agent_config(&self) -> AgentConfig {
        AgentConfig {
            learning_rate: self.learning_rate,
            discount: self.discount,
            batch_size: self.batch_size,
            exploration: self.exploration,
            l2_regularization: self.l2_regularization,
            entropy_regularization: self.entropy_regularization,
            variable_noise: self.variable_noise,
            horizon: self.horizon,
            params: self.params.clone(),
        }
    }

    /// Directory holding this run's summaries, keyed by the hyperparameters
    /// that distinguish runs from each other.
    #[must_use]
    pub fn run_directory(&self) -> PathBuf {
        let timelimit = self
            .timelimit
            .map_or_else(|| "none".into(), |t| t.to_string());
        let scoring = self.scoring.as_deref().unwrap_or("none");
        PathBuf::from(&self.summarizer.directory).join(format!(
            "{}_{}_{}_{}",
            self.env_version, timelimit, scoring, self.batch_size
        ))
    }
}
