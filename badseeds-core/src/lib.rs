//! Core traits and types for bad-seeds training runs
//!
//! This crate provides the narrow capability interfaces shared by the
//! bad-seeds environments, agents, and training harness, together with
//! the reward-shaping dispatch used to configure an environment.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod agent;
pub mod environment;
pub mod error;
pub mod reward;
pub mod state;

// Re-export core traits and types
pub use action::{Action, ActionSpace, DiscreteSpace, SeedAction};
pub use agent::{Agent, AgentConfig};
pub use environment::{Environment, EpisodeRecord, Step};
pub use error::{BadSeedsError, Result};
pub use reward::{scoring, Reward, ShapingFn};
pub use state::{SeedState, State};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Action, ActionSpace, Agent, Environment, Result, Reward, SeedAction, SeedState, Step,
    };
}
