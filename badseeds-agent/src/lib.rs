//! Baseline agents for bad-seeds training runs
//!
//! The learning agent proper (A2C) is an external collaborator behind the
//! [`badseeds_core::Agent`] interface; this crate holds the baselines the
//! harness can run on its own.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod random;

// Re-export agents
pub use random::RandomAgent;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::RandomAgent;
    pub use badseeds_core::prelude::*;
}
