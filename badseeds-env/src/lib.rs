//! CartSeed environments for bad-seeds training runs
//!
//! This crate provides the measurement environments the training harness
//! drives: the two CartSeed variants, the fail-fast version dispatch that
//! constructs them, and a time-limit wrapper.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod cart_seed;
pub mod version;
pub mod wrappers;

// Re-export environments
pub use cart_seed::{CartSeed, CartSeedConfig};
pub use version::{build_cart_seed, EnvVersion};
pub use wrappers::TimeLimit;

// Re-export core types
pub use badseeds_core::{
    Action, ActionSpace, Environment, Reward, SeedAction, SeedState, ShapingFn, Step,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{build_cart_seed, CartSeed, CartSeedConfig, TimeLimit};
    pub use badseeds_core::prelude::*;
}
