//! Seed-measurement state representations

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for states handed from an environment to an agent
pub trait State: Clone + Debug + Send + Sync {
    /// Get a feature representation of the state
    fn features(&self) -> Vec<f64>;
}

/// Ordered numeric observation emitted by the CartSeed environments.
///
/// The layout is fixed: index 0 is whether the seed under the cart is bad,
/// index 1 is the measurement count of that seed (the quantity driving
/// reward shaping), index 2 is the number of unfinished seeds, index 3 is
/// the remaining step budget (-1 when unlimited).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedState {
    /// The observation vector
    pub data: Vec<f64>,
}

impl SeedState {
    /// Create a state from an observation vector
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }
}

impl State for SeedState {
    fn features(&self) -> Vec<f64> {
        self.data.clone()
    }
}

impl From<Vec<f64>> for SeedState {
    fn from(data: Vec<f64>) -> Self {
        Self { data }
    }
}
