//! CartSeed measurement environments
//!
//! A cart sits over a row of seeds, a subset of which are bad. Each step the
//! agent either measures the seed under the cart or moves the cart. Bad-seed
//! measurements are scored by the shaping function bound at construction;
//! when none is configured the environment falls back to its built-in
//! default reward.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use badseeds_core::{
    ActionSpace, BadSeedsError, DiscreteSpace, Environment, Reward, SeedAction, SeedState,
    ShapingFn, Step,
};

/// Built-in reward for a scored measurement when no shaping function is
/// bound.
const DEFAULT_SEED_REWARD: f64 = 1.0;

/// Reward accounting used by an environment version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RewardRule {
    /// Version 1: every bad-seed measurement is scored
    PerMeasurement,
    /// Version 2: only the measurement that completes a bad seed is scored
    OnCompletion,
}

/// Configuration for the CartSeed environments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSeedConfig {
    /// Number of seeds in the row
    pub seed_count: usize,
    /// Number of bad seeds; `None` samples a count per episode
    pub bad_seed_count: Option<usize>,
    /// Measurements needed to finish a seed
    pub max_count: usize,
    /// Visit seeds in order (two actions) instead of free seed selection
    pub sequential: bool,
    /// Allow measuring seeds that are already finished
    pub revisiting: bool,
    /// Step budget per episode; `None` runs until every seed is finished
    pub measurement_time: Option<usize>,
    /// Random seed for bad-seed placement
    pub rng_seed: Option<u64>,
}

impl Default for CartSeedConfig {
    fn default() -> Self {
        Self {
            seed_count: 10,
            bad_seed_count: None,
            max_count: 10,
            sequential: true,
            revisiting: true,
            measurement_time: None,
            rng_seed: None,
        }
    }
}

#[derive(Debug, Clone)]
struct Seed {
    bad: bool,
    count: usize,
}

/// The CartSeed environment, in its per-measurement (v1) or
/// completion-scored (v2) variant.
#[derive(Debug)]
pub struct CartSeed {
    config: CartSeedConfig,
    rule: RewardRule,
    // Bound once at construction, never swapped mid-run.
    shaping: Option<ShapingFn>,
    seeds: Vec<Seed>,
    cart: usize,
    steps: usize,
    done: bool,
    rng: StdRng,
}

impl CartSeed {
    /// Create a version-1 environment: every bad-seed measurement is scored.
    pub fn v1(config: CartSeedConfig, shaping: Option<ShapingFn>) -> badseeds_core::Result<Self> {
        Self::new(config, shaping, RewardRule::PerMeasurement)
    }

    /// Create a version-2 environment: only the measurement completing a bad
    /// seed is scored.
    pub fn v2(config: CartSeedConfig, shaping: Option<ShapingFn>) -> badseeds_core::Result<Self> {
        Self::new(config, shaping, RewardRule::OnCompletion)
    }

    fn new(
        config: CartSeedConfig,
        shaping: Option<ShapingFn>,
        rule: RewardRule,
    ) -> badseeds_core::Result<Self> {
        if config.seed_count == 0 {
            return Err(BadSeedsError::Environment(
                "seed_count must be positive".into(),
            ));
        }
        if config.max_count == 0 {
            return Err(BadSeedsError::Environment(
                "max_count must be positive".into(),
            ));
        }
        if let Some(bad) = config.bad_seed_count {
            if bad > config.seed_count {
                return Err(BadSeedsError::Environment(format!(
                    "bad_seed_count {bad} exceeds seed_count {}",
                    config.seed_count
                )));
            }
        } else if config.seed_count < 2 {
            return Err(BadSeedsError::Environment(
                "sampled bad_seed_count requires at least two seeds".into(),
            ));
        }

        let rng = match config.rng_seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        // Seeds are placed at reset; until then the episode is terminal so
        // execute() demands a reset first.
        Ok(Self {
            config,
            rule,
            shaping,
            seeds: Vec::new(),
            cart: 0,
            steps: 0,
            done: true,
            rng,
        })
    }

    fn unfinished(&self) -> usize {
        self.seeds
            .iter()
            .filter(|s| s.count < self.config.max_count)
            .count()
    }

    fn all_finished(&self) -> bool {
        self.unfinished() == 0
    }

    fn observation(&self) -> SeedState {
        let seed = &self.seeds[self.cart];
        let remaining = match self.config.measurement_time {
            Some(t) => t.saturating_sub(self.steps) as f64,
            None => -1.0,
        };
        SeedState::new(vec![
            f64::from(u8::from(seed.bad)),
            seed.count as f64,
            self.unfinished() as f64,
            remaining,
        ])
    }

    /// Move the cart to the next seed, skipping finished ones when
    /// revisiting is off.
    fn advance(&mut self) {
        let n = self.seeds.len();
        for offset in 1..=n {
            let idx = (self.cart + offset) % n;
            if self.config.revisiting || self.seeds[idx].count < self.config.max_count {
                self.cart = idx;
                return;
            }
        }
    }

    /// Measure the seed under the cart and return the reward value.
    fn measure(&mut self) -> f64 {
        let max = self.config.max_count;
        let finished = self.seeds[self.cart].count >= max;
        if finished && !self.config.revisiting {
            // Measuring a finished seed without revisiting is a no-op.
            return 0.0;
        }

        self.seeds[self.cart].count += 1;
        let bad = self.seeds[self.cart].bad;
        let count = self.seeds[self.cart].count;
        let measured = self.observation();

        let scored = match self.rule {
            RewardRule::PerMeasurement => bad,
            RewardRule::OnCompletion => bad && count == max,
        };
        let value = if scored {
            // Explicit fallback: no shaping function means the built-in
            // default reward, never an error.
            match self.shaping {
                Some(f) => f(&measured.data),
                None => DEFAULT_SEED_REWARD,
            }
        } else {
            0.0
        };

        if self.config.sequential && count >= max {
            self.advance();
        }
        value
    }
}

#[async_trait]
impl Environment for CartSeed {
    type Action = SeedAction;

    fn action_space(&self) -> Box<dyn ActionSpace<Action = Self::Action>> {
        let n = if self.config.sequential {
            2
        } else {
            self.config.seed_count
        };
        Box::new(DiscreteSpace::new(n))
    }

    async fn reset(&mut self) -> badseeds_core::Result<SeedState> {
        let bad = match self.config.bad_seed_count {
            Some(b) => b,
            None => self.rng.gen_range(1..self.config.seed_count),
        };

        let mut seeds: Vec<Seed> = (0..self.config.seed_count)
            .map(|_| Seed {
                bad: false,
                count: 0,
            })
            .collect();
        for idx in rand::seq::index::sample(&mut self.rng, self.config.seed_count, bad) {
            seeds[idx].bad = true;
        }

        self.seeds = seeds;
        self.cart = 0;
        self.steps = 0;
        self.done = false;
        tracing::debug!(
            seeds = self.config.seed_count,
            bad_seeds = bad,
            "episode reset"
        );
        Ok(self.observation())
    }

    async fn execute(&mut self, action: SeedAction) -> badseeds_core::Result<Step> {
        if self.done {
            return Err(BadSeedsError::Environment(
                "episode is terminal; reset the environment first".into(),
            ));
        }

        self.steps += 1;
        let reward_value = if self.config.sequential {
            match action.0 {
                0 => self.measure(),
                1 => {
                    self.advance();
                    0.0
                }
                n => {
                    return Err(BadSeedsError::InvalidAction(format!(
                        "sequential mode expects action 0 or 1, got {n}"
                    )))
                }
            }
        } else {
            if action.0 >= self.config.seed_count {
                return Err(BadSeedsError::InvalidAction(format!(
                    "seed index {} out of range 0..{}",
                    action.0, self.config.seed_count
                )));
            }
            self.cart = action.0;
            self.measure()
        };

        let budget_spent = self
            .config
            .measurement_time
            .is_some_and(|t| self.steps >= t);
        self.done = self.all_finished() || budget_spent;

        Ok(Step {
            state: self.observation(),
            terminal: self.done,
            reward: Reward::new(reward_value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use badseeds_core::scoring;

    const MEASURE: SeedAction = SeedAction(0);

    fn single_bad_seed(max_count: usize) -> CartSeedConfig {
        CartSeedConfig {
            seed_count: 1,
            bad_seed_count: Some(1),
            max_count,
            sequential: true,
            revisiting: false,
            measurement_time: None,
            rng_seed: Some(7),
        }
    }

    #[tokio::test]
    async fn built_in_default_rewards_each_bad_measurement() {
        let mut env = CartSeed::v1(single_bad_seed(3), None).unwrap();
        env.reset().await.unwrap();

        let mut total = 0.0;
        let mut steps = 0;
        loop {
            let step = env.execute(MEASURE).await.unwrap();
            total += step.reward.value();
            steps += 1;
            if step.terminal {
                break;
            }
        }
        assert_relative_eq!(total, 3.0);
        assert_eq!(steps, 3);
    }

    #[tokio::test]
    async fn bound_shaping_scores_measurements() {
        // tt2 pays 2 once the measurement count reaches 5, else 1:
        // counts 1..=10 give 4 * 1 + 6 * 2.
        let mut env = CartSeed::v1(single_bad_seed(10), scoring::shaping_for("tt2")).unwrap();
        env.reset().await.unwrap();

        let mut total = 0.0;
        loop {
            let step = env.execute(MEASURE).await.unwrap();
            total += step.reward.value();
            if step.terminal {
                break;
            }
        }
        assert_relative_eq!(total, 16.0);
    }

    #[tokio::test]
    async fn v2_scores_only_the_completing_measurement() {
        let mut env = CartSeed::v2(single_bad_seed(4), scoring::shaping_for("linear")).unwrap();
        env.reset().await.unwrap();

        let mut rewards = Vec::new();
        loop {
            let step = env.execute(MEASURE).await.unwrap();
            rewards.push(step.reward.value());
            if step.terminal {
                break;
            }
        }
        // linear reads the measurement count, 4 at completion
        assert_eq!(rewards, vec![0.0, 0.0, 0.0, 4.0]);
    }

    #[tokio::test]
    async fn good_seeds_earn_nothing() {
        let config = CartSeedConfig {
            bad_seed_count: Some(0),
            seed_count: 2,
            max_count: 2,
            ..single_bad_seed(2)
        };
        let mut env = CartSeed::v1(config, None).unwrap();
        env.reset().await.unwrap();

        let mut total = 0.0;
        loop {
            let step = env.execute(MEASURE).await.unwrap();
            total += step.reward.value();
            if step.terminal {
                break;
            }
        }
        assert_relative_eq!(total, 0.0);
    }

    #[tokio::test]
    async fn measurement_time_truncates_the_episode() {
        let config = CartSeedConfig {
            measurement_time: Some(2),
            ..single_bad_seed(5)
        };
        let mut env = CartSeed::v1(config, None).unwrap();
        env.reset().await.unwrap();

        let first = env.execute(MEASURE).await.unwrap();
        assert!(!first.terminal);
        let second = env.execute(MEASURE).await.unwrap();
        assert!(second.terminal);
    }

    #[tokio::test]
    async fn execute_after_terminal_is_an_error() {
        let mut env = CartSeed::v1(single_bad_seed(1), None).unwrap();
        env.reset().await.unwrap();
        let step = env.execute(MEASURE).await.unwrap();
        assert!(step.terminal);
        assert!(env.execute(MEASURE).await.is_err());
    }

    #[tokio::test]
    async fn execute_before_reset_is_an_error() {
        let mut env = CartSeed::v1(single_bad_seed(1), None).unwrap();
        assert!(env.execute(MEASURE).await.is_err());
    }

    #[tokio::test]
    async fn sequential_mode_rejects_unknown_actions() {
        let mut env = CartSeed::v1(single_bad_seed(2), None).unwrap();
        env.reset().await.unwrap();
        assert!(env.execute(SeedAction(2)).await.is_err());
    }

    #[tokio::test]
    async fn free_selection_measures_the_chosen_seed() {
        let config = CartSeedConfig {
            seed_count: 3,
            bad_seed_count: Some(3),
            max_count: 1,
            sequential: false,
            ..single_bad_seed(1)
        };
        let mut env = CartSeed::v1(config, None).unwrap();
        env.reset().await.unwrap();

        let step = env.execute(SeedAction(2)).await.unwrap();
        assert_relative_eq!(step.reward.value(), 1.0);
        // Observation tracks the measured seed: one measurement taken,
        // two seeds left unfinished.
        assert_relative_eq!(step.state.data[1], 1.0);
        assert_relative_eq!(step.state.data[2], 2.0);
        assert!(env.execute(SeedAction(3)).await.is_err());
    }

    #[tokio::test]
    async fn observation_layout_is_stable() {
        let config = CartSeedConfig {
            measurement_time: Some(10),
            ..single_bad_seed(3)
        };
        let mut env = CartSeed::v1(config, None).unwrap();
        let state = env.reset().await.unwrap();
        assert_eq!(state.data.len(), 4);
        assert_relative_eq!(state.data[0], 1.0); // the only seed is bad
        assert_relative_eq!(state.data[1], 0.0); // nothing measured yet
        assert_relative_eq!(state.data[2], 1.0); // one unfinished seed
        assert_relative_eq!(state.data[3], 10.0); // full budget left
    }

    #[test]
    fn invalid_configurations_are_rejected() {
        assert!(CartSeed::v1(
            CartSeedConfig {
                seed_count: 0,
                ..CartSeedConfig::default()
            },
            None,
        )
        .is_err());
        assert!(CartSeed::v1(
            CartSeedConfig {
                max_count: 0,
                ..CartSeedConfig::default()
            },
            None,
        )
        .is_err());
        assert!(CartSeed::v1(
            CartSeedConfig {
                seed_count: 4,
                bad_seed_count: Some(5),
                ..CartSeedConfig::default()
            },
            None,
        )
        .is_err());
        assert!(CartSeed::v1(
            CartSeedConfig {
                seed_count: 1,
                bad_seed_count: None,
                ..CartSeedConfig::default()
            },
            None,
        )
        .is_err());
    }
}
