//! Environment wrappers

use async_trait::async_trait;

use badseeds_core::{ActionSpace, Environment, SeedState, Step};

/// Wrapper that ends episodes after a fixed number of steps.
///
/// Inner rewards are passed through untouched; only the terminal flag is
/// raised once the limit is reached.
pub struct TimeLimit<E> {
    /// Inner environment
    pub env: E,
    /// Maximum steps per episode
    pub max_steps: usize,
    steps: usize,
}

impl<E> TimeLimit<E> {
    /// Create a new time limit wrapper
    pub fn new(env: E, max_steps: usize) -> Self {
        Self {
            env,
            max_steps,
            steps: 0,
        }
    }
}

#[async_trait]
impl<E> Environment for TimeLimit<E>
where
    E: Environment,
{
    type Action = E::Action;

    fn action_space(&self) -> Box<dyn ActionSpace<Action = Self::Action>> {
        self.env.action_space()
    }

    async fn reset(&mut self) -> badseeds_core::Result<SeedState> {
        self.steps = 0;
        self.env.reset().await
    }

    async fn execute(&mut self, action: Self::Action) -> badseeds_core::Result<Step> {
        let mut step = self.env.execute(action).await?;
        self.steps += 1;
        if self.steps >= self.max_steps {
            step.terminal = true;
        }
        Ok(step)
    }

    async fn close(&mut self) -> badseeds_core::Result<()> {
        self.env.close().await
    }
}
