//! Random agent for baseline comparisons

use async_trait::async_trait;

use badseeds_core::{ActionSpace, Agent, AgentConfig, Reward, SeedState};

/// Agent that selects actions uniformly at random.
///
/// Stands in for the external learning agent when the harness is exercised
/// end to end; it keeps no learned state, so `observe` is a no-op.
pub struct RandomAgent<S> {
    action_space: S,
    config: AgentConfig,
}

impl<S> RandomAgent<S>
where
    S: ActionSpace,
{
    /// Create a new random agent over an action space
    pub fn new(action_space: S) -> Self {
        Self {
            action_space,
            config: AgentConfig::default(),
        }
    }

    /// Create a random agent carrying an explicit configuration
    pub fn with_config(action_space: S, config: AgentConfig) -> Self {
        Self {
            action_space,
            config,
        }
    }
}

#[async_trait]
impl<S> Agent for RandomAgent<S>
where
    S: ActionSpace + Send + Sync + 'static,
{
    type Action = S::Action;

    async fn act(&self, _state: &SeedState) -> badseeds_core::Result<Self::Action> {
        Ok(self.action_space.sample())
    }

    async fn observe(&mut self, _terminal: bool, _reward: Reward) -> badseeds_core::Result<()> {
        Ok(())
    }

    async fn save(&self, path: &std::path::Path) -> badseeds_core::Result<()> {
        tokio::fs::create_dir_all(path).await?;
        let json = serde_json::to_string_pretty(&self.config)?;
        tokio::fs::write(path.join("agent.json"), json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use badseeds_core::DiscreteSpace;

    #[tokio::test]
    async fn actions_come_from_the_space() {
        let space = DiscreteSpace::new(4);
        let agent = RandomAgent::new(DiscreteSpace::new(4));
        let state = SeedState::new(vec![0.0, 0.0, 1.0, -1.0]);
        for _ in 0..50 {
            let action = agent.act(&state).await.unwrap();
            assert!(space.contains(&action));
        }
    }

    #[tokio::test]
    async fn save_writes_the_config() {
        let dir = std::env::temp_dir().join(format!("badseeds-agent-{}", std::process::id()));
        let agent = RandomAgent::new(DiscreteSpace::new(2));
        agent.save(&dir).await.unwrap();
        let json = tokio::fs::read_to_string(dir.join("agent.json"))
            .await
            .unwrap();
        let config: AgentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.batch_size, AgentConfig::default().batch_size);
        tokio::fs::remove_dir_all(&dir).await.ok();
    }
}
