//! Training entry point: assemble a run from configuration and hand it to
//! the episode loop.

use std::path::Path;

use tracing::{info, warn};

use badseeds_agent::RandomAgent;
use badseeds_core::{scoring, Environment, SeedAction};
use badseeds_env::{build_cart_seed, TimeLimit};
use badseeds_train::{device, run_manual, Device, Runner, TrainConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => TrainConfig::from_file(Path::new(&path))?,
        None => TrainConfig::default(),
    };

    // Placement is an optimization: a failed probe logs a warning and the
    // run continues on the default device.
    let device = match device::select_device(config.gpu_index) {
        Ok(device) => device,
        Err(warning) => {
            warn!(%warning, "falling back to cpu");
            Device::Cpu
        }
    };
    info!(%device, "device selected");

    // Unknown scoring keys fall back to the environment's built-in default
    // reward; an unknown environment version fails the run here instead.
    let shaping = config.scoring.as_deref().and_then(scoring::shaping_for);
    let env = build_cart_seed(config.env_version, config.cart_seed(), shaping)?;
    let mut env: Box<dyn Environment<Action = SeedAction>> = match config.max_episode_timesteps {
        Some(limit) => Box::new(TimeLimit::new(env, limit)),
        None => Box::new(env),
    };

    info!(
        run_directory = %config.run_directory().display(),
        episodes = config.episodes,
        scoring = config.scoring.as_deref().unwrap_or("none"),
        "starting run"
    );

    let mut agent = RandomAgent::with_config(env.action_space(), config.agent_config());

    if config.manual {
        // Fail fast, no partial artifacts: the manual loop saves and closes
        // nothing, matching its interactive use.
        run_manual(&mut env, &mut agent, config.episodes).await?;
    } else {
        let summary = Runner::new(env, agent)
            .run_to_end(config.episodes, Some(Path::new("saved_models")))
            .await?;
        info!(
            episodes = summary.episodes,
            total_steps = summary.total_steps,
            mean_reward = summary.mean_reward,
            "run complete"
        );
    }

    Ok(())
}
