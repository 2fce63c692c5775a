#![deny(clippy::all, clippy::pedantic)]

//! Fixed-length hopper rollouts against the fixture simulator.
//!
//! Drives the environment adapter through the full episodic loop: reset,
//! sample a random action, step, accumulate the return, stop on `done`.
//! The fixture scene sinks a little every tick, so episodes terminate on
//! the standing threshold rather than running out the horizon.

use anyhow::Result;
use clap::Parser;
use hopper::{EnvConfig, HopperEnv};
use simclient::{MockSim, SimulatorClient};

#[derive(Parser, Debug)]
#[command(about = "Run random-policy hopper episodes against the fixture simulator")]
struct Args {
    /// Simulator address.
    #[arg(long, default_value = "127.0.0.1")]
    addr: String,
    /// Simulator port.
    #[arg(long, default_value_t = 19997)]
    port: u16,
    /// Number of episodes to run.
    #[arg(long, default_value_t = 16)]
    episodes: u32,
    /// Maximum steps per episode.
    #[arg(long, default_value_t = 256)]
    horizon: u32,
    /// Per-tick torso descent of the fixture scene.
    #[arg(long, default_value_t = 0.005)]
    descent: f32,
}

/// Builds the fixture scene the default hopper configuration expects.
fn fixture_scene(args: &Args) -> Result<MockSim> {
    let mut sim = MockSim::connect(&args.addr, args.port)?;
    for name in EnvConfig::default().required_names() {
        sim.add_object(name);
    }
    let torso = sim.resolve_handle("torso")?;
    sim.set_position(torso, [0.0, 0.0, 0.45]);
    sim.set_descent(torso, args.descent);
    Ok(sim)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let sim = fixture_scene(&args)?;
    let mut env = HopperEnv::new(sim, EnvConfig::default())?;
    tracing::info!(
        actions = env.action_space().dim(),
        observations = env.observation_space().dim(),
        "environment ready"
    );

    for episode in 0..args.episodes {
        let mut observation = env.reset()?;
        let mut total_reward = 0.0_f32;
        let mut steps = 0_u32;
        for _ in 0..args.horizon {
            let action = env.action_space().sample();
            let step = env.step(&action)?;
            total_reward += step.reward;
            observation = step.observation;
            steps += 1;
            if step.done {
                break;
            }
        }
        tracing::info!(
            episode,
            steps,
            total_reward,
            final_height = observation[0],
            "episode finished"
        );
    }

    env.close()?;
    Ok(())
}
