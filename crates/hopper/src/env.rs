use std::collections::HashMap;

use simclient::{ObjectHandle, SimError, SimulatorClient};

use crate::action::ActionCodec;
use crate::config::EnvConfig;
use crate::error::EnvError;
use crate::observation::ObservationBuilder;
use crate::policy::{RewardPolicy, TerminationPolicy};
use crate::registry::HandleRegistry;
use crate::spaces::BoxSpace;

/// Episode lifecycle phase.
///
/// Actuator commands and physics advances are only valid while `Running`;
/// starting a new episode always forces a stop of any live simulation
/// first, so episodes never leak simulator state into one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeState {
    Idle,
    Running,
}

/// Outcome of one control step.
#[derive(Debug, Clone)]
pub struct Step {
    pub observation: Vec<f32>,
    pub reward: f32,
    pub done: bool,
    /// Auxiliary diagnostics; currently always empty.
    pub info: HashMap<String, String>,
}

/// Episodic control-loop adapter for the hopper scene in a remote simulator.
///
/// Owns the simulator connection for its whole lifetime and enforces the
/// `reset`/`step` state machine on top of it. All simulator interaction is
/// synchronous; exactly one call is in flight at a time.
pub struct HopperEnv<C: SimulatorClient> {
    client: C,
    registry: HandleRegistry,
    codec: ActionCodec,
    observer: ObservationBuilder,
    reward: RewardPolicy,
    termination: TerminationPolicy,
    action_space: BoxSpace,
    observation_space: BoxSpace,
    state: EpisodeState,
}

impl<C: SimulatorClient> HopperEnv<C> {
    /// Binds the configured scene objects and builds the adapter.
    ///
    /// Every configured name is resolved exactly once, and the first
    /// unresolvable one aborts construction; there is no partially
    /// initialized adapter.
    pub fn new(mut client: C, config: EnvConfig) -> Result<Self, EnvError> {
        if config.joint_names.is_empty() {
            return Err(EnvError::Configuration("at least one actuated joint is required"));
        }
        if config.shape_names.is_empty() {
            return Err(EnvError::Configuration("at least one tracked body is required"));
        }

        let registry = HandleRegistry::resolve_all(&mut client, config.required_names())?;
        let actuators = lookup_all(&registry, &config.joint_names)?;
        let tracked = lookup_all(&registry, &config.shape_names)?;

        let codec = ActionCodec::new(actuators, config.max_velocity);
        let observer = ObservationBuilder::new(tracked);
        let action_space = BoxSpace::symmetric(config.max_velocity, codec.num_actuators());
        let observation_space = BoxSpace::unbounded(observer.size());

        tracing::info!(
            actuators = codec.num_actuators(),
            bodies = observer.num_bodies(),
            observation = observer.size(),
            "hopper environment initialized"
        );

        Ok(Self {
            client,
            registry,
            codec,
            observer,
            reward: RewardPolicy::default(),
            termination: TerminationPolicy::default(),
            action_space,
            observation_space,
            state: EpisodeState::Idle,
        })
    }

    /// Starts a fresh episode and returns the initial observation.
    ///
    /// Any running simulation is stopped first, so calling `reset` twice in
    /// a row is always safe. On success the adapter is `Running`.
    pub fn reset(&mut self) -> Result<Vec<f32>, EnvError> {
        if self.client.is_running() {
            self.client.stop_simulation()?;
            self.state = EpisodeState::Idle;
        }
        self.client.start_simulation()?;
        self.state = EpisodeState::Running;
        self.observer.build(&mut self.client)
    }

    /// Applies one action, advances the simulator one tick, and reports
    /// the resulting observation, reward, and termination flag.
    ///
    /// The action is validated before any simulator interaction; an invalid
    /// action leaves both the episode and the simulation untouched. The
    /// adapter stays `Running` even when `done` is reported; the caller
    /// decides when to `reset`. A transport fault mid-step also leaves the
    /// state `Running` — recovery is an explicit `reset`.
    pub fn step(&mut self, action: &[f32]) -> Result<Step, EnvError> {
        if self.state != EpisodeState::Running {
            return Err(EnvError::EpisodeNotStarted);
        }
        let commands = self.codec.encode(action)?;
        for (handle, velocity) in commands {
            self.client.set_velocity(handle, velocity)?;
        }
        self.client.advance_one_step()?;
        let observation = self.observer.build(&mut self.client)?;
        let reward = self.reward.reward(&observation);
        let done = self.termination.is_done(&observation);
        Ok(Step { observation, reward, done, info: HashMap::new() })
    }

    /// Stops any running simulation and hands the connection back, ending
    /// the adapter's ownership of it deterministically.
    pub fn close(mut self) -> Result<C, EnvError> {
        if self.client.is_running() {
            self.client.stop_simulation()?;
        }
        Ok(self.client)
    }

    /// Seeding hook kept for interface parity; the adapter holds no
    /// pseudo-random state, so this is a no-op reporting no seeds.
    pub fn seed(&mut self, _seed: Option<u64>) -> Vec<u64> {
        Vec::new()
    }

    #[must_use]
    pub fn action_space(&self) -> &BoxSpace {
        &self.action_space
    }

    #[must_use]
    pub fn observation_space(&self) -> &BoxSpace {
        &self.observation_space
    }

    #[must_use]
    pub fn state(&self) -> EpisodeState {
        self.state
    }

    /// Handle of a scene object resolved at construction.
    #[must_use]
    pub fn handle(&self, name: &str) -> Option<ObjectHandle> {
        self.registry.get(name)
    }
}

fn lookup_all(
    registry: &HandleRegistry,
    names: &[String],
) -> Result<Vec<ObjectHandle>, EnvError> {
    names
        .iter()
        .map(|name| {
            registry.get(name).ok_or_else(|| EnvError::UnresolvedObject {
                name: name.clone(),
                source: SimError::UnknownObject(name.clone()),
            })
        })
        .collect()
}
