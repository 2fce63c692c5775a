#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

//! # Hopper environment adapter
//!
//! Exposes a legged hopper robot living in a remote physics simulator as an
//! episodic reinforcement learning environment: [`HopperEnv::reset`] starts
//! a trial and [`HopperEnv::step`] applies one action vector, advances the
//! simulation a single tick, and reports observation, reward, and
//! termination.
//!
//! The simulator is an external collaborator reached through the
//! [`simclient::SimulatorClient`] trait. This crate only contains the
//! adapter logic:
//!
//! - [`HandleRegistry`] binds the configured scene names to simulator
//!   handles once, at construction.
//! - [`ActionCodec`] validates the agent's action vector and pairs it with
//!   the actuated joints.
//! - [`ObservationBuilder`] assembles the fixed-layout observation
//!   `[torso_z] ++ per body (angular(3) ++ linear(3))`.
//! - [`RewardPolicy`] and [`TerminationPolicy`] are pure functions over the
//!   current observation, reading the declared indices
//!   [`HEIGHT_INDEX`] and [`FORWARD_VELOCITY_INDEX`].
//! - [`HopperEnv`] is the episode state machine tying it all together.

mod action;
mod config;
mod env;
mod error;
mod observation;
mod policy;
mod registry;
mod spaces;

pub use action::ActionCodec;
pub use config::EnvConfig;
pub use env::{EpisodeState, HopperEnv, Step};
pub use error::EnvError;
pub use observation::{ObservationBuilder, FORWARD_VELOCITY_INDEX, HEIGHT_INDEX};
pub use policy::{RewardPolicy, TerminationPolicy};
pub use registry::HandleRegistry;
pub use spaces::BoxSpace;
