#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

//! Client-side contract for the remote physics simulator.
//!
//! The simulator itself lives in another process and is reached through a
//! blocking request/response connection. This crate defines the minimal
//! capability set the environment adapter needs from it: resolving named
//! scene objects to handles, kinematic queries and commands, and simulation
//! lifecycle control. The [`MockSim`] fixture (behind the `mock` feature)
//! implements the same contract in memory so the adapter can be tested
//! without a live simulator.

use thiserror::Error;

#[cfg(feature = "mock")]
mod mock;
#[cfg(feature = "mock")]
pub use mock::MockSim;

/// Failures surfaced by the simulator connection.
#[derive(Error, Debug)]
pub enum SimError {
    /// The simulator did not accept the connection.
    #[error("failed to connect to simulator at {addr}:{port}")]
    Connection { addr: String, port: u16 },
    /// No scene object carries the requested name.
    #[error("no scene object named `{0}`")]
    UnknownObject(String),
    /// A round-trip to the simulator failed mid-session.
    #[error("simulator query failed: {0}")]
    Query(&'static str),
}

/// Opaque identifier the simulator assigns to a scene object.
///
/// Handles are only meaningful to the connection that issued them; nothing
/// outside this crate interprets the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle(i32);

impl ObjectHandle {
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

/// Blocking simulator connection.
///
/// Every method is one synchronous round-trip; calls never overlap. Velocity
/// queries return `(angular, linear)` triples in the simulator's world frame.
pub trait SimulatorClient {
    /// Looks up the handle of a named scene object.
    fn resolve_handle(&mut self, name: &str) -> Result<ObjectHandle, SimError>;

    /// World position `[x, y, z]` of an object.
    fn get_position(&mut self, handle: ObjectHandle) -> Result<[f32; 3], SimError>;

    /// Angular and linear velocity of an object, three components each.
    fn get_velocity(&mut self, handle: ObjectHandle)
        -> Result<([f32; 3], [f32; 3]), SimError>;

    /// Sets the target velocity of an actuated joint.
    fn set_velocity(&mut self, handle: ObjectHandle, target: f32) -> Result<(), SimError>;

    fn start_simulation(&mut self) -> Result<(), SimError>;

    fn stop_simulation(&mut self) -> Result<(), SimError>;

    /// Advances the simulation by exactly one tick.
    fn advance_one_step(&mut self) -> Result<(), SimError>;

    /// Whether a simulation is currently running on this connection.
    fn is_running(&self) -> bool;
}
