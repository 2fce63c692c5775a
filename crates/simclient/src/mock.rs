//! Deterministic in-memory stand-in for the remote simulator.
//!
//! `MockSim` keeps the whole scene as plain vectors and replays whatever
//! state the test scripted into it. Two knobs make lifecycle and fault
//! paths testable: a per-tick torso descent so rollouts terminate, and an
//! injected query failure that fires from a chosen tick onward.

use crate::{ObjectHandle, SimError, SimulatorClient};

/// Scripted scene fixture implementing [`SimulatorClient`].
#[derive(Debug, Default)]
pub struct MockSim {
    names: Vec<String>,
    initial: Vec<BodyState>,
    current: Vec<BodyState>,
    commands: Vec<(ObjectHandle, f32)>,
    running: bool,
    ticks: u64,
    descent: Option<(usize, f32)>,
    fail_queries_after: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default)]
struct BodyState {
    position: [f32; 3],
    angular: [f32; 3],
    linear: [f32; 3],
}

impl MockSim {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a "connection" to the fixture. Port 0 stands in for a missing
    /// listener and is refused, so connection failures stay testable.
    pub fn connect(addr: &str, port: u16) -> Result<Self, SimError> {
        if port == 0 {
            return Err(SimError::Connection { addr: addr.to_owned(), port });
        }
        tracing::debug!(addr, port, "mock simulator connected");
        Ok(Self::new())
    }

    /// Adds a named object to the scene and returns its handle.
    pub fn add_object(&mut self, name: &str) -> ObjectHandle {
        let handle = Self::handle_for(self.names.len());
        self.names.push(name.to_owned());
        self.initial.push(BodyState::default());
        self.current.push(BodyState::default());
        handle
    }

    /// Scripts an object's position; also recorded as the state the scene
    /// returns to when a new simulation starts.
    pub fn set_position(&mut self, handle: ObjectHandle, position: [f32; 3]) {
        if let Some(idx) = self.index(handle) {
            self.initial[idx].position = position;
            self.current[idx].position = position;
        }
    }

    /// Scripts an object's angular and linear velocity.
    pub fn set_velocity_state(
        &mut self,
        handle: ObjectHandle,
        angular: [f32; 3],
        linear: [f32; 3],
    ) {
        if let Some(idx) = self.index(handle) {
            self.initial[idx].angular = angular;
            self.initial[idx].linear = linear;
            self.current[idx].angular = angular;
            self.current[idx].linear = linear;
        }
    }

    /// Lowers the given object's z coordinate by `rate` on every tick, so a
    /// standing body eventually drops below any termination threshold.
    pub fn set_descent(&mut self, handle: ObjectHandle, rate: f32) {
        if let Some(idx) = self.index(handle) {
            self.descent = Some((idx, rate));
        }
    }

    /// Makes every kinematic query fail once the tick counter reaches
    /// `tick`. Pass 0 to fail immediately.
    pub fn fail_queries_after(&mut self, tick: u64) {
        self.fail_queries_after = Some(tick);
    }

    /// Velocity commands received so far, in arrival order.
    #[must_use]
    pub fn commands(&self) -> &[(ObjectHandle, f32)] {
        &self.commands
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn position(&self, handle: ObjectHandle) -> Option<[f32; 3]> {
        self.index(handle).map(|idx| self.current[idx].position)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn handle_for(idx: usize) -> ObjectHandle {
        ObjectHandle::new(idx as i32)
    }

    fn index(&self, handle: ObjectHandle) -> Option<usize> {
        let idx = usize::try_from(handle.raw()).ok()?;
        (idx < self.names.len()).then_some(idx)
    }

    fn state(&self, handle: ObjectHandle) -> Result<&BodyState, SimError> {
        if let Some(after) = self.fail_queries_after {
            if self.ticks >= after {
                return Err(SimError::Query("injected kinematic query failure"));
            }
        }
        self.index(handle)
            .map(|idx| &self.current[idx])
            .ok_or(SimError::Query("unknown object handle"))
    }
}

impl SimulatorClient for MockSim {
    fn resolve_handle(&mut self, name: &str) -> Result<ObjectHandle, SimError> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(Self::handle_for)
            .ok_or_else(|| SimError::UnknownObject(name.to_owned()))
    }

    fn get_position(&mut self, handle: ObjectHandle) -> Result<[f32; 3], SimError> {
        self.state(handle).map(|s| s.position)
    }

    fn get_velocity(
        &mut self,
        handle: ObjectHandle,
    ) -> Result<([f32; 3], [f32; 3]), SimError> {
        self.state(handle).map(|s| (s.angular, s.linear))
    }

    fn set_velocity(&mut self, handle: ObjectHandle, target: f32) -> Result<(), SimError> {
        if self.index(handle).is_none() {
            return Err(SimError::Query("unknown object handle"));
        }
        self.commands.push((handle, target));
        Ok(())
    }

    fn start_simulation(&mut self) -> Result<(), SimError> {
        if self.running {
            return Err(SimError::Query("simulation already running"));
        }
        // A fresh run starts from the scripted scene state.
        self.current.copy_from_slice(&self.initial);
        self.ticks = 0;
        self.running = true;
        tracing::debug!("mock simulation started");
        Ok(())
    }

    fn stop_simulation(&mut self) -> Result<(), SimError> {
        self.running = false;
        tracing::debug!("mock simulation stopped");
        Ok(())
    }

    fn advance_one_step(&mut self) -> Result<(), SimError> {
        if !self.running {
            return Err(SimError::Query("advance requested while simulation is stopped"));
        }
        self.ticks += 1;
        if let Some((idx, rate)) = self.descent {
            self.current[idx].position[2] -= rate;
        }
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
