use simclient::ObjectHandle;

use crate::error::EnvError;

/// Maps an agent action vector onto per-actuator velocity targets.
///
/// Validation is strict: wrong arity or any component outside the declared
/// bound rejects the whole action. Values are never clamped, so an agent
/// that relies on silent saturation fails loudly instead.
#[derive(Debug, Clone)]
pub struct ActionCodec {
    actuators: Vec<ObjectHandle>,
    max_velocity: f32,
}

impl ActionCodec {
    #[must_use]
    pub fn new(actuators: Vec<ObjectHandle>, max_velocity: f32) -> Self {
        Self { actuators, max_velocity }
    }

    #[must_use]
    pub fn num_actuators(&self) -> usize {
        self.actuators.len()
    }

    #[must_use]
    pub fn max_velocity(&self) -> f32 {
        self.max_velocity
    }

    /// Pairs each actuator with its requested velocity, preserving the
    /// declaration order of the joints. Pure; the simulator is not touched.
    pub fn encode(&self, action: &[f32]) -> Result<Vec<(ObjectHandle, f32)>, EnvError> {
        if action.len() != self.actuators.len() {
            return Err(EnvError::InvalidAction(format!(
                "expected {} components, got {}",
                self.actuators.len(),
                action.len()
            )));
        }
        for (i, &v) in action.iter().enumerate() {
            if !v.is_finite() || v.abs() > self.max_velocity {
                return Err(EnvError::InvalidAction(format!(
                    "component {i} = {v} outside [-{max}, {max}]",
                    max = self.max_velocity
                )));
            }
        }
        Ok(self.actuators.iter().copied().zip(action.iter().copied()).collect())
    }
}
