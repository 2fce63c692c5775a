use simclient::{ObjectHandle, SimulatorClient};

use crate::error::EnvError;

/// Index of the torso height (world z) in the observation vector.
pub const HEIGHT_INDEX: usize = 0;

/// Index of the torso's linear x velocity. The torso is the first tracked
/// body, so after the leading height and its three angular components the
/// linear block starts at 4.
pub const FORWARD_VELOCITY_INDEX: usize = 4;

/// Assembles the fixed-layout observation vector from simulator queries.
///
/// Layout (version 1): `[torso_z]` followed by `angular(3) ++ linear(3)`
/// for every tracked body, in declaration order. Total length is
/// `1 + 6 * bodies`. Reward and termination read fixed positions out of
/// this vector, so the ordering is a compatibility contract: reordering
/// the tracked bodies or the velocity blocks is a breaking change.
#[derive(Debug, Clone)]
pub struct ObservationBuilder {
    tracked: Vec<ObjectHandle>,
}

impl ObservationBuilder {
    #[must_use]
    pub fn new(tracked: Vec<ObjectHandle>) -> Self {
        Self { tracked }
    }

    #[must_use]
    pub fn num_bodies(&self) -> usize {
        self.tracked.len()
    }

    /// Length of the vectors produced by [`build`](Self::build).
    #[must_use]
    pub fn size(&self) -> usize {
        1 + 6 * self.tracked.len()
    }

    /// Queries every tracked body exactly once and assembles the vector.
    ///
    /// A failed query propagates immediately; no stale or default values
    /// are substituted.
    pub fn build<C: SimulatorClient>(&self, client: &mut C) -> Result<Vec<f32>, EnvError> {
        let torso = *self
            .tracked
            .first()
            .ok_or(EnvError::Configuration("no tracked bodies"))?;

        let mut observation = Vec::with_capacity(self.size());
        let position = client.get_position(torso)?;
        observation.push(position[2]);
        for &body in &self.tracked {
            let (angular, linear) = client.get_velocity(body)?;
            observation.extend_from_slice(&angular);
            observation.extend_from_slice(&linear);
        }
        Ok(observation)
    }
}
