use crate::observation::{FORWARD_VELOCITY_INDEX, HEIGHT_INDEX};

/// Scalar reward derived from the current observation only.
///
/// `reward = alive_bonus * 1.0 + forward_velocity * obs[4]`. Neither the
/// previous observation nor the action enters the formula; there is no
/// energy or control penalty.
#[derive(Debug, Clone, Copy)]
pub struct RewardPolicy {
    pub alive_bonus: f32,
    pub forward_velocity: f32,
}

impl Default for RewardPolicy {
    fn default() -> Self {
        Self { alive_bonus: 16.0, forward_velocity: 8.0 }
    }
}

impl RewardPolicy {
    /// Total over all observations with the fixed layout; never fails.
    #[must_use]
    pub fn reward(&self, observation: &[f32]) -> f32 {
        let alive = 1.0;
        self.alive_bonus * alive + self.forward_velocity * observation[FORWARD_VELOCITY_INDEX]
    }
}

/// Decides episode termination from the current observation only.
///
/// One-sided: the episode ends when the torso drops below the standing
/// threshold, never for rising too high.
#[derive(Debug, Clone, Copy)]
pub struct TerminationPolicy {
    pub stand_threshold: f32,
}

impl Default for TerminationPolicy {
    fn default() -> Self {
        Self { stand_threshold: 0.10 }
    }
}

impl TerminationPolicy {
    #[must_use]
    pub fn is_done(&self, observation: &[f32]) -> bool {
        observation[HEIGHT_INDEX] < self.stand_threshold
    }
}
