/// Scene wiring for one environment instance.
///
/// Names are resolved against the simulator scene at construction; every
/// name listed here must exist or construction fails.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Actuated joints, one action component each, in action order.
    pub joint_names: Vec<String>,
    /// Bodies whose kinematics enter the observation. The first entry is
    /// the torso, whose height leads the vector.
    pub shape_names: Vec<String>,
    /// Objects resolved at construction but not tracked (cameras, markers).
    /// A missing one is still a fatal configuration error.
    pub meta_names: Vec<String>,
    /// Symmetric per-joint velocity bound defining the action space.
    pub max_velocity: f32,
}

impl Default for EnvConfig {
    /// The one-legged hopper scene.
    fn default() -> Self {
        Self {
            joint_names: vec![
                "thigh_joint".to_owned(),
                "leg_joint".to_owned(),
                "foot_joint".to_owned(),
            ],
            shape_names: vec![
                "torso".to_owned(),
                "thigh".to_owned(),
                "leg".to_owned(),
                "foot".to_owned(),
            ],
            meta_names: vec!["camera".to_owned()],
            max_velocity: 8.0,
        }
    }
}

impl EnvConfig {
    /// All names this configuration requires, in resolution order.
    #[must_use]
    pub fn required_names(&self) -> impl Iterator<Item = &str> {
        self.meta_names
            .iter()
            .chain(&self.joint_names)
            .chain(&self.shape_names)
            .map(String::as_str)
    }
}
