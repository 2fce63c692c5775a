use hopper::{EnvConfig, EnvError, EpisodeState, HopperEnv};
use simclient::{MockSim, SimulatorClient};

const STANDING_HEIGHT: f32 = 0.45;

/// Default hopper scene with the torso standing; `descent` pulls the torso
/// down by that amount every tick.
fn hopper_scene(descent: f32) -> MockSim {
    let mut sim = MockSim::new();
    let config = EnvConfig::default();
    for name in config.required_names() {
        sim.add_object(name);
    }
    let torso = sim.resolve_handle("torso").unwrap();
    sim.set_position(torso, [0.0, 0.0, STANDING_HEIGHT]);
    if descent > 0.0 {
        sim.set_descent(torso, descent);
    }
    sim
}

fn hopper_env(descent: f32) -> HopperEnv<MockSim> {
    HopperEnv::new(hopper_scene(descent), EnvConfig::default()).unwrap()
}

#[test]
fn step_before_reset_fails_and_reset_recovers() {
    let mut env = hopper_env(0.0);
    assert_eq!(env.state(), EpisodeState::Idle);
    assert!(matches!(env.step(&[0.0; 3]), Err(EnvError::EpisodeNotStarted)));

    let obs = env.reset().unwrap();
    assert_eq!(env.state(), EpisodeState::Running);
    assert_eq!(obs.len(), 25);
    assert!(env.step(&[0.0; 3]).is_ok());
}

#[test]
fn reset_is_idempotent_safe() {
    let mut env = hopper_env(0.0);
    for _ in 0..3 {
        let obs = env.reset().unwrap();
        assert_eq!(obs.len(), 25);
        assert_eq!(env.state(), EpisodeState::Running);
    }
}

#[test]
fn reset_discards_the_previous_episode() {
    let mut env = hopper_env(0.01);
    env.reset().unwrap();
    for _ in 0..10 {
        env.step(&[0.0; 3]).unwrap();
    }
    // A new episode starts from the scripted scene, not where the last
    // one left off.
    let obs = env.reset().unwrap();
    assert!((obs[0] - STANDING_HEIGHT).abs() < 1e-6);
}

#[test]
fn invalid_action_leaves_episode_and_simulator_untouched() {
    let mut env = hopper_env(0.0);
    env.reset().unwrap();

    assert!(matches!(env.step(&[0.0; 2]), Err(EnvError::InvalidAction(_))));
    assert!(matches!(
        env.step(&[0.0, 9.0, 0.0]),
        Err(EnvError::InvalidAction(_))
    ));
    assert_eq!(env.state(), EpisodeState::Running);

    // Rejection happened before any simulator interaction.
    let sim = env.close().unwrap();
    assert_eq!(sim.ticks(), 0);
    assert!(sim.commands().is_empty());
}

#[test]
fn step_commands_each_actuator_once_in_order() {
    let scene = hopper_scene(0.0);
    let mut env = HopperEnv::new(scene, EnvConfig::default()).unwrap();
    let thigh = env.handle("thigh_joint").unwrap();
    let leg = env.handle("leg_joint").unwrap();
    let foot = env.handle("foot_joint").unwrap();

    env.reset().unwrap();
    env.step(&[1.0, -2.0, 3.0]).unwrap();

    let sim = env.close().unwrap();
    assert_eq!(sim.ticks(), 1);
    assert_eq!(sim.commands(), &[(thigh, 1.0), (leg, -2.0), (foot, 3.0)]);
}

#[test]
fn fixed_length_rollout_terminates_or_completes() -> anyhow::Result<()> {
    let mut env = hopper_env(0.01);
    env.reset()?;

    let mut terminated = false;
    let mut steps = 0;
    for _ in 0..256 {
        let step = env.step(&[0.0; 3])?;
        assert_eq!(step.observation.len(), 25);
        assert!(step.info.is_empty());
        steps += 1;
        if step.done {
            terminated = true;
            break;
        }
    }
    // Sinking from 0.45 at 0.01 per tick crosses the 0.10 threshold well
    // within the horizon.
    assert!(terminated);
    assert!(steps < 256);
    // Termination does not end the episode by itself.
    assert_eq!(env.state(), EpisodeState::Running);
    Ok(())
}

#[test]
fn declared_spaces_match_the_scene_dimensions() {
    let env = hopper_env(0.0);
    assert_eq!(env.action_space().dim(), 3);
    assert_eq!(env.observation_space().dim(), 25);
    assert!(env.action_space().contains(&[8.0, -8.0, 0.0]));
    assert!(!env.action_space().contains(&[8.2, 0.0, 0.0]));

    // A smaller rig: two joints, two tracked bodies.
    let mut sim = MockSim::new();
    for name in ["cam", "hip", "knee", "body", "shin"] {
        sim.add_object(name);
    }
    let config = EnvConfig {
        joint_names: vec!["hip".to_owned(), "knee".to_owned()],
        shape_names: vec!["body".to_owned(), "shin".to_owned()],
        meta_names: vec!["cam".to_owned()],
        max_velocity: 8.0,
    };
    let env = HopperEnv::new(sim, config).unwrap();
    assert_eq!(env.action_space().dim(), 2);
    assert_eq!(env.observation_space().dim(), 13);
}

#[test]
fn sampled_actions_are_always_valid() {
    let mut env = hopper_env(0.0);
    env.reset().unwrap();
    for _ in 0..32 {
        let action = env.action_space().sample();
        assert!(env.action_space().contains(&action));
        env.step(&action).unwrap();
    }
}

#[test]
fn missing_scene_object_aborts_construction() {
    let mut sim = MockSim::new();
    // No "foot_joint", no shapes at all.
    sim.add_object("camera");
    sim.add_object("thigh_joint");
    sim.add_object("leg_joint");

    let Err(err) = HopperEnv::new(sim, EnvConfig::default()) else {
        panic!("construction should fail on the missing joint");
    };
    assert!(matches!(err, EnvError::UnresolvedObject { name, .. } if name == "foot_joint"));
}

#[test]
fn empty_joint_list_is_a_configuration_error() {
    let sim = MockSim::new();
    let config = EnvConfig { joint_names: Vec::new(), ..EnvConfig::default() };
    assert!(matches!(
        HopperEnv::new(sim, config),
        Err(EnvError::Configuration(_))
    ));
}

#[test]
fn transport_fault_leaves_episode_running_and_reset_recovers() {
    let mut sim = hopper_scene(0.0);
    sim.fail_queries_after(1);
    let mut env = HopperEnv::new(sim, EnvConfig::default()).unwrap();

    // Initial observation is built at tick zero, before the fault fires.
    env.reset().unwrap();
    let err = env.step(&[0.0; 3]).unwrap_err();
    assert!(matches!(err, EnvError::Sim(_)));
    assert_eq!(env.state(), EpisodeState::Running);

    // Restarting rewinds the tick counter, so queries work again.
    let obs = env.reset().unwrap();
    assert_eq!(obs.len(), 25);
}

#[test]
fn close_stops_a_running_simulation() {
    let mut env = hopper_env(0.0);
    env.reset().unwrap();
    let sim = env.close().unwrap();
    assert!(!sim.is_running());
}

#[test]
fn seed_is_a_no_op() {
    let mut env = hopper_env(0.0);
    assert!(env.seed(Some(7)).is_empty());
    assert!(env.seed(None).is_empty());
}
