use glam::Vec3;
use veil_core::camera::PointerRay;
use veil_core::config::EngineConfig;
use veil_core::particle::ParticleSet;
use veil_core::shapes::ShapeId;
use veil_core::simulation;

/// Ray looking down -Z from the default eye position.
fn center_ray() -> PointerRay {
    PointerRay {
        origin: Vec3::new(0.0, 0.0, 5.0),
        dir: Vec3::NEG_Z,
    }
}

/// One particle resting at `pos` with zero velocity.
fn single_particle_at(pos: Vec3) -> ParticleSet {
    let mut set = ParticleSet::from_shape(ShapeId::Sphere, 1);
    set.position[0] = pos;
    set.rest[0] = pos;
    set.velocity[0] = Vec3::ZERO;
    set
}

#[test]
fn test_at_rest_particles_stay_at_rest() {
    // Outside the influence tube, with position == rest, nothing moves.
    let mut set = single_particle_at(Vec3::new(3.0, 0.0, 0.0));
    let config = EngineConfig::default();
    let start = set.position[0];
    for _ in 0..100 {
        simulation::step(&mut set, &center_ray(), &config);
    }
    assert!(
        (set.position[0] - start).length() < 1e-6,
        "at-rest particle drifted to {:?}",
        set.position[0]
    );
    assert!(
        set.velocity[0].length() < 1e-6,
        "at-rest particle picked up velocity {:?}",
        set.velocity[0]
    );
}

#[test]
fn test_velocity_decays_geometrically() {
    // Spring off, repulsion out of reach: each step is a pure 0.90 scale.
    let mut set = single_particle_at(Vec3::new(3.0, 0.0, 0.0));
    set.velocity[0] = Vec3::new(1.0, 0.0, 0.0);
    let config = EngineConfig {
        spring_stiffness: 0.0,
        ..EngineConfig::default()
    };

    let mut prev = set.velocity[0].length();
    for _ in 0..10 {
        simulation::step(&mut set, &center_ray(), &config);
        let speed = set.velocity[0].length();
        let ratio = speed / prev;
        assert!(
            (ratio - config.damping).abs() < 1e-4,
            "decay ratio {} != damping {}",
            ratio,
            config.damping
        );
        prev = speed;
    }
    assert!(prev < 0.4, "velocity failed to decay: {}", prev);
}

#[test]
fn test_spring_returns_displaced_particle_to_rest() {
    let mut set = single_particle_at(Vec3::new(3.0, 0.0, 0.0));
    set.position[0] = Vec3::new(4.0, 1.0, 0.0);
    let config = EngineConfig::default();
    for _ in 0..400 {
        simulation::step(&mut set, &center_ray(), &config);
    }
    assert!(
        (set.position[0] - set.rest[0]).length() < 1e-4,
        "particle did not settle back to rest: {:?}",
        set.position[0]
    );
}

#[test]
fn test_repulsion_pushes_away_from_ray() {
    // Half a unit off the ray axis, well inside the influence tube.
    let mut set = single_particle_at(Vec3::new(0.5, 0.0, 0.0));
    let config = EngineConfig::default();
    simulation::step(&mut set, &center_ray(), &config);
    assert!(
        set.velocity[0].x > 0.0,
        "particle should be pushed off the ray in +x, got {:?}",
        set.velocity[0]
    );
    assert!(
        set.velocity[0].y.abs() < 1e-6 && set.velocity[0].z.abs() < 1e-6,
        "push should be radial from the ray: {:?}",
        set.velocity[0]
    );
    assert!(set.position[0].x > 0.5, "position should follow the push");
}

#[test]
fn test_no_repulsion_outside_influence_tube() {
    // 1.2 units off-axis: past sqrt(1.2) ~ 1.095, outside the tube.
    let mut set = single_particle_at(Vec3::new(1.2, 0.0, 0.0));
    let config = EngineConfig::default();
    simulation::step(&mut set, &center_ray(), &config);
    assert_eq!(
        set.velocity[0],
        Vec3::ZERO,
        "tube must not reach a particle 1.2 units off-axis"
    );
}

#[test]
fn test_no_repulsion_behind_camera() {
    // Inside the tube radius but behind the eye (z = 7 > 5).
    let mut set = single_particle_at(Vec3::new(0.5, 0.0, 7.0));
    let config = EngineConfig::default();
    simulation::step(&mut set, &center_ray(), &config);
    assert_eq!(
        set.velocity[0],
        Vec3::ZERO,
        "particles behind the camera must be left alone"
    );
}

#[test]
fn test_particle_exactly_on_ray_is_stable() {
    // Zero offset from the ray: no push direction exists. Must not NaN.
    let mut set = single_particle_at(Vec3::new(0.0, 0.0, 0.0));
    let config = EngineConfig::default();
    for _ in 0..10 {
        simulation::step(&mut set, &center_ray(), &config);
    }
    assert!(
        set.position[0].is_finite() && set.velocity[0].is_finite(),
        "on-ray particle went non-finite: {:?} {:?}",
        set.position[0],
        set.velocity[0]
    );
    assert_eq!(
        set.velocity[0],
        Vec3::ZERO,
        "on-ray particle at rest should stay put"
    );
}

#[test]
fn test_disturbed_field_stays_finite() {
    let mut set = ParticleSet::from_shape(ShapeId::GlobeSmall, 500);
    let config = EngineConfig::default();
    for _ in 0..200 {
        simulation::step(&mut set, &center_ray(), &config);
    }
    for i in 0..set.count {
        assert!(
            set.position[i].is_finite() && set.velocity[i].is_finite(),
            "particle {} went non-finite",
            i
        );
    }
}
