//! Per-frame particle integration.

use crate::camera::PointerRay;
use crate::config::EngineConfig;
use crate::particle::ParticleSet;

/// Advance every particle one visual step.
///
/// Three terms feed the velocity: a push away from the pointer ray for
/// particles inside its influence tube, a spring back toward the rest
/// position, and exponential damping. Explicit Euler; the step is the
/// display frame, which is all the smoothness a decorative field needs.
pub fn step(particles: &mut ParticleSet, ray: &PointerRay, config: &EngineConfig) {
    let influence_sq = config.influence_radius_sq;
    let influence = influence_sq.sqrt();

    for i in 0..particles.count {
        let pos = particles.position[i];
        let mut vel = particles.velocity[i];

        // Repulsion from the closest point on the ray. Skipped behind the
        // camera, and for a particle sitting exactly on the ray (no push
        // direction exists; the spring below still applies).
        let t = (pos - ray.origin).dot(ray.dir);
        if t > 0.0 {
            let closest = ray.origin + ray.dir * t;
            let offset = pos - closest;
            let dist_sq = offset.length_squared();
            if dist_sq < influence_sq && dist_sq > 0.0 {
                let dist = dist_sq.sqrt();
                let force = (influence - dist) * config.repel_strength;
                vel += offset / dist * force;
            }
        }

        vel += (particles.rest[i] - pos) * config.spring_stiffness;
        vel *= config.damping;

        particles.velocity[i] = vel;
        particles.position[i] = pos + vel;
    }
}
