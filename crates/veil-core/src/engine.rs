//! The engine context: owns all particle state and performs one frame of
//! work per tick.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::camera::Camera;
use crate::config::EngineConfig;
use crate::morph::Morpher;
use crate::particle::ParticleSet;
use crate::shapes::ShapeId;
use crate::simulation;

/// Scroll-reactive particle field engine.
///
/// Constructed once with a particle count and an initial shape; the host
/// loop (browser frame callback, test harness, headless driver) calls
/// [`Engine::tick`] once per display frame. Pointer samples and morph
/// triggers arrive asynchronously through [`Engine::set_pointer`] /
/// [`Engine::trigger_morph`] and are consumed by the next tick; the tick
/// is the sole mutator of particle state, so no locking is needed.
pub struct Engine {
    pub particles: ParticleSet,
    pub camera: Camera,
    pub config: EngineConfig,
    morpher: Morpher,
    pointer: Vec2,
    rotation_y: f32,
    dirty: bool,
}

impl Engine {
    /// Build the engine with `config.particle_count` particles at rest on
    /// `initial_shape`.
    pub fn new(initial_shape: ShapeId, config: EngineConfig) -> Self {
        let particles = ParticleSet::from_shape(initial_shape, config.particle_count);
        let morpher = Morpher::new(initial_shape, config.morph_duration);
        Self {
            particles,
            camera: Camera::default(),
            morpher,
            config,
            pointer: Vec2::ZERO,
            rotation_y: 0.0,
            // The freshly sampled cloud still needs its first upload.
            dirty: true,
        }
    }

    /// Overwrite the latest pointer sample, in normalized device
    /// coordinates (both axes in [-1, 1]).
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Retarget the field toward `shape`. Idempotent while `shape` is
    /// already current; otherwise any in-flight morph is superseded.
    pub fn trigger_morph(&mut self, shape: ShapeId) {
        self.morpher.morph_to(shape, &self.particles.rest);
    }

    /// One frame of work: advance the morph clock by `dt` seconds, rebuild
    /// the pointer ray, integrate every particle, advance the ambient
    /// rotation, and flag the position buffer for re-upload.
    ///
    /// `dt` drives only the morph clock. The particle integration is one
    /// fixed visual step per call; its constants are tuned per display
    /// frame and need no timestep decoupling.
    pub fn tick(&mut self, dt: f32) {
        if self.particles.count == 0 {
            return;
        }
        self.morpher.tick(dt, &mut self.particles.rest);
        let ray = self.camera.pointer_ray(self.pointer);
        simulation::step(&mut self.particles, &ray, &self.config);
        self.rotation_y = (self.rotation_y + self.config.rotation_step) % TAU;
        self.dirty = true;
    }

    /// Shape the field is showing, or morphing toward.
    pub fn current_shape(&self) -> ShapeId {
        self.morpher.current_shape()
    }

    /// Whether a shape transition is in flight.
    pub fn is_morphing(&self) -> bool {
        self.morpher.is_active()
    }

    /// Linear progress of the in-flight morph, if any.
    pub fn morph_progress(&self) -> Option<f32> {
        self.morpher.progress()
    }

    /// Ambient model rotation for the renderer to apply. Physics runs in
    /// unrotated local space; only the drawn field spins.
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Flat N x 3 float view of the live positions for the renderer.
    pub fn positions_flat(&self) -> &[f32] {
        self.particles.positions_flat()
    }

    /// Whether positions changed since the last call; reading clears it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
