use glam::Vec3;

use crate::shapes::{self, ShapeId};

/// SoA particle storage.
///
/// Three parallel buffers per particle: the live position, the rest
/// position the spring pulls toward (rewritten in place while a morph is
/// running), and the integrated velocity. The count is fixed at creation;
/// particles are never added or removed.
pub struct ParticleSet {
    pub count: usize,
    pub position: Vec<Vec3>,
    pub rest: Vec<Vec3>,
    pub velocity: Vec<Vec3>,
}

impl ParticleSet {
    /// Allocate `count` particles at rest on `shape`.
    ///
    /// Positions start exactly on their rest positions with zero velocity,
    /// so the field is stationary until a pointer or a morph disturbs it.
    pub fn from_shape(shape: ShapeId, count: usize) -> Self {
        let rest = shapes::generate(shape, count);
        Self {
            count,
            position: rest.clone(),
            velocity: vec![Vec3::ZERO; count],
            rest,
        }
    }

    /// Flat `[x, y, z, x, y, z, ..]` view of the live positions for the
    /// rendering backend.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.position)
    }
}
