//! Pointer-to-world ray derivation.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Ray from the eye through the pointer's projected point.
#[derive(Clone, Copy, Debug)]
pub struct PointerRay {
    pub origin: Vec3,
    /// Unit length.
    pub dir: Vec3,
}

/// Perspective camera matching the page renderer's setup.
///
/// Carries just enough transform to unproject a normalized pointer
/// coordinate. Matrices are rebuilt on demand rather than cached; the ray
/// is recomputed every frame anyway, since either the pointer or the
/// viewport may have changed since the last one.
pub struct Camera {
    pub position: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            fov_y: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    fn view_projection(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far);
        let view = Mat4::from_translation(-self.position);
        proj * view
    }

    /// Unproject a normalized device coordinate at mid-depth into world
    /// space.
    fn unproject(&self, ndc: Vec2) -> Vec3 {
        let world = self.view_projection().inverse() * Vec4::new(ndc.x, ndc.y, 0.5, 1.0);
        if world.w.abs() < 1e-8 {
            // Degenerate projection; land straight ahead of the eye.
            return self.position + Vec3::NEG_Z;
        }
        world.truncate() / world.w
    }

    /// Ray from the eye through `pointer` (both coordinates in [-1, 1]).
    pub fn pointer_ray(&self, pointer: Vec2) -> PointerRay {
        let through = self.unproject(pointer);
        let dir = (through - self.position)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z);
        PointerRay {
            origin: self.position,
            dir,
        }
    }
}
