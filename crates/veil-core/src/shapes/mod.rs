//! Target point-cloud generation for the named field shapes.
//!
//! [`generate`] maps a [`ShapeId`] to a fixed-size set of 3D points drawn
//! from that shape's procedural distribution. Sampling is deterministic:
//! the random source is seeded from the shape and the requested count, so
//! repeated calls with the same arguments return identical clouds.

mod sampler;

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Identifies one of the procedural field shapes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ShapeId {
    Sphere,
    GlobeSmall,
    Helix,
    Grid,
    Spiral,
    Ribbon,
    Cube,
    Tetrahedron,
    Octahedron,
    Torus,
    Dodecahedron,
    SphereLarge,
}

impl ShapeId {
    /// Every shape, in declaration order.
    pub const ALL: [ShapeId; 12] = [
        ShapeId::Sphere,
        ShapeId::GlobeSmall,
        ShapeId::Helix,
        ShapeId::Grid,
        ShapeId::Spiral,
        ShapeId::Ribbon,
        ShapeId::Cube,
        ShapeId::Tetrahedron,
        ShapeId::Octahedron,
        ShapeId::Torus,
        ShapeId::Dodecahedron,
        ShapeId::SphereLarge,
    ];

    /// Parse a page-facing shape name.
    ///
    /// Unknown names fall back to the default sphere. That is policy, not
    /// an error: a bad scroll-trigger label degrades to the default field
    /// instead of wedging the page.
    pub fn parse(name: &str) -> ShapeId {
        match name {
            "globe-small" => ShapeId::GlobeSmall,
            "helix" => ShapeId::Helix,
            "grid" => ShapeId::Grid,
            "spiral" => ShapeId::Spiral,
            "ribbon" => ShapeId::Ribbon,
            "cube" => ShapeId::Cube,
            "tetrahedron" => ShapeId::Tetrahedron,
            "octahedron" => ShapeId::Octahedron,
            "torus" => ShapeId::Torus,
            "dodecahedron" => ShapeId::Dodecahedron,
            "sphere-large" => ShapeId::SphereLarge,
            _ => ShapeId::Sphere,
        }
    }

    /// Canonical page-facing name.
    pub fn name(self) -> &'static str {
        match self {
            ShapeId::Sphere => "sphere",
            ShapeId::GlobeSmall => "globe-small",
            ShapeId::Helix => "helix",
            ShapeId::Grid => "grid",
            ShapeId::Spiral => "spiral",
            ShapeId::Ribbon => "ribbon",
            ShapeId::Cube => "cube",
            ShapeId::Tetrahedron => "tetrahedron",
            ShapeId::Octahedron => "octahedron",
            ShapeId::Torus => "torus",
            ShapeId::Dodecahedron => "dodecahedron",
            ShapeId::SphereLarge => "sphere-large",
        }
    }

    /// Shape shown while a named page section is in view, if that section
    /// drives the field at all.
    pub fn for_section(section: &str) -> Option<ShapeId> {
        Some(match section {
            "hero" => ShapeId::GlobeSmall,
            "about" => ShapeId::Ribbon,
            "experience" => ShapeId::Helix,
            "education" => ShapeId::Grid,
            "skills" => ShapeId::Torus,
            "projects" => ShapeId::Dodecahedron,
            "contact" => ShapeId::Spiral,
            _ => return None,
        })
    }
}

/// Sample exactly `count` points from `shape`'s distribution.
pub fn generate(shape: ShapeId, count: usize) -> Vec<Vec3> {
    // Seeded per (shape, count): a morph target generated now is identical
    // to a reference cloud generated later with the same arguments.
    let seed = 0x7e11_5eed_u64 ^ ((shape as u64) << 32) ^ count as u64;
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|i| sampler::sample(shape, i, count, &mut rng))
        .collect()
}
