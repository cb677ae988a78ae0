//! Per-shape sampling rules.
//!
//! Index-parametrised shapes (helix, grid, spiral, ribbon) place point `i`
//! of `count` on a closed-form curve or lattice; the rest draw from the
//! shape's surface or face-plane distribution. Scales keep every shape in
//! a comparable bounding radius so morphs read as re-arrangements, not
//! zooms.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::Rng;

use super::ShapeId;

/// Golden ratio, proportions the dodecahedron's face rectangles.
const PHI: f32 = 1.618_034;

pub(super) fn sample<R: Rng>(shape: ShapeId, i: usize, count: usize, rng: &mut R) -> Vec3 {
    match shape {
        ShapeId::Sphere => sphere_shell(rng, 6.0),
        ShapeId::GlobeSmall => sphere_shell(rng, 2.8),
        ShapeId::SphereLarge => sphere_shell(rng, 8.0),
        ShapeId::Helix => helix(i, count),
        ShapeId::Grid => grid(i, count),
        ShapeId::Spiral => spiral(i, count),
        ShapeId::Ribbon => ribbon(i, count, rng),
        ShapeId::Cube => cube(rng),
        ShapeId::Tetrahedron => tetrahedron(rng),
        ShapeId::Octahedron => octahedron(rng),
        ShapeId::Torus => torus(rng),
        ShapeId::Dodecahedron => dodecahedron(rng),
    }
}

/// Uniform spherical shell via inverse-CDF; acos on the latitude keeps the
/// poles from clumping.
fn sphere_shell<R: Rng>(rng: &mut R, radius: f32) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Vertical helix: nine full turns over a 14-unit rise, radius 4.2.
fn helix(i: usize, count: usize) -> Vec3 {
    let ratio = if count > 1 {
        i as f32 / (count - 1) as f32
    } else {
        0.0
    };
    let angle = ratio * 18.0 * PI;
    Vec3::new(angle.cos() * 4.2, (ratio - 0.5) * 14.0, angle.sin() * 4.2)
}

/// Near-square lattice in the XZ plane with a sine swell along X.
fn grid(i: usize, count: usize) -> Vec3 {
    let side = (count as f32).sqrt().ceil() as usize;
    let half = side as f32 / 2.0;
    let gx = (i % side) as f32 - half;
    let gz = (i / side) as f32 - half;
    Vec3::new(gx * 0.18, (gx * 0.15).sin() * 1.6, gz * 0.18)
}

/// Flat vortex: radius grows linearly with the winding angle.
fn spiral(i: usize, count: usize) -> Vec3 {
    let t = i as f32 / count as f32 * 10.0 * PI;
    let radius = 0.4 * t;
    Vec3::new(
        t.cos() * radius * 0.25,
        (t - 5.0 * PI) * 0.15,
        t.sin() * radius * 0.25,
    )
}

/// Wavy band across X. One jitter draw feeds both off-axis components so
/// the scatter thickens the band without shearing it.
fn ribbon<R: Rng>(i: usize, count: usize, rng: &mut R) -> Vec3 {
    let t = i as f32 / count as f32 * 6.0 * PI;
    let spread = (rng.gen::<f32>() - 0.5) * 1.2;
    Vec3::new(
        (t - 3.0 * PI) * 0.8,
        t.sin() * 2.2 + spread,
        (t * 0.7).cos() * 2.0 + spread,
    )
}

/// Cube surface: uniform face pick, two uniform in-face coordinates,
/// half-extent 5.
fn cube<R: Rng>(rng: &mut R) -> Vec3 {
    let face = rng.gen_range(0..6);
    let u = (rng.gen::<f32>() - 0.5) * 10.0;
    let v = (rng.gen::<f32>() - 0.5) * 10.0;
    match face {
        0 => Vec3::new(5.0, u, v),
        1 => Vec3::new(-5.0, u, v),
        2 => Vec3::new(u, 5.0, v),
        3 => Vec3::new(u, -5.0, v),
        4 => Vec3::new(u, v, 5.0),
        _ => Vec3::new(u, v, -5.0),
    }
}

/// Polar shell of radius 7, denser toward the poles than a uniform
/// sphere; reads as a faceted solid once the ambient rotation kicks in.
fn tetrahedron<R: Rng>(rng: &mut R) -> Vec3 {
    let u = rng.gen::<f32>() * PI;
    let phi = rng.gen::<f32>() * TAU;
    Vec3::new(
        7.0 * phi.cos() * u.sin(),
        7.0 * phi.sin() * u.sin(),
        7.0 * u.cos(),
    )
}

/// Spindle: a random-radius disc crossed with a tall uniform Y span.
fn octahedron<R: Rng>(rng: &mut R) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let r = rng.gen::<f32>() * 6.0;
    Vec3::new(
        r * theta.cos(),
        (rng.gen::<f32>() - 0.5) * 12.0,
        r * theta.sin(),
    )
}

/// Torus surface, major radius 5, minor radius 2, ring in the XY plane.
fn torus<R: Rng>(rng: &mut R) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = rng.gen::<f32>() * TAU;
    let ring = 5.0 + 2.0 * phi.cos();
    Vec3::new(ring * theta.cos(), ring * theta.sin(), 2.0 * phi.sin())
}

/// Three orthogonal golden-ratio rectangles, one picked per point.
fn dodecahedron<R: Rng>(rng: &mut R) -> Vec3 {
    let pick = rng.gen::<f32>();
    if pick < 0.33 {
        Vec3::new(span(rng), span(rng) * PHI, 0.0)
    } else if pick < 0.66 {
        Vec3::new(0.0, span(rng), span(rng) * PHI)
    } else {
        Vec3::new(span(rng) * PHI, 0.0, span(rng))
    }
}

fn span<R: Rng>(rng: &mut R) -> f32 {
    (rng.gen::<f32>() - 0.5) * 10.0
}
