//! Timed interpolation of the rest-position field between shapes.

use glam::Vec3;

use crate::math::ease_in_out_quad;
use crate::shapes::{self, ShapeId};

/// One in-flight shape transition.
///
/// At most one job exists; replacing the option is the whole cancellation
/// mechanism, so no tick of a superseded job can ever land.
struct MorphJob {
    /// Rest positions snapshotted when the job started.
    start: Vec<Vec3>,
    /// Freshly generated cloud for the destination shape.
    target: Vec<Vec3>,
    elapsed: f32,
    duration: f32,
    easing: fn(f32) -> f32,
}

/// Drives shape transitions for the rest-position buffer.
pub struct Morpher {
    current: ShapeId,
    job: Option<MorphJob>,
    duration: f32,
}

impl Morpher {
    pub fn new(initial: ShapeId, duration: f32) -> Self {
        Self {
            current: initial,
            job: None,
            duration,
        }
    }

    /// Shape the field is showing, or morphing toward.
    pub fn current_shape(&self) -> ShapeId {
        self.current
    }

    /// Whether a transition is in flight.
    pub fn is_active(&self) -> bool {
        self.job.is_some()
    }

    /// Linear progress of the in-flight transition, if any.
    pub fn progress(&self) -> Option<f32> {
        self.job
            .as_ref()
            .map(|job| (job.elapsed / job.duration.max(f32::EPSILON)).min(1.0))
    }

    /// Begin morphing toward `shape`.
    ///
    /// A no-op when the field is already on (or heading to) `shape`, so a
    /// scroll observer firing twice costs nothing. Otherwise any in-flight
    /// job is discarded and the new one starts from the rest positions as
    /// they are right now; the field keeps moving continuously instead of
    /// snapping back to where the old job began.
    pub fn morph_to(&mut self, shape: ShapeId, rest: &[Vec3]) {
        if shape == self.current {
            return;
        }
        self.current = shape;
        self.job = Some(MorphJob {
            start: rest.to_vec(),
            target: shapes::generate(shape, rest.len()),
            elapsed: 0.0,
            duration: self.duration,
            easing: ease_in_out_quad,
        });
    }

    /// Advance the in-flight transition by `dt` seconds, rewriting `rest`
    /// in place. Reaching the end clamps onto the exact target and clears
    /// the job.
    pub fn tick(&mut self, dt: f32, rest: &mut [Vec3]) {
        let Some(job) = self.job.as_mut() else {
            return;
        };
        job.elapsed += dt;
        let t = if job.duration > 0.0 {
            (job.elapsed / job.duration).min(1.0)
        } else {
            1.0
        };
        let eased = (job.easing)(t);
        for ((out, start), target) in rest.iter_mut().zip(&job.start).zip(&job.target) {
            *out = start.lerp(*target, eased);
        }
        if t >= 1.0 {
            self.job = None;
        }
    }
}
