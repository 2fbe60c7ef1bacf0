//! Shared numeric helpers: constants, [`Angle`](angle::Angle) and small vector
//! utilities used by the placement code and the sketch context.

pub mod angle;

use glam::Vec2;

pub use angle::{Angle, AngleExt, Radians};

pub const TAU: f32 = std::f32::consts::TAU;
pub const PI: f32 = std::f32::consts::PI;

/// Maps `x` from the range `[from_min, from_max]` to `[to_min, to_max]`.
///
/// Values outside of the source range are extrapolated linearly.
pub fn map(x: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    (x - from_min) * (to_max - to_min) / (from_max - from_min) + to_min
}

/// Returns `vector` rotated counter-clockwise by `angle`.
pub fn rotated_by(angle: Angle, vector: Vec2) -> Vec2 {
    let (sin, cos) = angle.as_radians().sin_cos();
    Vec2 {
        x: vector.x * cos - vector.y * sin,
        y: vector.x * sin + vector.y * cos,
    }
}
