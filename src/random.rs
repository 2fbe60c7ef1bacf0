//! Random helpers for sketches.
//!
//! Thin wrappers over the thread-local `fastrand` generator. Call [`seed`]
//! to make a run reproducible. Points and directions are in canvas
//! coordinates (see [`CanvasSize`](crate::resources::canvassize::CanvasSize)).

use glam::Vec2;

use crate::math::{Angle, TAU};

/// Reseed the thread-local generator.
pub fn seed(seed: u64) {
    fastrand::seed(seed);
}

/// A number in `[0, 1)`.
pub fn number() -> f32 {
    fastrand::f32()
}

/// A number in `[0, max)`. Fails when `max < 0`.
pub fn number_up_to(max: f32) -> Result<f32, String> {
    number_between(0.0, max)
}

/// A number in `[min, max)`. Fails when `min > max`.
pub fn number_between(min: f32, max: f32) -> Result<f32, String> {
    if min > max {
        return Err(format!("`min` ({min}) must be smaller than `max` ({max})"));
    }
    Ok(min + fastrand::f32() * (max - min))
}

/// An integer in `[0, max)`. Fails when `max <= 0`.
pub fn integer_up_to(max: i32) -> Result<i32, String> {
    integer_between(0, max)
}

/// An integer in `[min, max)`. Fails when `min >= max`.
pub fn integer_between(min: i32, max: i32) -> Result<i32, String> {
    if min >= max {
        return Err(format!(
            "`min` ({min}) must be strictly smaller than `max` ({max})"
        ));
    }
    Ok(fastrand::i32(min..max))
}

/// A point inside the axis-aligned box `[min, max)`.
pub fn point_between(min: Vec2, max: Vec2) -> Result<Vec2, String> {
    Ok(Vec2::new(
        number_between(min.x, max.x)?,
        number_between(min.y, max.y)?,
    ))
}

/// A point on a canvas of the given aspect ratio.
pub fn point(aspect_ratio: f32) -> Vec2 {
    let ar = aspect_ratio.abs();
    Vec2::new(
        -ar + fastrand::f32() * 2.0 * ar,
        -1.0 + fastrand::f32() * 2.0,
    )
}

/// An angle in `[0, TAU)`.
pub fn angle() -> Angle {
    Angle::from_radians(fastrand::f32() * TAU)
}

/// A unit vector pointing in a random direction.
pub fn direction() -> Vec2 {
    angle().direction()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_stay_in_range() {
        for _ in 0..1000 {
            let n = number();
            assert!((0.0..1.0).contains(&n));
            let n = number_between(-3.0, 2.0).unwrap();
            assert!((-3.0..=2.0).contains(&n));
            let i = integer_between(-2, 3).unwrap();
            assert!((-2..3).contains(&i));
        }
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        assert!(number_between(1.0, 0.0).is_err());
        assert!(number_up_to(-1.0).is_err());
        assert!(integer_between(3, 3).is_err());
        assert!(integer_up_to(0).is_err());
        assert!(point_between(Vec2::ONE, Vec2::ZERO).is_err());
    }

    #[test]
    fn empty_float_range_returns_bound() {
        assert_eq!(number_between(2.5, 2.5).unwrap(), 2.5);
    }

    #[test]
    fn points_land_on_canvas() {
        for _ in 0..1000 {
            let p = point(16.0 / 9.0);
            assert!(p.x >= -16.0 / 9.0 && p.x <= 16.0 / 9.0);
            assert!(p.y >= -1.0 && p.y <= 1.0);
        }
    }

    #[test]
    fn directions_are_unit_vectors() {
        for _ in 0..100 {
            assert!((direction().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn seeding_is_reproducible() {
        seed(42);
        let a = (number(), integer_up_to(100).unwrap());
        seed(42);
        let b = (number(), integer_up_to(100).unwrap());
        assert_eq!(a, b);
    }
}
