//! Typed angles.
//!
//! [`Angle`] stores its value in radians and converts to and from degrees and
//! turns (one turn is a full revolution, `TAU` radians). Angles are never
//! wrapped into `[0, TAU)`: `1.5_f32.turns()` and `(-90.0_f32).degrees()` keep
//! their value.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::TAU;

/// Raw radian value, used to build an [`Angle`] explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Radians(pub f32);

/// An angle, canonically stored in radians.
///
/// Angles form a 1-dimensional vector space: they can be added, subtracted,
/// negated and scaled by a scalar.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Angle {
    radians: f32,
}

impl Angle {
    pub const ZERO: Angle = Angle { radians: 0.0 };

    pub const fn from_radians(radians: f32) -> Self {
        Self { radians }
    }

    pub fn from_degrees(degrees: f32) -> Self {
        Self {
            radians: degrees / 360.0 * TAU,
        }
    }

    pub fn from_turns(turns: f32) -> Self {
        Self {
            radians: turns * TAU,
        }
    }

    /// The angle that `direction` makes with the positive x axis.
    ///
    /// `direction` does not need to be normalized. The result is in `(-PI, PI]`.
    pub fn from_direction(direction: Vec2) -> Self {
        Self {
            radians: direction.y.atan2(direction.x),
        }
    }

    pub fn as_radians(self) -> f32 {
        self.radians
    }

    pub fn as_degrees(self) -> f32 {
        self.radians / TAU * 360.0
    }

    pub fn as_turns(self) -> f32 {
        self.radians / TAU
    }

    /// Unit vector pointing in the direction of this angle.
    pub fn direction(self) -> Vec2 {
        let (sin, cos) = self.radians.sin_cos();
        Vec2::new(cos, sin)
    }
}

impl From<Radians> for Angle {
    fn from(value: Radians) -> Self {
        Angle::from_radians(value.0)
    }
}

impl From<Angle> for Radians {
    fn from(value: Angle) -> Self {
        Radians(value.radians)
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians + rhs.radians)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Angle) {
        self.radians += rhs.radians;
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians - rhs.radians)
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Angle) {
        self.radians -= rhs.radians;
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle::from_radians(-self.radians)
    }
}

impl Mul<f32> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f32) -> Angle {
        Angle::from_radians(self.radians * rhs)
    }
}

impl Mul<Angle> for f32 {
    type Output = Angle;
    fn mul(self, rhs: Angle) -> Angle {
        rhs * self
    }
}

impl Div<f32> for Angle {
    type Output = Angle;
    fn div(self, rhs: f32) -> Angle {
        Angle::from_radians(self.radians / rhs)
    }
}

/// Literal-like construction of angles: `90.0_f32.degrees()`, `0.25_f32.turns()`.
pub trait AngleExt {
    fn radians(self) -> Angle;
    fn degrees(self) -> Angle;
    fn turns(self) -> Angle;
}

impl AngleExt for f32 {
    fn radians(self) -> Angle {
        Angle::from_radians(self)
    }
    fn degrees(self) -> Angle {
        Angle::from_degrees(self)
    }
    fn turns(self) -> Angle {
        Angle::from_turns(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PI;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn degrees_round_trip() {
        for x in [-720.0, -90.0, -1.5, 0.0, 0.1, 45.0, 360.0, 1234.5] {
            assert!(approx_eq(Angle::from_degrees(x).as_degrees(), x), "{x}");
        }
    }

    #[test]
    fn turns_round_trip() {
        for x in [-3.0, -0.25, 0.0, 0.5, 1.0, 2.75] {
            assert!(approx_eq(Angle::from_turns(x).as_turns(), x), "{x}");
        }
    }

    #[test]
    fn one_turn_is_tau_radians_and_360_degrees() {
        let a = Angle::from_turns(1.0);
        let b = Angle::from_radians(TAU);
        let c = Angle::from_degrees(360.0);
        assert!(approx_eq(a.as_radians(), b.as_radians()));
        assert!(approx_eq(b.as_radians(), c.as_radians()));
    }

    #[test]
    fn no_wraparound() {
        assert!(approx_eq(1.5_f32.turns().as_degrees(), 540.0));
        assert!(approx_eq(Angle::from_degrees(-90.0).as_turns(), -0.25));
    }

    #[test]
    fn vector_space_operations() {
        let a = 30.0_f32.degrees();
        let b = 60.0_f32.degrees();
        assert!(approx_eq((a + b).as_degrees(), 90.0));
        assert!(approx_eq((b - a).as_degrees(), 30.0));
        assert!(approx_eq((-a).as_degrees(), -30.0));
        assert!(approx_eq((a * 3.0).as_degrees(), 90.0));
        assert!(approx_eq((2.0 * a).as_degrees(), 60.0));
        assert!(approx_eq((b / 2.0).as_degrees(), 30.0));

        let mut c = a;
        c += b;
        c -= 45.0_f32.degrees();
        assert!(approx_eq(c.as_degrees(), 45.0));
    }

    #[test]
    fn from_direction_matches_atan2() {
        assert!(approx_eq(Angle::from_direction(Vec2::new(1.0, 0.0)).as_radians(), 0.0));
        assert!(approx_eq(Angle::from_direction(Vec2::new(0.0, 3.0)).as_radians(), PI / 2.0));
        assert!(approx_eq(Angle::from_direction(Vec2::new(-2.0, 0.0)).as_radians(), PI));
    }

    #[test]
    fn direction_is_unit() {
        let d = 0.125_f32.turns().direction();
        assert!(approx_eq(d.length(), 1.0));
        assert!(approx_eq(d.x, d.y));
    }
}
