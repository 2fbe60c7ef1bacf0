//! Canonical placement of a shape on the canvas.
//!
//! Every drawable shape is the unit shape centred on the origin (half-extent
//! 1 on both axes) mapped by a [`Transform2D`]: first scaled per axis, then
//! rotated, then translated. The [`placement`](crate::placement) functions
//! compute it from anchors; render code turns it into a matrix with
//! [`Transform2D::matrix`].

use bevy_ecs::prelude::*;
use glam::{Mat3, Vec2};
use serde::{Deserialize, Serialize};

use super::anchor::Corner;
use super::rotation::Rotation;
use crate::math::rotated_by;

/// Position, per-axis scale and rotation of a shape.
///
/// Scale components may differ (ellipses, rectangles) and may be zero or
/// negative: degenerate and mirrored shapes are valid values.
#[derive(Component, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Center of the shape in canvas coordinates.
    pub position: Vec2,
    /// Half-extent of the shape along its local axes.
    pub scale: Vec2,
    /// Rotation around `position`.
    pub rotation: Rotation,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: Rotation::default(),
        }
    }
}

impl Transform2D {
    /// Matrix equivalent to translate(position) * rotate(rotation) * scale(scale).
    pub fn matrix(&self) -> Mat3 {
        Mat3::from_scale_angle_translation(
            self.scale,
            self.rotation.angle().as_radians(),
            self.position,
        )
    }

    /// Maps a point from the unit shape's local space to canvas coordinates.
    pub fn transform_point(&self, local: Vec2) -> Vec2 {
        self.position + rotated_by(self.rotation.angle(), self.scale * local)
    }

    /// Where the named corner of the unit square ends up on the canvas.
    pub fn corner(&self, corner: Corner) -> Vec2 {
        self.transform_point(-corner.offset_to_center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Angle;

    const EPSILON: f32 = 1e-5;

    fn vec_approx_eq(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < EPSILON
    }

    #[test]
    fn default_is_identity() {
        let t = Transform2D::default();
        assert_eq!(t.position, Vec2::ZERO);
        assert_eq!(t.scale, Vec2::ONE);
        assert_eq!(t.rotation.angle(), Angle::ZERO);
        assert!(t.matrix().abs_diff_eq(Mat3::IDENTITY, EPSILON));
    }

    #[test]
    fn matrix_agrees_with_transform_point() {
        let t = Transform2D {
            position: Vec2::new(0.5, -0.25),
            scale: Vec2::new(2.0, 0.5),
            rotation: Rotation(Angle::from_degrees(30.0)),
        };
        for local in [Vec2::new(1.0, 1.0), Vec2::new(-1.0, 0.5), Vec2::ZERO] {
            let by_matrix = t.matrix().transform_point2(local);
            assert!(vec_approx_eq(by_matrix, t.transform_point(local)));
        }
    }

    #[test]
    fn corners_of_unrotated_rectangle() {
        let t = Transform2D {
            position: Vec2::new(1.0, 1.0),
            scale: Vec2::new(2.0, 1.0),
            rotation: Rotation::default(),
        };
        assert!(vec_approx_eq(t.corner(Corner::TopLeft), Vec2::new(-1.0, 2.0)));
        assert!(vec_approx_eq(t.corner(Corner::BottomRight), Vec2::new(3.0, 0.0)));
    }

    #[test]
    fn negative_scale_mirrors() {
        let t = Transform2D {
            scale: Vec2::new(-1.0, 1.0),
            ..Default::default()
        };
        assert!(vec_approx_eq(t.transform_point(Vec2::new(1.0, 0.0)), Vec2::new(-1.0, 0.0)));
    }
}
