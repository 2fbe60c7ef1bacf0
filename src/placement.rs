//! Transform builder.
//!
//! Turns an anchor, a size and a rotation into a [`Transform2D`]. All
//! drawing primitives go through [`make_transform`], so a rectangle, an
//! ellipse and an image placed with the same descriptors land on the same
//! spot.
//!
//! Corner anchors are resolved by moving from the corner to the center:
//! the per-corner unit offset is scaled by the radii, then rotated, then
//! added to the corner point. Scaling before rotating keeps the named corner
//! of a rotated shape exactly on the given point.

use glam::Vec2;

use crate::components::anchor::{Anchor, ImageFit, RadiusX, RadiusY, SizeSpec};
use crate::components::rotation::Rotation;
use crate::components::transform2d::Transform2D;
use crate::math::{Angle, rotated_by};

/// Build the transform of a shape attached at `anchor` with the given size
/// and rotation.
///
/// Degenerate sizes (zero or negative radii) are passed through unchanged.
pub fn make_transform(
    anchor: impl Into<Anchor>,
    size: impl Into<SizeSpec>,
    rotation: impl Into<Rotation>,
) -> Transform2D {
    let radii = size.into().radii();
    let rotation = rotation.into();
    let center = match anchor.into() {
        Anchor::Center(center) => center,
        Anchor::Corner(corner, position) => {
            position + rotated_by(rotation.angle(), radii * corner.offset_to_center())
        }
    };
    Transform2D {
        position: center,
        scale: radii,
        rotation,
    }
}

/// A shape that exactly covers a canvas of the given aspect ratio.
pub fn full_screen(aspect_ratio: f32) -> Transform2D {
    make_transform(
        Anchor::Center(Vec2::ZERO),
        SizeSpec::PerAxis(Vec2::new(aspect_ratio, 1.0)),
        Rotation::default(),
    )
}

/// Centred image whose width matches the canvas width.
pub fn fit_x(image_aspect_ratio: f32, canvas_aspect_ratio: f32) -> Transform2D {
    make_transform(
        Anchor::default(),
        RadiusX(canvas_aspect_ratio).with_aspect_ratio(image_aspect_ratio),
        Rotation::default(),
    )
}

/// Centred image whose height matches the canvas height.
pub fn fit_y(image_aspect_ratio: f32) -> Transform2D {
    make_transform(
        Anchor::default(),
        RadiusY(1.0).with_aspect_ratio(image_aspect_ratio),
        Rotation::default(),
    )
}

/// Largest centred image that is fully visible on the canvas.
pub fn fit(image_aspect_ratio: f32, canvas_aspect_ratio: f32) -> Transform2D {
    if image_aspect_ratio < canvas_aspect_ratio {
        fit_y(image_aspect_ratio)
    } else {
        fit_x(image_aspect_ratio, canvas_aspect_ratio)
    }
}

/// Thick segment from `start` to `end`, drawn as a rectangle.
///
/// The rectangle extends `stroke_weight` past both ends so the caps are
/// square. A zero-length segment is horizontal.
pub fn line(start: Vec2, end: Vec2, stroke_weight: f32) -> Transform2D {
    let along = end - start;
    make_transform(
        Anchor::Center((start + end) / 2.0),
        SizeSpec::PerAxis(Vec2::new(
            along.length() / 2.0 + stroke_weight,
            stroke_weight,
        )),
        Rotation(Angle::from_direction(along)),
    )
}

pub fn image_fit(mode: ImageFit, image_aspect_ratio: f32, canvas_aspect_ratio: f32) -> Transform2D {
    match mode {
        ImageFit::Fit => fit(image_aspect_ratio, canvas_aspect_ratio),
        ImageFit::FitX => fit_x(image_aspect_ratio, canvas_aspect_ratio),
        ImageFit::FitY => fit_y(image_aspect_ratio),
        ImageFit::FullScreen => full_screen(canvas_aspect_ratio),
    }
}
