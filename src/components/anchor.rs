//! Anchor and size descriptors.
//!
//! These small value types say *where* a shape goes and *how big* it is,
//! without committing to a transform. They collapse into two tagged unions,
//! [`Anchor`] and [`SizeSpec`], which is what
//! [`make_transform`](crate::placement::make_transform) consumes.
//!
//! Coordinates follow the canvas convention: y points up, the vertical
//! half-extent of the canvas is 1 and the horizontal half-extent is the
//! aspect ratio.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One of the four corners of a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Vector from this corner to the shape's center, in the local space of
    /// the unit shape (before scale and rotation).
    pub fn offset_to_center(self) -> Vec2 {
        match self {
            Corner::TopLeft => Vec2::new(1.0, -1.0),
            Corner::TopRight => Vec2::new(-1.0, -1.0),
            Corner::BottomLeft => Vec2::new(1.0, 1.0),
            Corner::BottomRight => Vec2::new(-1.0, 1.0),
        }
    }
}

/// The point a shape is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Anchor {
    Center(Vec2),
    Corner(Corner, Vec2),
}

impl Default for Anchor {
    fn default() -> Self {
        Anchor::Center(Vec2::ZERO)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Center(pub Vec2);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TopLeftCorner(pub Vec2);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TopRightCorner(pub Vec2);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BottomLeftCorner(pub Vec2);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BottomRightCorner(pub Vec2);

impl From<Center> for Anchor {
    fn from(value: Center) -> Self {
        Anchor::Center(value.0)
    }
}

impl From<TopLeftCorner> for Anchor {
    fn from(value: TopLeftCorner) -> Self {
        Anchor::Corner(Corner::TopLeft, value.0)
    }
}

impl From<TopRightCorner> for Anchor {
    fn from(value: TopRightCorner) -> Self {
        Anchor::Corner(Corner::TopRight, value.0)
    }
}

impl From<BottomLeftCorner> for Anchor {
    fn from(value: BottomLeftCorner) -> Self {
        Anchor::Corner(Corner::BottomLeft, value.0)
    }
}

impl From<BottomRightCorner> for Anchor {
    fn from(value: BottomRightCorner) -> Self {
        Anchor::Corner(Corner::BottomRight, value.0)
    }
}

/// How the half-extents of a shape are given.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SizeSpec {
    /// Same half-extent on both axes.
    Uniform(f32),
    /// Explicit half-extent per axis.
    PerAxis(Vec2),
    /// Horizontal half-extent given; the vertical one keeps `aspect_ratio`.
    AxisXWithAspect { radius: f32, aspect_ratio: f32 },
    /// Vertical half-extent given; the horizontal one keeps `aspect_ratio`.
    AxisYWithAspect { radius: f32, aspect_ratio: f32 },
}

impl SizeSpec {
    /// Per-axis half-extents described by this size.
    pub fn radii(self) -> Vec2 {
        match self {
            SizeSpec::Uniform(r) => Vec2::splat(r),
            SizeSpec::PerAxis(radii) => radii,
            SizeSpec::AxisXWithAspect {
                radius,
                aspect_ratio,
            } => Vec2::new(radius, radius / aspect_ratio),
            SizeSpec::AxisYWithAspect {
                radius,
                aspect_ratio,
            } => Vec2::new(radius * aspect_ratio, radius),
        }
    }
}

impl Default for SizeSpec {
    fn default() -> Self {
        SizeSpec::Uniform(1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Radius(pub f32);

impl Default for Radius {
    fn default() -> Self {
        Radius(1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Radii(pub Vec2);

impl Radii {
    pub fn new(x: f32, y: f32) -> Self {
        Radii(Vec2::new(x, y))
    }
}

impl Default for Radii {
    fn default() -> Self {
        Radii(Vec2::ONE)
    }
}

/// Horizontal half-extent of an image; pair it with the image's aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusX(pub f32);

impl RadiusX {
    pub fn with_aspect_ratio(self, aspect_ratio: f32) -> SizeSpec {
        SizeSpec::AxisXWithAspect {
            radius: self.0,
            aspect_ratio,
        }
    }
}

impl Default for RadiusX {
    fn default() -> Self {
        RadiusX(1.0)
    }
}

/// Vertical half-extent of an image; pair it with the image's aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusY(pub f32);

impl RadiusY {
    pub fn with_aspect_ratio(self, aspect_ratio: f32) -> SizeSpec {
        SizeSpec::AxisYWithAspect {
            radius: self.0,
            aspect_ratio,
        }
    }
}

impl Default for RadiusY {
    fn default() -> Self {
        RadiusY(1.0)
    }
}

impl From<Radius> for SizeSpec {
    fn from(value: Radius) -> Self {
        SizeSpec::Uniform(value.0)
    }
}

impl From<Radii> for SizeSpec {
    fn from(value: Radii) -> Self {
        SizeSpec::PerAxis(value.0)
    }
}

/// Ways to stretch an image over the whole canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFit {
    /// Largest size that shows the whole image, keeping its proportions.
    #[default]
    Fit,
    /// Image width matches the canvas width.
    FitX,
    /// Image height matches the canvas height.
    FitY,
    /// Image covers the canvas exactly, ignoring its proportions.
    FullScreen,
}
