//! Fill and stroke style recorded with every draw command.
//!
//! [`Color`] holds straight (non-premultiplied) RGBA in `[0, 1]`. Render
//! backends usually want [`Color::premultiplied`].

use glam::Vec4;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn straight(&self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }

    /// RGB multiplied by alpha, alpha unchanged.
    pub fn premultiplied(&self) -> Vec4 {
        Vec4::new(self.r * self.a, self.g * self.a, self.b * self.a, self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// How shapes are filled and outlined.
///
/// `stroke_weight` is in canvas units, like radii.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawStyle {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_weight: f32,
    pub use_fill: bool,
    pub use_stroke: bool,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            fill: Color::new(1.0, 1.0, 1.0, 0.5),
            stroke: Color::BLACK,
            stroke_weight: 0.01,
            use_fill: true,
            use_stroke: true,
        }
    }
}

impl DrawStyle {
    /// Fill color a backend should use, transparent when filling is off.
    pub fn effective_fill(&self) -> Color {
        if self.use_fill {
            self.fill
        } else {
            Color::TRANSPARENT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_is_opaque() {
        let c = Color::rgb(0.2, 0.4, 0.6);
        assert_eq!(c.a, 1.0);
        assert_eq!(c.straight(), Vec4::new(0.2, 0.4, 0.6, 1.0));
    }

    #[test]
    fn test_premultiplied_scales_rgb_only() {
        let c = Color::new(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c.premultiplied(), Vec4::new(0.5, 0.25, 0.0, 0.5));
        assert_eq!(Color::WHITE.premultiplied(), Color::WHITE.straight());
    }

    #[test]
    fn test_default_style() {
        let style = DrawStyle::default();
        assert!(style.use_fill);
        assert!(style.use_stroke);
        assert_eq!(style.stroke, Color::BLACK);
        assert_eq!(style.fill.a, 0.5);
    }

    #[test]
    fn test_no_fill_is_transparent() {
        let style = DrawStyle {
            use_fill: false,
            ..Default::default()
        };
        assert_eq!(style.effective_fill(), Color::TRANSPARENT);
        assert_eq!(DrawStyle::default().effective_fill(), DrawStyle::default().fill);
    }
}
