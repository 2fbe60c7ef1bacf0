//! Canvas size resource.
//!
//! The canvas is what sketches draw on. Its coordinate system has y pointing
//! up, the origin at the center, a vertical half-extent of 1 and a
//! horizontal half-extent equal to the aspect ratio. This resource converts
//! between those coordinates and pixels.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

use crate::math::map;

/// Current canvas size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl CanvasSize {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.w as f32 / self.h as f32
    }

    /// Height over width.
    pub fn inverse_aspect_ratio(&self) -> f32 {
        self.h as f32 / self.w as f32
    }

    /// Whether `pos` (canvas coordinates) lies on the canvas, borders included.
    pub fn contains(&self, pos: Vec2) -> bool {
        let ar = self.aspect_ratio();
        pos.x >= -ar && pos.x <= ar && pos.y >= -1.0 && pos.y <= 1.0
    }

    /// Pixel under `pos`. Pixel rows count upwards from the bottom edge.
    pub fn relative_to_pixel(&self, pos: Vec2) -> (i32, i32) {
        let ar = self.aspect_ratio();
        let x = map(pos.x, -ar, ar, 0.0, self.w as f32);
        let y = map(pos.y, -1.0, 1.0, 0.0, self.h as f32);
        (x as i32, y as i32)
    }

    /// Canvas coordinates of a pixel position (bottom-up rows).
    pub fn pixel_to_relative(&self, pixel: Vec2) -> Vec2 {
        let ar = self.aspect_ratio();
        Vec2 {
            x: map(pixel.x, 0.0, self.w as f32, -ar, ar),
            y: map(pixel.y, 0.0, self.h as f32, -1.0, 1.0),
        }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}
