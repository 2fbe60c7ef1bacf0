//! Window size resource.
//!
//! Tracks the actual window dimensions in pixels, which may differ from the
//! canvas size. The canvas is shown centred in the window, scaled to fit
//! (letterbox/pillarbox), and mouse positions have to be converted back to
//! canvas coordinates.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

use super::canvassize::CanvasSize;

/// Area of the window covered by the canvas, in window pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Letterbox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Current window size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl WindowSize {
    pub fn aspect_ratio(&self) -> f32 {
        self.w as f32 / self.h as f32
    }

    /// Destination rectangle of the canvas inside the window.
    ///
    /// Preserves the canvas aspect ratio, fits within the window and centres
    /// the content.
    pub fn calculate_letterbox(&self, canvas: &CanvasSize) -> Letterbox {
        let canvas_w = canvas.w as f32;
        let canvas_h = canvas.h as f32;
        let window_w = self.w as f32;
        let window_h = self.h as f32;

        if self.aspect_ratio() > canvas.aspect_ratio() {
            // Window is wider than the canvas: bars on the sides
            let scaled_w = canvas_w * window_h / canvas_h;
            Letterbox {
                x: (window_w - scaled_w) / 2.0,
                y: 0.0,
                width: scaled_w,
                height: window_h,
            }
        } else {
            // Window is taller than the canvas: bars top and bottom
            let scaled_h = canvas_h * window_w / canvas_w;
            Letterbox {
                x: 0.0,
                y: (window_h - scaled_h) / 2.0,
                width: window_w,
                height: scaled_h,
            }
        }
    }

    /// How much larger canvas units are than window units.
    ///
    /// 1 when the canvas fills the window height, greater than 1 when the
    /// canvas is wider than the window and gets letterboxed.
    pub fn canvas_ratio(&self, canvas: &CanvasSize) -> f32 {
        let canvas_ratio = canvas.aspect_ratio();
        let window_ratio = self.aspect_ratio();
        if canvas_ratio > window_ratio {
            canvas_ratio / window_ratio
        } else {
            1.0
        }
    }

    /// Convert a window position (pixels, y pointing down, origin top-left)
    /// into canvas coordinates.
    ///
    /// Positions in the letterbox bars map outside of the canvas; use
    /// [`CanvasSize::contains`] to test for that.
    pub fn window_to_canvas_pos(&self, window_pos: Vec2, canvas: &CanvasSize) -> Vec2 {
        let w = self.w as f32;
        let h = self.h as f32;

        let mut pos = Vec2::new(window_pos.x, h - window_pos.y); // y up
        pos -= Vec2::new(w / 2.0, h / 2.0); // centre around 0
        pos /= h / 2.0; // normalize
        pos * self.canvas_ratio(canvas)
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self { w: 1280, h: 720 }
    }
}
