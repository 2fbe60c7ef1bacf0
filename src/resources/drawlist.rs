//! Draw list resource.
//!
//! Records what a sketch draws during a frame. Each command keeps the shape's
//! [`Transform2D`], the final matrix (transform stack times shape matrix) and
//! the [`DrawStyle`] that was current when it was recorded. The render
//! backend replays the list, binding `matrix`, the style and the canvas
//! aspect ratio as shader uniforms and drawing the unit quad.
//!
//! The style persists across frames; only the commands are cleared.

use bevy_ecs::prelude::Resource;
use glam::{Mat3, Vec2};
use serde::{Deserialize, Serialize};

use super::canvassize::CanvasSize;
use super::transformstack::TransformStack;
use crate::components::anchor::ImageFit;
use crate::components::style::{Color, DrawStyle};
use crate::components::transform2d::Transform2D;
use crate::placement;

/// Kind of primitive drawn over the unit quad.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle,
    Ellipse,
    Image { aspect_ratio: f32 },
    /// Segment rendered as a rectangle in the stroke color.
    Line,
    /// Vertices in canvas coordinates; the command's transform is the identity.
    Triangle { points: [Vec2; 3] },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub shape: Shape,
    pub transform: Transform2D,
    pub matrix: Mat3,
    pub style: DrawStyle,
}

#[derive(Resource, Clone, Debug, Default)]
pub struct DrawList {
    /// Style applied to the commands recorded from now on.
    pub style: DrawStyle,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: Shape, transform: Transform2D, stack: &TransformStack) {
        self.commands.push(DrawCommand {
            shape,
            transform,
            matrix: stack.current_matrix() * transform.matrix(),
            style: self.style,
        });
    }

    pub fn fill(&mut self, color: Color) {
        self.style.fill = color;
        self.style.use_fill = true;
    }

    pub fn no_fill(&mut self) {
        self.style.use_fill = false;
    }

    pub fn stroke(&mut self, color: Color) {
        self.style.stroke = color;
        self.style.use_stroke = true;
    }

    pub fn no_stroke(&mut self) {
        self.style.use_stroke = false;
    }

    pub fn stroke_weight(&mut self, weight: f32) {
        self.style.stroke_weight = weight;
    }

    /// Segment from `start` to `end`, as thick as the current stroke weight.
    pub fn line(&mut self, stack: &TransformStack, start: Vec2, end: Vec2) {
        let transform = placement::line(start, end, self.style.stroke_weight);
        self.push(Shape::Line, transform, stack);
    }

    pub fn triangle(&mut self, stack: &TransformStack, p1: Vec2, p2: Vec2, p3: Vec2) {
        self.push(
            Shape::Triangle {
                points: [p1, p2, p3],
            },
            Transform2D::default(),
            stack,
        );
    }

    pub fn rectangle(&mut self, stack: &TransformStack, transform: Transform2D) {
        self.push(Shape::Rectangle, transform, stack);
    }

    pub fn ellipse(&mut self, stack: &TransformStack, transform: Transform2D) {
        self.push(Shape::Ellipse, transform, stack);
    }

    pub fn image(&mut self, stack: &TransformStack, image_aspect_ratio: f32, transform: Transform2D) {
        self.push(
            Shape::Image {
                aspect_ratio: image_aspect_ratio,
            },
            transform,
            stack,
        );
    }

    /// Rectangle covering the whole canvas.
    pub fn full_screen_rectangle(&mut self, stack: &TransformStack, canvas: &CanvasSize) {
        self.rectangle(stack, placement::full_screen(canvas.aspect_ratio()));
    }

    pub fn image_fit(
        &mut self,
        stack: &TransformStack,
        canvas: &CanvasSize,
        image_aspect_ratio: f32,
        mode: ImageFit,
    ) {
        let transform = placement::image_fit(mode, image_aspect_ratio, canvas.aspect_ratio());
        self.image(stack, image_aspect_ratio, transform);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}
