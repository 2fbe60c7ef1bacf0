//! Transform stack resource.
//!
//! Sketches can move, rotate and scale everything drawn afterwards, and save
//! and restore that state with [`TransformStack::push_transform`] and
//! [`TransformStack::pop_transform`]. Every draw command multiplies its own
//! shape matrix by [`TransformStack::current_matrix`].

use bevy_ecs::prelude::Resource;
use glam::{Mat3, Vec2};
use log::warn;
use smallvec::SmallVec;

use crate::math::Angle;

#[derive(Resource, Clone, Debug)]
pub struct TransformStack {
    current: Mat3,
    saved: SmallVec<[Mat3; 8]>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self {
            current: Mat3::IDENTITY,
            saved: SmallVec::new(),
        }
    }
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&mut self, translation: Vec2) {
        self.apply_matrix(Mat3::from_translation(translation));
    }

    pub fn rotate(&mut self, rotation: Angle) {
        self.apply_matrix(Mat3::from_angle(rotation.as_radians()));
    }

    pub fn scale(&mut self, scale_factor: Vec2) {
        self.apply_matrix(Mat3::from_scale(scale_factor));
    }

    /// Post-multiply: `additional` acts in the local space of the current transform.
    pub fn apply_matrix(&mut self, additional: Mat3) {
        self.current *= additional;
    }

    pub fn set_matrix(&mut self, transform: Mat3) {
        self.current = transform;
    }

    pub fn reset_matrix(&mut self) {
        self.current = Mat3::IDENTITY;
    }

    pub fn push_transform(&mut self) {
        self.saved.push(self.current);
    }

    /// Restore the last pushed matrix.
    ///
    /// Popping an empty stack keeps the current matrix and logs a warning.
    pub fn pop_transform(&mut self) {
        match self.saved.pop() {
            Some(matrix) => self.current = matrix,
            None => warn!("pop_transform called without a matching push_transform"),
        }
    }

    pub fn current_matrix(&self) -> Mat3 {
        self.current
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}
