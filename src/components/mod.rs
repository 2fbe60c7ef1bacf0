//! Placement value types.
//!
//! Submodules overview:
//! - [`anchor`] – where a shape is attached and how its size is given
//! - [`rotation`] – rotation of a shape around its center
//! - [`style`] – fill and stroke colors recorded with draw commands
//! - [`transform2d`] – canonical position, scale and rotation of a shape

pub mod anchor;
pub mod rotation;
pub mod style;
pub mod transform2d;
