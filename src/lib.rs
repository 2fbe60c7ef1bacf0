//! Easel library.
//!
//! Placement math and a virtual clock for creative-coding sketches, plus the
//! headless pieces of a sketch context (ECS resources, clock events, draw
//! list) for use by render backends and integration tests.
//!
//! - [`placement`] – anchors, sizes and rotations to [`Transform2D`](components::transform2d::Transform2D)
//! - [`resources::clock`] – realtime and fixed-timestep clocks with pause/resume
//! - [`sketch`] – frame loop tying the clock, pacing and draw systems together

pub mod components;
pub mod events;
pub mod math;
pub mod placement;
pub mod random;
pub mod resources;
pub mod sketch;
pub mod systems;
