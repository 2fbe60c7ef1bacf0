//! Sketch systems.
//!
//! Submodules overview
//! - [`time`] – advance the clock and snapshot it into `WorldTime`
pub mod time;
