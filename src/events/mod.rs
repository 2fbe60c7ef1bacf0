//! Event types and observers used by the sketch context.
//!
//! Submodules:
//! - [`time`] – clock strategy switches and pause/resume requests
pub mod time;
