//! ECS resources made available to systems.
//!
//! Overview
//! - `canvassize` – canvas dimensions and canvas/pixel coordinate mapping
//! - `clock` – realtime and fixed-timestep clocks
//! - `drawlist` – shapes recorded during the current frame
//! - `framepacing` – warm-up frames and framerate capping
//! - `sketchconfig` – settings loaded from an INI file
//! - `timesource` – wall-clock sources for the realtime clock
//! - `transformstack` – user transform applied to every draw command
//! - `windowsize` – window dimensions and letterboxing
//! - `worldtime` – per-frame snapshot of the clock
pub mod canvassize;
pub mod clock;
pub mod drawlist;
pub mod framepacing;
pub mod sketchconfig;
pub mod timesource;
pub mod transformstack;
pub mod windowsize;
pub mod worldtime;
