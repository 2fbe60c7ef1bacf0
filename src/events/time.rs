//! Clock control events and observers.
//!
//! Sketch code and input handlers request clock changes by triggering these
//! events instead of touching the [`Clock`] resource directly:
//!
//! - [`SetTimeModeEvent`] – switch between realtime and fixed timestep,
//!   keeping the current time and play state
//! - [`PauseEvent`] / [`ResumeEvent`] / [`TogglePlayPauseEvent`] – play state
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(set_time_mode_observer);
//! world.trigger(SetTimeModeEvent { mode: TimeMode::FixedTimestep { framerate: 30.0 } });
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::resources::clock::{Clock, TimeMode, swap_strategy, swap_strategy_with_source};
use crate::resources::framepacing::FramePacing;

#[derive(Event, Debug, Clone, Copy)]
pub struct SetTimeModeEvent {
    pub mode: TimeMode,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct PauseEvent {}

#[derive(Event, Debug, Clone, Copy)]
pub struct ResumeEvent {}

#[derive(Event, Debug, Clone, Copy)]
pub struct TogglePlayPauseEvent {}

/// Swap the clock strategy, carrying time and play state over.
///
/// Requests for a fixed timestep with a framerate that is not a positive
/// finite number are ignored.
///
/// A new realtime clock reads the same time source as [`FramePacing`] when
/// that resource exists.
pub fn set_time_mode_observer(
    trigger: On<SetTimeModeEvent>,
    mut clock: ResMut<Clock>,
    pacing: Option<Res<FramePacing>>,
) {
    let mode = trigger.event().mode;
    if let TimeMode::FixedTimestep { framerate } = mode {
        if !(framerate.is_finite() && framerate > 0.0) {
            warn!("Ignoring fixed timestep with invalid framerate {}", framerate);
            return;
        }
    }
    if clock.mode() == mode {
        return;
    }
    *clock = match pacing {
        Some(pacing) => swap_strategy_with_source(&clock, mode, pacing.time_source()),
        None => swap_strategy(&clock, mode),
    };
}

pub fn pause_observer(_trigger: On<PauseEvent>, mut clock: ResMut<Clock>) {
    if clock.is_playing() {
        info!("Clock paused at t={:.3}s", clock.time());
    }
    clock.pause();
}

pub fn resume_observer(_trigger: On<ResumeEvent>, mut clock: ResMut<Clock>) {
    if !clock.is_playing() {
        info!("Clock resumed at t={:.3}s", clock.time());
    }
    clock.play();
}

pub fn toggle_play_pause_observer(_trigger: On<TogglePlayPauseEvent>, mut clock: ResMut<Clock>) {
    clock.toggle_play_pause();
    info!(
        "Clock {} at t={:.3}s",
        if clock.is_playing() { "resumed" } else { "paused" },
        clock.time()
    );
}

/// Register all clock observers on `world`.
pub fn register_clock_observers(world: &mut World) {
    world.add_observer(set_time_mode_observer);
    world.add_observer(pause_observer);
    world.add_observer(resume_observer);
    world.add_observer(toggle_play_pause_observer);
    world.flush();
}
