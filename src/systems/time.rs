//! Clock update systems.
//!
//! [`advance_clock`] steps the [`Clock`] resource once per frame, honouring
//! warm-up frames and frame pacing. [`sync_world_time`] then copies the clock
//! into the [`WorldTime`] snapshot read by the rest of the frame.
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::clock::Clock;
use crate::resources::framepacing::FramePacing;
use crate::resources::worldtime::WorldTime;

/// What happened to the clock this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStep {
    /// Warm-up frame: the clock was updated but nothing should be drawn.
    WarmUp,
    /// The clock advanced; run the sketch's update.
    Advanced,
    /// Paused, or too early for a capped framerate.
    Skipped,
}

/// Advance the clock by one frame.
///
/// Must run once per frame. The sketch's own update should only run when
/// this returns [`FrameStep::Advanced`].
pub fn advance_clock(world: &mut World) -> FrameStep {
    let warming_up = world.resource_mut::<FramePacing>().take_warmup_frame();
    if warming_up {
        // Only the realtime clock needs priming; a fixed step must not drift.
        let mut clock = world.resource_mut::<Clock>();
        if let Clock::Realtime(realtime) = &mut *clock {
            realtime.update();
        }
        debug!("Warm-up frame");
        return FrameStep::WarmUp;
    }

    let playing = world.resource::<Clock>().is_playing();
    let now = world.resource::<FramePacing>().now();
    if !playing || world.resource::<FramePacing>().needs_to_wait(now) {
        return FrameStep::Skipped;
    }

    world.resource_mut::<Clock>().update();
    world.resource_mut::<FramePacing>().mark_updated(now);
    world.resource_mut::<WorldTime>().frame_count += 1;
    FrameStep::Advanced
}

/// Copy the clock state into [`WorldTime`].
pub fn sync_world_time(clock: Res<Clock>, mut world_time: ResMut<WorldTime>) {
    world_time.elapsed = clock.time();
    world_time.delta = clock.delta_time();
    world_time.playing = clock.is_playing();
}
