//! Virtual clock resource.
//!
//! A [`Clock`] answers "what time is it" for a sketch. Two strategies exist:
//!
//! - [`RealtimeClock`] follows the wall clock, minus the time spent paused.
//! - [`FixedTimestepClock`] advances by exactly `1 / framerate` on every
//!   [`Clock::update`], whatever the wall clock says. Used for video export.
//!
//! Both expose the same play/pause state. Switching strategy at runtime goes
//! through [`swap_strategy`], which carries the current time and play state
//! over to the new clock.
//!
//! # Usage contract
//!
//! [`Clock::update`] must be called exactly once per frame, after the frame's
//! work and before the next frame reads [`Clock::delta_time`]. Reading the
//! clock before the first update, or updating several times within one frame,
//! is not detected: the values are simply stale or too fine-grained.

use std::sync::Arc;
use std::time::Instant;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use super::timesource::{SteadyTimeSource, TimeSource};

/// Which strategy a [`Clock`] uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum TimeMode {
    #[default]
    Realtime,
    FixedTimestep { framerate: f64 },
}

/// Clock that follows the wall clock, excluding paused intervals.
#[derive(Debug, Clone)]
pub struct RealtimeClock {
    source: Arc<dyn TimeSource>,
    /// Instant at which the clock read `anchor_time`.
    anchor: Instant,
    anchor_time: f64,
    last_frame: Instant,
    this_frame: Instant,
    paused_at: Instant,
    primed: bool,
    playing: bool,
}

impl RealtimeClock {
    pub fn new() -> Self {
        Self::with_source(Arc::new(SteadyTimeSource))
    }

    pub fn with_source(source: Arc<dyn TimeSource>) -> Self {
        let now = source.now();
        Self {
            source,
            anchor: now,
            anchor_time: 0.0,
            last_frame: now,
            this_frame: now,
            paused_at: now,
            primed: false,
            playing: true,
        }
    }

    pub fn time_source(&self) -> Arc<dyn TimeSource> {
        Arc::clone(&self.source)
    }

    pub fn time(&self) -> f64 {
        self.anchor_time + self.this_frame.duration_since(self.anchor).as_secs_f64()
    }

    pub fn delta_time(&self) -> f64 {
        if !self.playing {
            return 0.0;
        }
        self.this_frame
            .duration_since(self.last_frame)
            .as_secs_f64()
    }

    pub fn set_time(&mut self, new_time: f64) {
        self.anchor = self.this_frame;
        self.anchor_time = new_time;
    }

    pub fn update(&mut self) {
        if !self.playing {
            return;
        }
        let now = self.source.now();
        if !self.primed {
            // No previous frame yet: the first delta is 0.
            self.last_frame = now;
            self.primed = true;
        } else {
            self.last_frame = self.this_frame;
        }
        self.this_frame = now;
    }

    pub fn play(&mut self) {
        if self.playing {
            return;
        }
        self.playing = true;
        // Shift every reference forward as if the pause never happened.
        let paused_for = self.source.now().duration_since(self.paused_at);
        self.anchor += paused_for;
        self.last_frame += paused_for;
        self.this_frame += paused_for;
    }

    pub fn pause(&mut self) {
        if !self.playing {
            return;
        }
        self.playing = false;
        self.paused_at = self.source.now();
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl Default for RealtimeClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Clock that advances by a constant step per update.
///
/// `framerate` is expected to be positive.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedTimestepClock {
    framerate: f64,
    base_time: f64,
    frames: u64,
    playing: bool,
}

impl FixedTimestepClock {
    pub fn new(framerate: f64) -> Self {
        Self {
            framerate,
            base_time: 0.0,
            frames: 0,
            playing: true,
        }
    }

    pub fn framerate(&self) -> f64 {
        self.framerate
    }

    pub fn time(&self) -> f64 {
        // Computed from the frame count, not accumulated, so N updates at
        // 60fps give exactly N / 60.
        self.base_time + self.frames as f64 / self.framerate
    }

    pub fn delta_time(&self) -> f64 {
        if self.playing { 1.0 / self.framerate } else { 0.0 }
    }

    pub fn set_time(&mut self, new_time: f64) {
        self.base_time = new_time;
        self.frames = 0;
    }

    pub fn update(&mut self) {
        if self.playing {
            self.frames += 1;
        }
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

/// The sketch clock, one strategy at a time.
#[derive(Resource, Debug, Clone)]
pub enum Clock {
    Realtime(RealtimeClock),
    FixedTimestep(FixedTimestepClock),
}

impl Default for Clock {
    fn default() -> Self {
        Clock::Realtime(RealtimeClock::new())
    }
}

impl Clock {
    pub fn realtime() -> Self {
        Clock::Realtime(RealtimeClock::new())
    }

    pub fn realtime_with_source(source: Arc<dyn TimeSource>) -> Self {
        Clock::Realtime(RealtimeClock::with_source(source))
    }

    pub fn fixed_timestep(framerate: f64) -> Self {
        Clock::FixedTimestep(FixedTimestepClock::new(framerate))
    }

    pub fn mode(&self) -> TimeMode {
        match self {
            Clock::Realtime(_) => TimeMode::Realtime,
            Clock::FixedTimestep(c) => TimeMode::FixedTimestep {
                framerate: c.framerate(),
            },
        }
    }

    /// Seconds since the clock's origin.
    pub fn time(&self) -> f64 {
        match self {
            Clock::Realtime(c) => c.time(),
            Clock::FixedTimestep(c) => c.time(),
        }
    }

    /// Seconds between the two last updates; exactly 0 while paused.
    pub fn delta_time(&self) -> f64 {
        match self {
            Clock::Realtime(c) => c.delta_time(),
            Clock::FixedTimestep(c) => c.delta_time(),
        }
    }

    /// Re-anchor the clock so that [`Clock::time`] now returns `new_time`.
    ///
    /// The next [`Clock::delta_time`] is not affected by the jump.
    pub fn set_time(&mut self, new_time: f64) {
        match self {
            Clock::Realtime(c) => c.set_time(new_time),
            Clock::FixedTimestep(c) => c.set_time(new_time),
        }
    }

    /// Advance by one frame. Does nothing while paused.
    pub fn update(&mut self) {
        match self {
            Clock::Realtime(c) => c.update(),
            Clock::FixedTimestep(c) => c.update(),
        }
    }

    pub fn play(&mut self) {
        match self {
            Clock::Realtime(c) => c.play(),
            Clock::FixedTimestep(c) => c.play(),
        }
    }

    pub fn pause(&mut self) {
        match self {
            Clock::Realtime(c) => c.pause(),
            Clock::FixedTimestep(c) => c.pause(),
        }
    }

    pub fn toggle_play_pause(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn is_playing(&self) -> bool {
        match self {
            Clock::Realtime(c) => c.is_playing(),
            Clock::FixedTimestep(c) => c.is_playing(),
        }
    }

    /// Time source of a realtime clock.
    pub fn time_source(&self) -> Option<Arc<dyn TimeSource>> {
        match self {
            Clock::Realtime(c) => Some(c.time_source()),
            Clock::FixedTimestep(_) => None,
        }
    }

    /// Switch strategy in place, keeping the current time and play state.
    pub fn set_mode(&mut self, mode: TimeMode) {
        *self = swap_strategy(self, mode);
    }
}

/// Build a clock using `mode` that continues where `old` is.
///
/// A new realtime clock reuses `old`'s time source when `old` is realtime,
/// and the operating-system clock otherwise.
pub fn swap_strategy(old: &Clock, mode: TimeMode) -> Clock {
    let source = old
        .time_source()
        .unwrap_or_else(|| Arc::new(SteadyTimeSource));
    swap_strategy_with_source(old, mode, source)
}

/// Same as [`swap_strategy`] with an explicit time source for realtime mode.
pub fn swap_strategy_with_source(
    old: &Clock,
    mode: TimeMode,
    source: Arc<dyn TimeSource>,
) -> Clock {
    let time = old.time();
    let was_playing = old.is_playing();
    let mut new = match mode {
        TimeMode::Realtime => Clock::realtime_with_source(source),
        TimeMode::FixedTimestep { framerate } => Clock::fixed_timestep(framerate),
    };
    new.set_time(time);
    if !was_playing {
        new.pause();
    }
    log::info!(
        "Clock switched from {:?} to {:?} at t={:.3}s ({})",
        old.mode(),
        mode,
        time,
        if was_playing { "playing" } else { "paused" }
    );
    new
}
