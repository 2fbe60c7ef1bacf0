//! Frame pacing resource.
//!
//! Decides whether the frame loop should advance the clock this frame. The
//! first couple of frames are warm-up frames: the clock is updated but
//! nothing is drawn, so that the first visible frame has a meaningful delta.

use std::sync::Arc;
use std::time::{Duration, Instant};

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use super::timesource::{SteadyTimeSource, TimeSource};

pub const DEFAULT_WARMUP_FRAMES: u32 = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum FramerateMode {
    /// Presentation waits for the monitor refresh; no extra pacing.
    #[default]
    SyncedWithMonitor,
    /// Render as fast as possible.
    AsHighAsPossible,
    /// Skip clock updates until `1 / fps` has passed since the last one.
    CappedAt(f32),
}

#[derive(Resource, Debug, Clone)]
pub struct FramePacing {
    pub mode: FramerateMode,
    pub warmup_frames_left: u32,
    last_update: Option<Instant>,
    source: Arc<dyn TimeSource>,
}

impl Default for FramePacing {
    fn default() -> Self {
        Self::new(FramerateMode::default())
    }
}

impl FramePacing {
    pub fn new(mode: FramerateMode) -> Self {
        Self::with_source(mode, Arc::new(SteadyTimeSource))
    }

    pub fn with_source(mode: FramerateMode, source: Arc<dyn TimeSource>) -> Self {
        Self {
            mode,
            warmup_frames_left: DEFAULT_WARMUP_FRAMES,
            last_update: None,
            source,
        }
    }

    pub fn with_warmup_frames(mut self, frames: u32) -> Self {
        self.warmup_frames_left = frames;
        self
    }

    pub fn now(&self) -> Instant {
        self.source.now()
    }

    pub fn time_source(&self) -> Arc<dyn TimeSource> {
        Arc::clone(&self.source)
    }

    /// Minimum time between two clock updates, if capped.
    ///
    /// A cap whose frame duration cannot be represented counts as no cap.
    pub fn capped_delta_time(&self) -> Option<Duration> {
        match self.mode {
            FramerateMode::CappedAt(fps) if fps > 0.0 => {
                Duration::try_from_secs_f32(1.0 / fps).ok()
            }
            _ => None,
        }
    }

    /// True when capped and the last update was less than one frame ago.
    pub fn needs_to_wait(&self, now: Instant) -> bool {
        let (Some(capped), Some(last)) = (self.capped_delta_time(), self.last_update) else {
            return false;
        };
        now.duration_since(last) < capped
    }

    pub fn mark_updated(&mut self, now: Instant) {
        self.last_update = Some(now);
    }

    /// Consume one warm-up frame. Returns false once warm-up is over.
    pub fn take_warmup_frame(&mut self) -> bool {
        if self.warmup_frames_left == 0 {
            return false;
        }
        self.warmup_frames_left -= 1;
        true
    }
}
