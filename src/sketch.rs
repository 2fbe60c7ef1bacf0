//! Headless sketch context.
//!
//! [`Sketch`] owns the ECS world with every sketch resource (clock, canvas,
//! transform stack, draw list, pacing) and runs frames:
//!
//! 1. [`advance_clock`] steps the clock (warm-up, pacing, pause)
//! 2. [`sync_world_time`] snapshots the clock into [`WorldTime`]
//! 3. when the clock advanced, the draw list is cleared, the transform stack
//!    reset, and the user's draw systems run
//!
//! Presenting the draw list on screen is left to a render backend.

use std::sync::Arc;

use bevy_ecs::prelude::*;
use bevy_ecs::system::ScheduleSystem;
use log::info;

use crate::events::time::{
    PauseEvent, ResumeEvent, SetTimeModeEvent, TogglePlayPauseEvent, register_clock_observers,
};
use crate::resources::canvassize::CanvasSize;
use crate::resources::clock::{Clock, TimeMode};
use crate::resources::drawlist::DrawList;
use crate::resources::framepacing::FramePacing;
use crate::resources::sketchconfig::SketchConfig;
use crate::resources::timesource::{SteadyTimeSource, TimeSource};
use crate::resources::transformstack::TransformStack;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::time::{FrameStep, advance_clock, sync_world_time};

pub struct Sketch {
    pub world: World,
    time_schedule: Schedule,
    draw_schedule: Schedule,
}

impl Sketch {
    /// Build a sketch from `config`, using the operating-system clock.
    pub fn new(config: SketchConfig) -> Self {
        Self::with_time_source(config, Arc::new(SteadyTimeSource))
    }

    /// Build a sketch whose realtime clock and pacing read `source`.
    pub fn with_time_source(config: SketchConfig, source: Arc<dyn TimeSource>) -> Self {
        let mut clock = Clock::realtime_with_source(Arc::clone(&source));
        if let TimeMode::FixedTimestep { .. } = config.time_mode {
            clock.set_mode(config.time_mode);
        }
        if config.paused {
            clock.pause();
        }
        let pacing = FramePacing::with_source(config.framerate_mode, source);

        let mut world = World::new();
        world.insert_resource(clock);
        world.insert_resource(pacing);
        world.insert_resource(WorldTime::default());
        world.insert_resource(CanvasSize::new(config.canvas_width, config.canvas_height));
        world.insert_resource(WindowSize {
            w: config.canvas_width,
            h: config.canvas_height,
        });
        world.insert_resource(TransformStack::new());
        world.insert_resource(DrawList::new());
        info!(
            "Sketch ready: {}x{} canvas, {:?}",
            config.canvas_width, config.canvas_height, config.time_mode
        );
        world.insert_resource(config);
        register_clock_observers(&mut world);

        let mut time_schedule = Schedule::default();
        time_schedule.add_systems(sync_world_time);

        Self {
            world,
            time_schedule,
            draw_schedule: Schedule::default(),
        }
    }

    /// Add systems that draw the sketch. They run once per advanced frame.
    pub fn add_draw_systems<M>(
        &mut self,
        systems: impl IntoScheduleConfigs<ScheduleSystem, M>,
    ) -> &mut Self {
        self.draw_schedule.add_systems(systems);
        self
    }

    /// Run one frame.
    pub fn frame(&mut self) -> FrameStep {
        let step = advance_clock(&mut self.world);
        self.time_schedule.run(&mut self.world);
        if step == FrameStep::Advanced {
            self.world.resource_mut::<DrawList>().clear();
            self.world.resource_mut::<TransformStack>().reset_matrix();
            self.draw_schedule.run(&mut self.world);
        }
        step
    }

    pub fn time(&self) -> f64 {
        self.world.resource::<Clock>().time()
    }

    pub fn delta_time(&self) -> f64 {
        self.world.resource::<Clock>().delta_time()
    }

    pub fn is_paused(&self) -> bool {
        !self.world.resource::<Clock>().is_playing()
    }

    pub fn set_time_mode_realtime(&mut self) {
        self.world.trigger(SetTimeModeEvent {
            mode: TimeMode::Realtime,
        });
    }

    /// Switch to a fixed timestep. Non-positive or non-finite framerates are
    /// ignored with a warning.
    pub fn set_time_mode_fixedstep(&mut self, framerate: f64) {
        self.world.trigger(SetTimeModeEvent {
            mode: TimeMode::FixedTimestep { framerate },
        });
    }

    pub fn pause(&mut self) {
        self.world.trigger(PauseEvent {});
    }

    pub fn resume(&mut self) {
        self.world.trigger(ResumeEvent {});
    }

    pub fn toggle_play_pause(&mut self) {
        self.world.trigger(TogglePlayPauseEvent {});
    }

    pub fn draw_list(&self) -> &DrawList {
        self.world.resource::<DrawList>()
    }

    pub fn canvas(&self) -> CanvasSize {
        *self.world.resource::<CanvasSize>()
    }
}
