use bevy_ecs::prelude::Resource;

/// Per-frame snapshot of the [`Clock`](super::clock::Clock).
///
/// Systems read this instead of the clock so that every system in a frame
/// sees the same values. Written by
/// [`sync_world_time`](crate::systems::time::sync_world_time).
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct WorldTime {
    pub elapsed: f64,
    pub delta: f64,
    pub frame_count: u64,
    pub playing: bool,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            frame_count: 0,
            playing: true,
        }
    }
}

impl WorldTime {
    /// `delta` as `f32`, for animation code working in `glam` types.
    pub fn delta_f32(&self) -> f32 {
        self.delta as f32
    }

    pub fn elapsed_f32(&self) -> f32 {
        self.elapsed as f32
    }
}
