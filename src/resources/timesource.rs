//! Wall-clock sources for the realtime clock.
//!
//! The realtime [`Clock`](super::clock::Clock) never calls
//! [`Instant::now`] directly; it asks a [`TimeSource`]. Sketches use
//! [`SteadyTimeSource`]; tests and offline runs use [`ManualTimeSource`] and
//! advance it explicitly.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Something that can tell the current instant.
pub trait TimeSource: Send + Sync + std::fmt::Debug {
    fn now(&self) -> Instant;
}

/// Monotonic operating-system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SteadyTimeSource;

impl TimeSource for SteadyTimeSource {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A time source that only moves when told to.
///
/// Cloning shares the underlying time, so a test can keep one handle and give
/// another to the clock.
#[derive(Debug, Clone)]
pub struct ManualTimeSource {
    start: Instant,
    elapsed: Arc<Mutex<Duration>>,
}

impl ManualTimeSource {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            elapsed: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Move time forward by `duration`.
    pub fn advance(&self, duration: Duration) {
        let mut elapsed = self.elapsed.lock().unwrap_or_else(|e| e.into_inner());
        *elapsed += duration;
    }

    /// Move time forward by `seconds`; negative values are ignored.
    pub fn advance_secs(&self, seconds: f64) {
        if seconds > 0.0 {
            self.advance(Duration::from_secs_f64(seconds));
        }
    }

    pub fn elapsed(&self) -> Duration {
        *self.elapsed.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ManualTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Instant {
        self.start + self.elapsed()
    }
}
