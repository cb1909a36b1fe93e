//! Frame timing against a monotonic clock
//!
//! The session loop is paced to a fixed target frame duration: a frame that
//! finishes early sleeps away the remainder, a late frame adds no extra
//! delay. Delta time is measured, not assumed, so the simulation stays
//! correct when a frame overruns.

use std::time::{Duration, Instant};

use crate::consts::{FRAME_TARGET_TIME, MAX_FRAME_DT};

/// How long to block before starting the next frame
///
/// Zero when the frame already used its whole budget.
pub(crate) fn frame_delay(elapsed: Duration, target: Duration) -> Duration {
    target.saturating_sub(elapsed)
}

/// Fixed-rate frame pacer
///
/// Call [`FrameClock::tick`] once per frame; it sleeps out the rest of the
/// frame budget and returns the measured delta time in seconds, clamped to
/// [`MAX_FRAME_DT`].
pub struct FrameClock {
    target: Duration,
    last_frame: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_target(Duration::from_secs_f32(FRAME_TARGET_TIME))
    }

    pub fn with_target(target: Duration) -> Self {
        Self {
            target,
            last_frame: Instant::now(),
        }
    }

    /// Pace out the current frame and return the delta time for the next
    pub fn tick(&mut self) -> f32 {
        let wait = frame_delay(self.last_frame.elapsed(), self.target);
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        dt.min(MAX_FRAME_DT)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
