//! Frame clock for the cooperative render loop.

use std::time::{Duration, Instant};

/// Longest frame delta handed to the scene.
///
/// A stalled frame (window drag, breakpoint) would otherwise move the camera
/// by several seconds worth of input at once.
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// How often the frames-per-second estimate is refreshed.
const FPS_WINDOW: Duration = Duration::from_millis(500);

/// Measures per-frame time deltas and a smoothed frame rate.
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
    delta: Duration,
    frame_count: u64,
    window_start: Instant,
    window_frames: u32,
    fps: f32,
}

impl FrameClock {
    /// Create a new clock, starting from now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a clock whose first tick is measured from `now`.
    pub fn starting_at(now: Instant) -> Self {
        Self {
            last_tick: now,
            delta: Duration::ZERO,
            frame_count: 0,
            window_start: now,
            window_frames: 0,
            fps: 0.0,
        }
    }

    /// Advance the clock to the current instant and return the frame delta in seconds.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance the clock to `now` and return the frame delta in seconds.
    ///
    /// The delta is clamped to [`MAX_FRAME_DELTA`]. Instants earlier than the
    /// previous tick yield a zero delta.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        self.delta = now
            .saturating_duration_since(self.last_tick)
            .min(MAX_FRAME_DELTA);
        self.last_tick = now;
        self.frame_count = self.frame_count.saturating_add(1);

        self.window_frames = self.window_frames.saturating_add(1);
        let window = now.saturating_duration_since(self.window_start);
        if window >= FPS_WINDOW {
            self.fps = self.window_frames as f32 / window.as_secs_f32();
            self.window_frames = 0;
            self.window_start = now;
        }

        self.delta.as_secs_f32()
    }

    /// Number of ticks since the clock was created.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second over the last completed measurement window.
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_tick_measures_delta() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);

        let dt = clock.tick_at(start + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < EPSILON);
        assert_eq!(clock.frame_count(), 1);
    }

    #[test]
    fn test_tick_clamps_long_frames() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);

        let dt = clock.tick_at(start + Duration::from_secs(3));
        assert!((dt - MAX_FRAME_DELTA.as_secs_f32()).abs() < EPSILON);
    }

    #[test]
    fn test_tick_backwards_is_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::starting_at(start);

        let dt = clock.tick_at(start - Duration::from_millis(10));
        assert_eq!(dt, 0.0);
    }

    #[test]
    fn test_fps_window() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        assert_eq!(clock.fps(), 0.0);

        for i in 1..=30 {
            clock.tick_at(start + Duration::from_millis(20 * i));
        }

        // 25 frames land in the first 500ms window.
        assert!((clock.fps() - 50.0).abs() < 0.01, "fps = {}", clock.fps());
    }
}
