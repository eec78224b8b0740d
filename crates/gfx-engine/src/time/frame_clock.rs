use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick, in seconds, clamped.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped: the minimum avoids zero-dt frames from tight loops,
/// the maximum keeps the camera from jumping after the host stalls (window
/// drag, debugger, sleep).
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub const DEFAULT_DT_MIN: Duration = Duration::from_micros(100);
    pub const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::with_clamps(Self::DEFAULT_DT_MIN, Self::DEFAULT_DT_MAX)
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the baseline, e.g. when a hidden window becomes visible again.
    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    fn reset_at(&mut self, now: Instant) {
        self.last = now;
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now.saturating_duration_since(self.last).clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Makes a host-supplied delta usable: NaN and negative values become 0,
/// everything else is capped at `max` seconds.
pub fn sanitize_delta(dt: f32, max: f32) -> f32 {
    if dt.is_nan() || dt <= 0.0 {
        0.0
    } else {
        dt.min(max.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_clamps_long_stalls() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        let ft = clock.tick_at(start + Duration::from_secs(3));
        assert!((ft.dt - 0.25).abs() < 1e-6);
        assert_eq!(ft.frame_index, 0);
    }

    #[test]
    fn tick_clamps_zero_dt() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        let ft = clock.tick_at(start);
        assert!((ft.dt - 0.0001).abs() < 1e-7);
    }

    #[test]
    fn frame_index_increments() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        clock.tick_at(start + Duration::from_millis(16));
        let ft = clock.tick_at(start + Duration::from_millis(32));
        assert_eq!(ft.frame_index, 1);
        assert!((ft.dt - 0.016).abs() < 1e-4);
    }

    #[test]
    fn reset_skips_hidden_time() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        clock.tick_at(start + Duration::from_millis(16));

        let shown = start + Duration::from_secs(10);
        clock.reset_at(shown);
        let ft = clock.tick_at(shown + Duration::from_millis(20));
        assert!((ft.dt - 0.020).abs() < 1e-4);
        assert_eq!(ft.frame_index, 1);
    }

    #[test]
    fn sanitize_delta_rejects_garbage() {
        assert_eq!(sanitize_delta(f32::NAN, 0.25), 0.0);
        assert_eq!(sanitize_delta(-1.0, 0.25), 0.0);
        assert_eq!(sanitize_delta(f32::INFINITY, 0.25), 0.25);
        assert_eq!(sanitize_delta(0.016, 0.25), 0.016);
    }
}
