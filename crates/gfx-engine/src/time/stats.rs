use std::time::{Duration, Instant};

/// Averages frame durations over a reporting interval.
#[derive(Debug, Clone)]
pub struct FrameStats {
    interval: Duration,
    window_start: Option<Instant>,
    frames: u32,
}

impl FrameStats {
    pub fn new(interval: Duration) -> Self {
        Self { interval, window_start: None, frames: 0 }
    }

    /// Records a frame presented at `now`. Returns the average frames per
    /// second once per elapsed interval.
    pub fn record(&mut self, now: Instant) -> Option<f32> {
        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;

        let elapsed = now.saturating_duration_since(start);
        if elapsed < self.interval || elapsed.is_zero() {
            return None;
        }

        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.window_start = Some(now);
        self.frames = 0;
        Some(fps)
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_once_per_interval() {
        let mut stats = FrameStats::new(Duration::from_secs(1));
        let t0 = Instant::now();
        assert_eq!(stats.record(t0), None);
        for i in 1..10 {
            assert_eq!(stats.record(t0 + Duration::from_millis(100 * i)), None);
        }
        let fps = stats.record(t0 + Duration::from_secs(1)).unwrap();
        assert!((fps - 11.0).abs() < 1e-3, "{fps}");
        assert_eq!(stats.record(t0 + Duration::from_millis(1100)), None);
    }
}
