use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub frames: u32,
    pub avg_ms: f32,
}

/// Accumulates frame durations and yields an average once per interval.
#[derive(Clone, Debug)]
pub struct FrameStats {
    interval: Duration,
    elapsed: Duration,
    frames: u32,
}

impl FrameStats {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            frames: 0,
        }
    }

    pub fn record(&mut self, dt: Duration) -> Option<FrameReport> {
        self.elapsed += dt;
        self.frames += 1;
        if self.elapsed < self.interval {
            return None;
        }
        let report = FrameReport {
            frames: self.frames,
            avg_ms: self.elapsed.as_secs_f32() * 1000.0 / self.frames as f32,
        };
        self.elapsed = Duration::ZERO;
        self.frames = 0;
        Some(report)
    }
}
