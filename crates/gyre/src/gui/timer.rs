/// Turns GTK frame clock timestamps into per-frame deltas.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameTimer {
    last_frame_us: Option<i64>,
    delta_ms: f64,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a frame at `frame_time_us` (microseconds, monotonic) and returns the
    /// milliseconds since the previous one. The first frame has no predecessor and
    /// yields zero.
    pub fn tick(&mut self, frame_time_us: i64) -> f64 {
        self.delta_ms = self
            .last_frame_us
            .map(|last| (frame_time_us - last).max(0) as f64 / 1000.0)
            .unwrap_or(0.0);
        self.last_frame_us = Some(frame_time_us);
        self.delta_ms
    }

    pub fn delta_ms(&self) -> f64 {
        self.delta_ms
    }
}
