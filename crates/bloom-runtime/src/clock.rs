//! Frame clock

/// Tracks elapsed and per-frame time, advanced by the caller's frame delta.
pub struct FrameClock {
    /// Total elapsed time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Upper bound on a single frame's delta
    pub max_delta: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            max_delta: 0.25,
        }
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame's delta. Negative deltas count as zero.
    pub fn advance(&mut self, dt: f64) {
        // Clamp so a stalled frame does not teleport every layer
        self.delta_time = dt.clamp(0.0, self.max_delta);
        self.total_time += self.delta_time;
    }
}
