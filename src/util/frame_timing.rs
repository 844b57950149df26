use web_time::{Duration, Instant};

/// Fixed-cadence tick pacing with a smoothed achieved-rate readout.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Target rate in Hz (0 = unlimited)
    target_hz: u32,
    /// Nominal spacing between ticks
    interval: Duration,
    /// When the last tick ended
    last_tick: Instant,
    /// Ticks completed so far
    ticks: u64,
    /// Achieved rate, exponential moving average
    smoothed_hz: f32,
    /// Weight of each new sample (0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a timer for `target_hz` ticks per second (0 = unlimited).
    #[must_use]
    pub fn new(target_hz: u32) -> Self {
        let interval = if target_hz > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_hz))
        } else {
            Duration::ZERO
        };

        Self {
            target_hz,
            interval,
            last_tick: Instant::now(),
            ticks: 0,
            smoothed_hz: target_hz as f32,
            smoothing: 0.05,
        }
    }

    /// Whether a full interval has passed since the last tick.
    #[must_use]
    pub fn should_tick(&self) -> bool {
        self.target_hz == 0 || self.last_tick.elapsed() >= self.interval
    }

    /// How long to wait before the next tick is due.
    #[must_use]
    pub fn time_until_next_tick(&self) -> Duration {
        self.interval.saturating_sub(self.last_tick.elapsed())
    }

    /// Call after each tick.
    pub fn end_tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.ticks += 1;

        if elapsed > 0.0 {
            self.smoothed_hz = self.smoothed_hz * (1.0 - self.smoothing)
                + elapsed.recip() * self.smoothing;
        }
    }

    /// Ticks completed so far.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Achieved tick rate (smoothed).
    #[must_use]
    pub fn rate(&self) -> f32 {
        self.smoothed_hz
    }
}
