//! Global frame-rate limiter.
//!
//! Enforces a minimum interval between two successive full renders. The
//! wait is a hard busy-spin: the target has no scheduler to yield to, and
//! exact timing matters more than the wasted cycles.

use embassy_time::{Duration, Instant};

use crate::clock::Clock;

/// Enforces a floor on the time between consecutive renders.
pub struct RateLimiter {
    min_interval: Duration,
    last_frame: Instant,
}

impl RateLimiter {
    /// Create a limiter with no interval floor (limiting disabled).
    pub const fn new() -> Self {
        Self {
            min_interval: Duration::from_micros(0),
            last_frame: Instant::from_micros(0),
        }
    }

    /// Current minimum inter-frame interval. Zero means no limiting.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Set the refresh-rate ceiling.
    ///
    /// With `constrain` the interval floor can only grow: a stricter
    /// (slower) ceiling sticks, a looser one is ignored, and `rate_hz == 0`
    /// is ignored outright. Without `constrain` the ceiling is set
    /// unconditionally and `rate_hz == 0` disables limiting entirely.
    pub fn set_ceiling(&mut self, rate_hz: u16, constrain: bool) {
        if constrain {
            if rate_hz > 0 {
                let interval = Duration::from_micros(1_000_000 / u64::from(rate_hz));
                if interval > self.min_interval {
                    self.min_interval = interval;
                }
            }
        } else if rate_hz > 0 {
            self.min_interval = Duration::from_micros(1_000_000 / u64::from(rate_hz));
        } else {
            self.min_interval = Duration::from_micros(0);
        }
    }

    /// Block until the minimum interval since the previous frame has
    /// elapsed, then mark the start of the new frame.
    ///
    /// Spins on `clock.now()` without yielding. Returns immediately when no
    /// floor is configured. The frame timestamp is recorded exactly once per
    /// call, on the way out.
    pub fn wait_until_ready<C: Clock>(&mut self, clock: &C) {
        while self.min_interval.as_ticks() != 0
            && clock.now() - self.last_frame < self.min_interval
        {}
        self.last_frame = clock.now();
    }

    /// Timestamp recorded at the start of the most recent frame.
    pub fn last_frame(&self) -> Instant {
        self.last_frame
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
