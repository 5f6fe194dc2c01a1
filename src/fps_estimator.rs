//! Windowed frames-per-second estimator.
//!
//! Recomputes the rate once every `window` frames from elapsed wall-clock
//! time. The value is a sampled average over the window, not an
//! instantaneous measurement, and stays stale between window boundaries.

use embassy_time::Instant;

/// Default number of frames per measurement window.
pub const DEFAULT_FPS_WINDOW: u16 = 25;

/// Windowed FPS counter.
pub struct FpsEstimator {
    window: u16,
    frames: u16,
    last_reset: Instant,
    rate: u16,
}

impl FpsEstimator {
    /// Create an estimator with the default window.
    pub const fn new() -> Self {
        Self::with_window(DEFAULT_FPS_WINDOW)
    }

    /// Create an estimator recomputing every `window` frames.
    ///
    /// A zero window is treated as 1.
    pub const fn with_window(window: u16) -> Self {
        Self {
            window: if window == 0 { 1 } else { window },
            frames: 0,
            last_reset: Instant::from_micros(0),
            rate: 0,
        }
    }

    /// Count one rendered frame.
    ///
    /// At every window boundary the rate is recomputed as
    /// `window * 1000 / elapsed_ms`. A zero-duration window (very fast
    /// loops, coarse clocks) is widened to 1 ms so the division never
    /// faults; the resulting rate is artificially high but harmless.
    pub fn tick(&mut self, now: Instant) {
        self.frames += 1;
        if self.frames < self.window {
            return;
        }
        let mut elapsed_ms = (now - self.last_reset).as_millis();
        if elapsed_ms == 0 {
            elapsed_ms = 1;
        }
        let rate = u64::from(self.window) * 1000 / elapsed_ms;
        self.rate = u16::try_from(rate).unwrap_or(u16::MAX);
        self.frames = 0;
        self.last_reset = now;
    }

    /// Most recently computed rate, in frames per second.
    ///
    /// 0 until the first window completes.
    pub fn rate(&self) -> u16 {
        self.rate
    }
}

impl Default for FpsEstimator {
    fn default() -> Self {
        Self::new()
    }
}
