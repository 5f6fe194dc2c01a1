//! Injectable time source.
//!
//! The orchestrator never reads wall time directly; it polls a [`Clock`].
//! This keeps the busy-wait in the rate limiter testable under a simulated
//! clock instead of real time.

use embassy_time::Instant;

/// Monotonic time source polled by the orchestration layer.
pub trait Clock {
    /// Current monotonic time.
    ///
    /// Must never go backwards between calls.
    fn now(&self) -> Instant;
}

/// Clock backed by the platform's monotonic timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
