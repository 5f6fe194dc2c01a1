#![no_std]

pub mod clock;
pub mod dither;
pub mod fps_estimator;
pub mod orchestrator;
pub mod power;
pub mod rate_limiter;
pub mod registry;

pub use clock::{Clock, MonotonicClock};
pub use dither::{DITHER_MIN_FPS, DitherMode};
pub use fps_estimator::{DEFAULT_FPS_WINDOW, FpsEstimator};
pub use orchestrator::Orchestrator;
pub use power::PowerPolicy;
pub use rate_limiter::RateLimiter;
pub use registry::{RegistryFull, Strip, StripRegistry};

pub use embassy_time::{Duration, Instant};

/// RGB pixel value, one byte per channel.
pub type Rgb = smart_leds::RGB8;

/// Abstract LED strip driver trait
///
/// Implement this trait to support different chipsets and wire protocols.
/// The orchestration layer is generic over this trait; it never touches
/// hardware itself.
///
/// A driver borrows the pixel buffer it is handed on every flush and never
/// owns pixel memory. The buffer lives in the registry entry for the strip.
pub trait OutputDriver {
    /// One-time hardware/protocol setup.
    ///
    /// Called exactly once, during registration.
    fn init(&mut self) {}

    /// Synchronously transmit `pixels` scaled by `brightness`. Blocking.
    fn flush(&mut self, pixels: &[Rgb], brightness: u8);

    /// Transmit a single color to every position, ignoring the pixel buffer.
    fn flush_solid(&mut self, color: Rgb, brightness: u8);

    /// Set the temporal dithering mode for subsequent flushes.
    ///
    /// Drivers without dithering support can keep the default no-op.
    fn set_dither(&mut self, mode: DitherMode) {
        let _ = mode;
    }

    /// Current temporal dithering mode.
    fn dither(&self) -> DitherMode {
        DitherMode::Disabled
    }

    /// Set the color temperature applied on every flush.
    fn set_temperature(&mut self, temperature: Rgb) {
        let _ = temperature;
    }

    /// Set the color correction applied on every flush.
    fn set_correction(&mut self, correction: Rgb) {
        let _ = correction;
    }

    /// Fixed refresh-rate ceiling of the hardware, in Hz.
    ///
    /// Read once at registration time to constrain the global frame rate.
    /// 0 means the hardware imposes no ceiling.
    fn max_refresh_rate(&self) -> u16 {
        0
    }
}
