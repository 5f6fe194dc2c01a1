//! Frame orchestration facade.
//!
//! Composes the strip registry, the frame-rate limiter, the power policy,
//! the dithering policy and the FPS estimator into the "render everything
//! now" surface the application drives. Strictly single-threaded: one
//! logical thread of control owns the orchestrator and renders strips
//! sequentially, in registration order.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::clock::{Clock, MonotonicClock};
use crate::dither::{DitherMode, with_suppressed_dither};
use crate::fps_estimator::FpsEstimator;
use crate::power::PowerPolicy;
use crate::rate_limiter::RateLimiter;
use crate::registry::{RegistryFull, Strip, StripRegistry};
use crate::{OutputDriver, Rgb};

/// High-level coordinator for every registered strip.
///
/// Owns the global frame cadence, the brightness budget and the dithering
/// policy. `MAX_STRIPS` bounds the registry; no allocation happens during
/// steady-state rendering.
pub struct Orchestrator<'a, C: Clock, const MAX_STRIPS: usize> {
    clock: C,
    registry: StripRegistry<'a, MAX_STRIPS>,
    limiter: RateLimiter,
    fps: FpsEstimator,
    power: Option<&'a dyn PowerPolicy>,
    brightness: u8,
}

impl<'a, const MAX_STRIPS: usize> Orchestrator<'a, MonotonicClock, MAX_STRIPS> {
    /// Create an orchestrator driven by the platform's monotonic clock.
    pub const fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }
}

impl<const MAX_STRIPS: usize> Default for Orchestrator<'_, MonotonicClock, MAX_STRIPS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, C: Clock, const MAX_STRIPS: usize> Orchestrator<'a, C, MAX_STRIPS> {
    /// Create an orchestrator polling the given clock.
    pub const fn with_clock(clock: C) -> Self {
        Self {
            clock,
            registry: StripRegistry::new(),
            limiter: RateLimiter::new(),
            fps: FpsEstimator::new(),
            power: None,
            brightness: 255,
        }
    }

    /// Register a driver and the pixel buffer it renders from.
    ///
    /// Initializes the driver, appends it to the registry and tightens the
    /// global refresh ceiling to the driver's native one (constrain mode:
    /// an earlier, slower strip keeps winning). Returns the strip's index.
    pub fn register(
        &mut self,
        driver: &'a mut dyn OutputDriver,
        pixels: &'a mut [Rgb],
    ) -> Result<usize, RegistryFull> {
        let ceiling = driver.max_refresh_rate();
        let index = self.registry.register(driver, pixels)?;
        self.limiter.set_ceiling(ceiling, true);
        #[cfg(feature = "esp32-log")]
        println!("strip {} registered, {} Hz ceiling", index, ceiling);
        Ok(index)
    }

    /// Set the global brightness used by argument-less renders.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Current global brightness.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Install a power policy that caps brightness before every render.
    pub fn set_power_policy(&mut self, policy: &'a dyn PowerPolicy) {
        self.power = Some(policy);
    }

    /// Remove the installed power policy; brightness passes through again.
    pub fn clear_power_policy(&mut self) {
        self.power = None;
    }

    /// Render every strip's buffer at the global brightness.
    pub fn render(&mut self) {
        self.render_with(self.brightness);
    }

    /// Render every strip's buffer at the given brightness.
    ///
    /// Waits out the rate-limiter floor, asks the power policy for the
    /// admissible brightness, then flushes each strip in registration
    /// order with dithering suppressed while the measured frame rate is
    /// too low. Always runs to completion over all strips.
    pub fn render_with(&mut self, brightness: u8) {
        self.limiter.wait_until_ready(&self.clock);
        let brightness = self.admissible(brightness);
        let fps = self.fps.rate();
        for strip in self.registry.iter_mut() {
            with_suppressed_dither(strip, fps, |s| s.flush(brightness));
        }
        self.fps.tick(self.clock.now());
    }

    /// Render a single color on every strip at the global brightness.
    pub fn render_color(&mut self, color: Rgb) {
        self.render_color_with(color, self.brightness);
    }

    /// Render a single color on every strip at the given brightness.
    ///
    /// Same sequencing as [`render_with`](Self::render_with), ignoring the
    /// pixel buffers.
    pub fn render_color_with(&mut self, color: Rgb, brightness: u8) {
        self.limiter.wait_until_ready(&self.clock);
        let brightness = self.admissible(brightness);
        let fps = self.fps.rate();
        for strip in self.registry.iter_mut() {
            with_suppressed_dither(strip, fps, |s| s.flush_solid(color, brightness));
        }
        self.fps.tick(self.clock.now());
    }

    /// Clear all strips.
    ///
    /// With `write_to_hardware` the cleared state is also transmitted, as a
    /// zero-brightness black render. The bound buffers are zeroed either
    /// way.
    pub fn clear(&mut self, write_to_hardware: bool) {
        if write_to_hardware {
            self.render_color_with(Rgb::default(), 0);
        }
        self.clear_data();
    }

    /// Zero every bound pixel buffer without transmitting.
    pub fn clear_data(&mut self) {
        for strip in self.registry.iter_mut() {
            strip.clear_pixels();
        }
    }

    /// Set the color temperature on every strip, in registration order.
    pub fn set_temperature(&mut self, temperature: Rgb) {
        for strip in self.registry.iter_mut() {
            strip.driver_mut().set_temperature(temperature);
        }
    }

    /// Set the color correction on every strip, in registration order.
    pub fn set_correction(&mut self, correction: Rgb) {
        for strip in self.registry.iter_mut() {
            strip.driver_mut().set_correction(correction);
        }
    }

    /// Set the dithering mode on every strip, in registration order.
    pub fn set_dither(&mut self, mode: DitherMode) {
        for strip in self.registry.iter_mut() {
            strip.driver_mut().set_dither(mode);
        }
    }

    /// Set the maximum refresh rate for all strips.
    ///
    /// With `constrain` the rate can only be slowed down, never sped up
    /// past what an already-registered strip required. Without it the rate
    /// is set outright and 0 disables limiting. Call this after registering
    /// all strips if you want to override their native ceilings.
    pub fn set_max_refresh_rate(&mut self, rate_hz: u16, constrain: bool) {
        self.limiter.set_ceiling(rate_hz, constrain);
        #[cfg(feature = "esp32-log")]
        println!("refresh ceiling set to {} Hz (constrain={})", rate_hz, constrain);
    }

    /// Current enforced minimum interval between renders.
    pub fn min_frame_interval(&self) -> Duration {
        self.limiter.min_interval()
    }

    /// Most recently measured frames per second.
    pub fn fps(&self) -> u16 {
        self.fps.rate()
    }

    /// Number of registered strips.
    pub fn count(&self) -> usize {
        self.registry.len()
    }

    /// Get the strip at `index`.
    ///
    /// Out-of-range indexes (including negative ones) fall back to the
    /// first registered strip; `None` only when nothing is registered.
    pub fn strip(&self, index: isize) -> Option<&Strip<'a>> {
        self.registry.get(index)
    }

    /// Get the strip at `index`, mutably. Same fallback as
    /// [`strip`](Self::strip).
    pub fn strip_mut(&mut self, index: isize) -> Option<&mut Strip<'a>> {
        self.registry.get_mut(index)
    }

    /// Pause for `ms` milliseconds while keeping the strips refreshed.
    ///
    /// Renders in a loop (at least once) so the dithering engine keeps
    /// advancing during the pause; the rate limiter paces the iterations.
    pub fn delay(&mut self, ms: u64) {
        let start = self.clock.now();
        let duration = Duration::from_millis(ms);
        loop {
            self.render();
            if self.clock.now() - start >= duration {
                break;
            }
        }
    }

    fn admissible(&self, brightness: u8) -> u8 {
        self.power.map_or(brightness, |p| p.adjust(brightness))
    }
}
