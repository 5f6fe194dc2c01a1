//! Strip registry
//!
//! An ordered, append-only collection of output drivers, each paired with
//! the pixel buffer it renders from. Registration order defines iteration
//! order for every fan-out operation and never changes afterwards.

use heapless::Vec;

use crate::{OutputDriver, Rgb};

/// Error returned when registering into a full registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryFull;

/// One registered strip: a driver plus the pixel buffer bound to it.
///
/// The buffer is borrowed from the caller for the registry's lifetime; the
/// driver never copies or owns it.
pub struct Strip<'a> {
    driver: &'a mut dyn OutputDriver,
    pixels: &'a mut [Rgb],
}

impl<'a> Strip<'a> {
    /// Number of pixels bound to this strip.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the bound buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Bound pixel data.
    pub fn pixels(&self) -> &[Rgb] {
        self.pixels
    }

    /// Mutable bound pixel data.
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        self.pixels
    }

    /// The strip's driver.
    pub fn driver(&self) -> &dyn OutputDriver {
        self.driver
    }

    /// The strip's driver, mutably.
    pub fn driver_mut(&mut self) -> &mut dyn OutputDriver {
        self.driver
    }

    /// Transmit the bound buffer at the given brightness.
    pub(crate) fn flush(&mut self, brightness: u8) {
        self.driver.flush(self.pixels, brightness);
    }

    /// Transmit a single color to every position of the strip.
    pub(crate) fn flush_solid(&mut self, color: Rgb, brightness: u8) {
        self.driver.flush_solid(color, brightness);
    }

    /// Zero the bound buffer without transmitting.
    pub(crate) fn clear_pixels(&mut self) {
        self.pixels.fill(Rgb::default());
    }
}

/// Ordered collection of registered strips.
///
/// `MAX_STRIPS` bounds the number of strips; no allocation happens after
/// construction. Entries are never removed.
#[derive(Default)]
pub struct StripRegistry<'a, const MAX_STRIPS: usize> {
    strips: Vec<Strip<'a>, MAX_STRIPS>,
}

impl<'a, const MAX_STRIPS: usize> StripRegistry<'a, MAX_STRIPS> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self { strips: Vec::new() }
    }

    /// Register a driver together with the pixel buffer it renders from.
    ///
    /// Calls `driver.init()` exactly once and appends the strip. Returns the
    /// index of the new entry, or `Err(RegistryFull)` if the registry is at
    /// capacity.
    pub fn register(
        &mut self,
        driver: &'a mut dyn OutputDriver,
        pixels: &'a mut [Rgb],
    ) -> Result<usize, RegistryFull> {
        if self.strips.is_full() {
            return Err(RegistryFull);
        }
        driver.init();
        let index = self.strips.len();
        let _ = self.strips.push(Strip { driver, pixels });
        Ok(index)
    }

    /// Number of registered strips.
    pub fn len(&self) -> usize {
        self.strips.len()
    }

    /// Whether no strip has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.strips.is_empty()
    }

    /// Get the strip at `index`.
    ///
    /// An out-of-range index (including a negative one) falls back to the
    /// **first** registered strip instead of failing. Returns `None` only
    /// when the registry is empty.
    pub fn get(&self, index: isize) -> Option<&Strip<'a>> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.strips.get(i))
            .or_else(|| self.strips.first())
    }

    /// Get the strip at `index`, mutably.
    ///
    /// Same fallback policy as [`get`](Self::get).
    pub fn get_mut(&mut self, index: isize) -> Option<&mut Strip<'a>> {
        let i = usize::try_from(index)
            .ok()
            .filter(|i| *i < self.strips.len())
            .unwrap_or(0);
        self.strips.get_mut(i)
    }

    /// Iterate over strips in registration order.
    pub fn iter(&self) -> core::slice::Iter<'_, Strip<'a>> {
        self.strips.iter()
    }

    /// Iterate mutably over strips in registration order.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Strip<'a>> {
        self.strips.iter_mut()
    }
}

impl<'a, 'r, const MAX_STRIPS: usize> IntoIterator for &'r StripRegistry<'a, MAX_STRIPS> {
    type Item = &'r Strip<'a>;
    type IntoIter = core::slice::Iter<'r, Strip<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
