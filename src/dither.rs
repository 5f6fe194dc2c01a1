//! Adaptive dithering suppression.
//!
//! Temporal dithering only averages out correctly above a minimum refresh
//! rate; below it the modulation becomes visible flicker. The policy here
//! suppresses dithering for the duration of a single flush whenever the
//! measured frame rate is too low, and re-evaluates every frame since the
//! rate can drift.

use crate::registry::Strip;

/// Minimum measured FPS at which temporal dithering is allowed to run.
pub const DITHER_MIN_FPS: u16 = 100;

/// Temporal dithering mode of a single driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherMode {
    /// No temporal dithering.
    Disabled,
    /// Binary temporal dithering.
    #[default]
    Binary,
}

/// Run `body` with dithering suppressed if `fps` is below
/// [`DITHER_MIN_FPS`], restoring the driver's own mode afterwards.
///
/// The captured mode is restored unconditionally, so a strip configured for
/// binary dithering resumes it as soon as the frame rate recovers.
pub(crate) fn with_suppressed_dither(
    strip: &mut Strip<'_>,
    fps: u16,
    body: impl FnOnce(&mut Strip<'_>),
) {
    let configured = strip.driver().dither();
    if fps < DITHER_MIN_FPS {
        strip.driver_mut().set_dither(DitherMode::Disabled);
    }
    body(strip);
    strip.driver_mut().set_dither(configured);
}
