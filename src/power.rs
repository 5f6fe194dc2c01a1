//! Power-aware brightness limiting.
//!
//! The orchestrator knows nothing about electrical draw; it only asks an
//! installed [`PowerPolicy`] to turn a requested brightness into an
//! admissible one. Power-law math stays in the policy implementation, which
//! typically captures a milliwatt ceiling and the strip's pixel data model.

/// Strategy that caps a requested brightness to fit a power budget.
///
/// Called once per render, before any strip is flushed. Implementations
/// must be pure and return a value no greater than the conservative bound
/// for their configured ceiling.
pub trait PowerPolicy {
    /// Map a requested brightness to the admissible one.
    fn adjust(&self, requested: u8) -> u8;
}

/// Any pure `Fn(u8) -> u8` closure is a policy, so a milliwatt ceiling can
/// be captured directly:
///
/// ```ignore
/// let budget = move |requested| max_brightness_for_power_mw(requested, 5_000);
/// orchestrator.set_power_policy(&budget);
/// ```
impl<F> PowerPolicy for F
where
    F: Fn(u8) -> u8,
{
    fn adjust(&self, requested: u8) -> u8 {
        self(requested)
    }
}
