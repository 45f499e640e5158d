//! The grounding oracle boundary consumed by the locomotion machine.

use glam::Vec3;

/// Per-tick grounding queries plus the toggles the state machine flips on
/// state entry.
///
/// Callers refresh the probe with [`begin_tick`](GroundSensor::begin_tick)
/// before running the machine, then query it any number of times within the
/// tick. Queries are synchronous and must not block.
///
/// The machine asks two kinds of question through the same method:
/// *maintaining* ground (strict, generous tolerance, used to keep standing)
/// and *acquiring* ground (loose, tight tolerance, used to detect a fresh
/// landing). The asymmetry stops Idle/Walk from flickering into Fall on
/// surface noise while still catching landings promptly.
///
/// The slope-limit and clamping toggles are idempotent; probes record them
/// and may use them to shape their own answers (see
/// [`RapierProbe`](crate::RapierProbe)) but never move the body themselves.
pub trait GroundSensor {
    /// Refresh the probe for a new tick: the character's foot position and
    /// the tick's time delta.
    fn begin_tick(&mut self, foot_position: Vec3, dt: f32);

    /// Whether the character counts as grounded within `tolerance` units of
    /// a walkable surface. `strict` selects the maintaining-ground
    /// interpretation; `false` the acquiring-ground one.
    fn is_grounded(&self, strict: bool, tolerance: f32) -> bool;

    /// The walkable surface's up vector.
    fn up(&self) -> Vec3;

    /// Time delta for the current tick, in seconds.
    fn delta_time(&self) -> f32;

    /// Re-enable rejection of too-steep surfaces.
    fn enable_slope_limit(&mut self);

    /// Stop rejecting too-steep surfaces (airborne states).
    fn disable_slope_limit(&mut self);

    /// Re-enable ground clamping for grounded states.
    fn enable_clamping(&mut self);

    /// Disable ground clamping so the character can leave the surface.
    fn disable_clamping(&mut self);
}
