//! Angular interpolation toward a target facing on a quartic ease-out
//! curve, with the tween progress reconstructed from geometry every tick.

use glam::{Quat, Vec3};
use strider_math::{quartic_ease_out, quartic_ease_out_inverse};
use tracing::debug;

/// Steps a facing vector toward a target so that a full 180° reversal takes
/// exactly [`full_turn_seconds`](Self::full_turn_seconds), easing out as it
/// lands.
///
/// The controller stores no timer. Each call maps the angle between the
/// current and target facings back onto the ease curve
/// (`t = ease⁻¹(1 - θ/π)`), advances that virtual time by
/// `dt / full_turn_seconds`, and re-applies the curve. Because progress is
/// reconstructed from where the facing already is, the target may change
/// every tick — a stick swinging around mid-turn — without restarting the
/// tween or snapping the facing.
///
/// Both the character body and the chase camera step their headings through
/// this one controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnEase {
    /// Seconds a full 180° reversal takes under a held target.
    pub full_turn_seconds: f32,
}

impl Default for TurnEase {
    fn default() -> Self {
        Self {
            full_turn_seconds: 1.0,
        }
    }
}

impl TurnEase {
    /// Controller with the given full-turn duration.
    pub fn new(full_turn_seconds: f32) -> Self {
        Self { full_turn_seconds }
    }

    /// Returns the next facing, rotated about `up` from `current` toward
    /// `target`.
    ///
    /// Degenerate inputs — zero-length vectors, non-finite components, a
    /// non-positive duration — return `current` unchanged rather than
    /// propagating NaN. An exactly antipodal target has no well-defined spin
    /// direction; this controller always picks the positive rotation about
    /// `up` (the tie-break is otherwise unspecified).
    pub fn step(&self, current: Vec3, target: Vec3, up: Vec3, dt: f32) -> Vec3 {
        let current_n = current.normalize_or_zero();
        let target_n = target.normalize_or_zero();
        if current_n == Vec3::ZERO
            || target_n == Vec3::ZERO
            || !up.is_finite()
            || self.full_turn_seconds <= 0.0
        {
            debug!("degenerate turn input, holding facing for this tick");
            return current;
        }

        let cos = current_n.dot(target_n).clamp(-1.0, 1.0);
        let theta = cos.acos();
        if theta < 1e-6 {
            // Already aligned; any dt leaves the facing untouched.
            return current;
        }

        // Spin direction around `up`. For a level character this is the
        // apparent top-down spin; when the character is upside down
        // (up.y < 0) the dot against `up` flips together with the rotation
        // axis, keeping the on-screen direction stable. Antipodal targets
        // make the cross product vanish: the `>= 0` comparison resolves the
        // tie as a positive spin.
        let spin = if current_n.cross(target_n).dot(up) >= 0.0 {
            1.0
        } else {
            -1.0
        };

        // Where on the ease curve does the current angle already sit?
        let progress = 1.0 - theta / std::f32::consts::PI;
        let t = quartic_ease_out_inverse(progress);

        // Advance the virtual time linearly, then re-ease.
        let stepped = (t + dt / self.full_turn_seconds).min(1.0);
        let eased = quartic_ease_out(stepped);
        let angle = spin * eased * std::f32::consts::PI;

        // The curve's t=0 endpoint is the back-facing vector and t=1 the
        // target itself, so the eased angle rotates the negated target into
        // the new facing — no explicit slerp needed.
        Quat::from_axis_angle(up, angle) * -target_n
    }
}
