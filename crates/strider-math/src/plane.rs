//! Projection onto the plane perpendicular to an up vector, and linear
//! vector steering.
//!
//! Locomotion treats "horizontal" as relative to the character's own up
//! vector, so every direction the controller works with is first flattened
//! into the plane perpendicular to that axis.

use glam::Vec3;

/// Removes the component of `v` parallel to `up`.
///
/// `up` must be unit length; the result lies in the plane perpendicular to
/// it and keeps whatever magnitude the planar part of `v` had.
pub fn project_onto_plane(up: Vec3, v: Vec3) -> Vec3 {
    v - up * v.dot(up)
}

/// Projects `v` onto the plane perpendicular to `up` and normalizes it.
///
/// Returns `Vec3::ZERO` when the planar component vanishes (e.g. `v`
/// parallel to `up`), never NaN.
pub fn planar_direction(up: Vec3, v: Vec3) -> Vec3 {
    project_onto_plane(up, v).normalize_or_zero()
}

/// Moves `current` toward `target` by at most `max_delta`, without
/// overshooting.
///
/// A negative `max_delta` pushes away from the target, matching the usual
/// move-towards contract.
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let to_target = target - current;
    let distance = to_target.length();
    if distance <= max_delta || distance < 1e-8 {
        return target;
    }
    current + to_target / distance * max_delta
}
