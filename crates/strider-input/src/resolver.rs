//! Maps a deadzone-filtered stick onto a world-space direction in the
//! character's horizontal plane.

use glam::{Vec2, Vec3};
use strider_math::planar_direction;

use crate::CameraBasis;

/// Resolves a stick deflection into a world-space direction relative to the
/// camera, confined to the plane perpendicular to `up`.
///
/// Returns `Vec3::ZERO` when the stick magnitude is below `dead_zone` or the
/// camera basis collapses in the horizontal plane (camera looking straight
/// along `up`). Otherwise the stick is normalized and composed as
/// `right * x + forward * y` against the planar, re-normalized basis
/// vectors, and the result is unit length.
///
/// Callers gate movement and facing with different thresholds: a larger
/// `dead_zone` for movement-state decisions and a smaller one for facing, so
/// the character keeps turning toward light input without leaving Idle.
pub fn resolve_direction(stick: Vec2, dead_zone: f32, basis: &CameraBasis, up: Vec3) -> Vec3 {
    if stick.length() < dead_zone {
        return Vec3::ZERO;
    }
    let stick = stick.normalize_or_zero();

    let forward = planar_direction(up, basis.forward);
    let right = planar_direction(up, basis.right);

    (right * stick.x + forward * stick.y).normalize_or_zero()
}
