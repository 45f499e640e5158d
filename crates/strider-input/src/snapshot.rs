//! Per-tick immutable input and camera-basis values.

use glam::{Vec2, Vec3};
use strider_math::planar_direction;

/// Everything the locomotion machine reads from the player for one tick.
///
/// Snapshots are produced once per tick by a source (gamepad, script, test)
/// and consumed read-only. `jump_pressed` is an edge: true only on the tick
/// the trigger transitioned from released to pressed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    /// Left stick axis, each component in `[-1, 1]`. +x is camera-right,
    /// +y is camera-forward.
    pub stick: Vec2,
    /// True on the press tick of the jump trigger, false otherwise.
    pub jump_pressed: bool,
}

impl InputSnapshot {
    /// Snapshot with a stick deflection and no jump press.
    pub fn stick(x: f32, y: f32) -> Self {
        Self {
            stick: Vec2::new(x, y),
            jump_pressed: false,
        }
    }
}

/// The active camera's forward/right directions, refreshed each tick.
///
/// The resolver projects both onto the character's horizontal plane, so the
/// stored vectors may carry a vertical component (a camera pitched down at
/// the character is the normal case).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraBasis {
    /// Direction the camera is looking.
    pub forward: Vec3,
    /// Camera-right direction.
    pub right: Vec3,
}

impl CameraBasis {
    /// Builds a basis from a forward direction and an up vector, deriving
    /// right-handed camera-right from the pair.
    ///
    /// A forward parallel to `up` yields a degenerate basis (both vectors
    /// zero); the resolver treats that as "no direction".
    pub fn from_forward_up(forward: Vec3, up: Vec3) -> Self {
        let planar_forward = planar_direction(up, forward);
        Self {
            forward: planar_forward,
            right: up.cross(planar_forward),
        }
    }
}

impl Default for CameraBasis {
    fn default() -> Self {
        Self {
            forward: Vec3::Z,
            right: Vec3::X,
        }
    }
}
