//! The character body record: position, orientation, velocity, and the
//! latched input directions.

use bevy_ecs::prelude::*;
use glam::Vec3;
use strider_math::planar_direction;

use crate::LocomotionState;

/// Everything the machine mutates for one character, and everything the
/// camera or a debug overlay may read.
///
/// The facing vector is kept unit length and orthogonal to `up`: every
/// write re-projects it onto the horizontal plane, and writes that would
/// collapse it (zero or NaN) are dropped. Only
/// [`CharacterMachine::tick`](crate::CharacterMachine::tick) mutates a body,
/// once per simulation tick.
#[derive(Component, Clone, Copy, Debug)]
pub struct CharacterBody {
    pub(crate) position: Vec3,
    pub(crate) facing: Vec3,
    pub(crate) up: Vec3,
    pub(crate) velocity: Vec3,
    pub(crate) state: LocomotionState,
    pub(crate) last_move_direction: Vec3,
    pub(crate) last_turn_direction: Vec3,
}

impl CharacterBody {
    /// Creates a body at `position` looking along `facing`, standing on a
    /// surface with normal `up`.
    ///
    /// The initial facing doubles as the last turn direction, so a character
    /// that never receives input holds its spawn orientation.
    pub fn new(position: Vec3, facing: Vec3, up: Vec3) -> Self {
        let up = up.normalize_or_zero();
        let facing = match planar_direction(up, facing) {
            f if f == Vec3::ZERO => up.any_orthonormal_vector(),
            f => f,
        };
        Self {
            position,
            facing,
            up,
            velocity: Vec3::ZERO,
            state: LocomotionState::Idle,
            last_move_direction: facing,
            last_turn_direction: facing,
        }
    }

    /// World position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit forward vector, horizontal relative to [`up`](Self::up).
    pub fn facing(&self) -> Vec3 {
        self.facing
    }

    /// Surface up vector the body is oriented against.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Current velocity.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Current locomotion state.
    pub fn state(&self) -> LocomotionState {
        self.state
    }

    /// Most recent nonzero movement direction.
    pub fn last_move_direction(&self) -> Vec3 {
        self.last_move_direction
    }

    /// Most recent nonzero turn direction; the facing tween's target and
    /// the chase camera's reorientation target.
    pub fn last_turn_direction(&self) -> Vec3 {
        self.last_turn_direction
    }

    /// Re-projects and stores a new facing, ignoring degenerate values.
    pub(crate) fn set_facing(&mut self, facing: Vec3) {
        if !facing.is_finite() {
            return;
        }
        let planar = planar_direction(self.up, facing);
        if planar != Vec3::ZERO {
            self.facing = planar;
        }
    }
}
