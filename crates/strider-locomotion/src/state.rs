//! The closed set of locomotion states.

/// Current movement mode of a character.
///
/// The set is closed on purpose: transitions live in one table inside the
/// machine rather than scattered conditionals, so every edge is testable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LocomotionState {
    /// Grounded, no movement input; friction bleeds velocity off.
    #[default]
    Idle,
    /// Grounded, steering toward the movement direction.
    Walk,
    /// Airborne from a jump impulse.
    Jump,
    /// Airborne after losing ground contact.
    Fall,
}

impl LocomotionState {
    /// Whether this state keeps the character attached to the ground.
    pub fn is_grounded(self) -> bool {
        matches!(self, Self::Idle | Self::Walk)
    }
}
