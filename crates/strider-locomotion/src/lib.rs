//! The locomotion core: character body record, four-state machine, and the
//! shared turn-ease controller that reorients both the body and the chase
//! camera.

mod body;
mod machine;
mod state;
mod systems;
mod turn_ease;

pub use body::CharacterBody;
pub use machine::CharacterMachine;
pub use state::LocomotionState;
pub use systems::{ActiveCameraBasis, Ground, Machine, SimTime, TickInput, locomotion_system};
pub use turn_ease::TurnEase;
