//! Chase camera: trails the character and reorients through the shared
//! turn-ease controller.

mod chase;

pub use chase::{CameraRig, ChaseCamera, chase_follow_system, follow_step};
