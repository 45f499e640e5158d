//! Grounding probes: answer "is this character standing on walkable ground"
//! at two strictness levels, and carry the per-tick up vector and time delta
//! the locomotion machine reads.

mod plane;
mod rapier;
mod sensor;
mod world;

pub use plane::PlanarGround;
pub use rapier::RapierProbe;
pub use sensor::GroundSensor;
pub use world::CollisionWorld;
