//! Configuration for the Strider locomotion toolkit.
//!
//! Tuning values persist to disk as RON files with CLI overrides via clap.
//! Constants are applied to the machine and camera at startup; they are not
//! runtime-reconfigurable mid-tween.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CameraConfig, Config, DebugConfig, InputConfig, LocomotionConfig};
pub use error::ConfigError;
