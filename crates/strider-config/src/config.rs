//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Locomotion machine tuning.
    pub locomotion: LocomotionConfig,
    /// Chase camera tuning.
    pub camera: CameraConfig,
    /// Input settings.
    pub input: InputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Locomotion machine tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Top ground speed in units per second.
    pub move_speed: f32,
    /// Ground acceleration in units/s².
    pub move_acceleration: f32,
    /// Idle deceleration in units/s².
    pub friction_deceleration: f32,
    /// Stick magnitude gating movement.
    pub move_dead_zone: f32,
    /// Stick magnitude gating facing updates.
    pub turn_dead_zone: f32,
    /// Seconds a full 180° reversal takes.
    pub full_turn_seconds: f32,
    /// Airborne steering acceleration in units/s².
    pub airborne_acceleration: f32,
    /// Jump apex height in units.
    pub jump_height: f32,
    /// Gravity magnitude in units/s².
    pub gravity: f32,
}

/// Chase camera tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Trailing distance behind the character.
    pub back_follow: f32,
    /// Height above the character.
    pub up_follow: f32,
    /// Back-facing dead zone in degrees.
    pub rotation_dead_zone_deg: f32,
}

/// Input settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Hardware deadzone applied per stick axis at the source (with
    /// rescaling). Gameplay deadzones are separate, see
    /// [`LocomotionConfig`].
    pub gamepad_dead_zone: f32,
    /// Debug stick override: when set, every snapshot's stick is replaced
    /// by this value. Useful for soak-testing a fixed direction.
    pub stick_override: Option<[f32; 2]>,
}

/// Debug/development settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g. "debug", "info", "warn").
    pub log_level: String,
    /// Log every simulation tick at debug level, not just transitions.
    pub trace_ticks: bool,
}

// --- Default implementations ---

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 4.0,
            move_acceleration: 30.0,
            friction_deceleration: 10.0,
            move_dead_zone: 0.7,
            turn_dead_zone: 0.5,
            full_turn_seconds: 1.0,
            airborne_acceleration: 5.0,
            jump_height: 3.0,
            gravity: 25.0,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            back_follow: 5.0,
            up_follow: 2.0,
            rotation_dead_zone_deg: 45.0,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            gamepad_dead_zone: 0.0,
            stick_override: None,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: String::new(),
            trace_ticks: false,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
