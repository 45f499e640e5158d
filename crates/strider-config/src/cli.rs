//! Command-line overrides shared by Strider binaries.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Shared command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
pub struct CliArgs {
    /// Top ground speed in units per second.
    #[arg(long)]
    pub move_speed: Option<f32>,

    /// Seconds a full 180° reversal takes.
    #[arg(long)]
    pub full_turn_seconds: Option<f32>,

    /// Gravity magnitude in units per second squared.
    #[arg(long)]
    pub gravity: Option<f32>,

    /// Jump apex height in units.
    #[arg(long)]
    pub jump_height: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(speed) = args.move_speed {
            self.locomotion.move_speed = speed;
        }
        if let Some(seconds) = args.full_turn_seconds {
            self.locomotion.full_turn_seconds = seconds;
        }
        if let Some(gravity) = args.gravity {
            self.locomotion.gravity = gravity;
        }
        if let Some(height) = args.jump_height {
            self.locomotion.jump_height = height;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override_applies_named_fields() {
        let mut config = Config::default();
        let args = CliArgs {
            move_speed: Some(7.5),
            full_turn_seconds: Some(0.4),
            log_level: Some("debug".to_string()),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert!((config.locomotion.move_speed - 7.5).abs() < 1e-6);
        assert!((config.locomotion.full_turn_seconds - 0.4).abs() < 1e-6);
        assert_eq!(config.debug.log_level, "debug");
    }

    #[test]
    fn test_absent_cli_values_leave_config_untouched() {
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_args_parse_from_command_line() {
        let args = CliArgs::parse_from(["strider", "--move-speed", "6", "--gravity", "9.81"]);
        assert_eq!(args.move_speed, Some(6.0));
        assert_eq!(args.gravity, Some(9.81));
        assert!(args.log_level.is_none());
    }
}
