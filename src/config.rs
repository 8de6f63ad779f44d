//! Playfield and tuning configuration
//!
//! Stored as JSON. Missing fields fall back to their defaults, and every
//! loaded config is validated before the simulation sees it.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a config could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Playfield geometry and shot tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,
    /// Radius of every sphere
    pub radius: f32,
    /// Number of grid rows
    pub rows: usize,
    /// Rows filled when a game starts
    pub initial_rows: usize,
    /// Projectile speed (pixels/s)
    pub shot_speed: f32,
    /// Non-matching placements before a row is injected
    pub shots_per_row: u32,
    /// Distance of the launch point above the bottom edge
    pub launch_offset: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            radius: SPHERE_RADIUS,
            rows: GRID_ROWS,
            initial_rows: INITIAL_ROWS,
            shot_speed: SHOT_SPEED,
            shots_per_row: SHOTS_PER_ROW,
            launch_offset: LAUNCH_OFFSET,
        }
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

impl GameConfig {
    #[inline]
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    /// Columns that fit across the playfield
    pub fn cols(&self) -> usize {
        (self.width / self.diameter()).floor() as usize
    }

    /// Where fresh projectiles wait to be fired
    pub fn launch_position(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height - self.launch_offset)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.radius) {
            return Err(ConfigError::Invalid(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        if !positive(self.width) || !positive(self.height) {
            return Err(ConfigError::Invalid(format!(
                "playfield must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.cols() == 0 {
            return Err(ConfigError::Invalid(format!(
                "playfield width {} cannot fit a sphere of radius {}",
                self.width, self.radius
            )));
        }
        if self.rows == 0 {
            return Err(ConfigError::Invalid("grid needs at least one row".into()));
        }
        if self.initial_rows > self.rows {
            return Err(ConfigError::Invalid(format!(
                "initial_rows {} exceeds rows {}",
                self.initial_rows, self.rows
            )));
        }
        if !positive(self.shot_speed) {
            return Err(ConfigError::Invalid(format!(
                "shot_speed must be positive, got {}",
                self.shot_speed
            )));
        }
        if self.shots_per_row == 0 {
            return Err(ConfigError::Invalid("shots_per_row must be at least 1".into()));
        }
        if !positive(self.launch_offset) || self.launch_offset >= self.height {
            return Err(ConfigError::Invalid(format!(
                "launch_offset {} must lie inside the playfield",
                self.launch_offset
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load a config file, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::error!("{} ({}), using default config", e, path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_json()?)?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cols(), 12);
        assert_eq!(config.launch_position(), Vec2::new(240.0, 610.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "width": 320.0, "shots_per_row": 3 }"#).unwrap();
        assert_eq!(config.width, 320.0);
        assert_eq!(config.shots_per_row, 3);
        assert_eq!(config.cols(), 8);
        assert_eq!(config.radius, SPHERE_RADIUS);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig {
            rows: 12,
            initial_rows: 3,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let narrow = GameConfig {
            width: 30.0,
            ..Default::default()
        };
        assert!(matches!(narrow.validate(), Err(ConfigError::Invalid(_))));

        let overfull = GameConfig {
            rows: 4,
            initial_rows: 5,
            ..Default::default()
        };
        assert!(matches!(overfull.validate(), Err(ConfigError::Invalid(_))));

        let no_threshold = GameConfig {
            shots_per_row: 0,
            ..Default::default()
        };
        assert!(no_threshold.validate().is_err());

        let nan_radius = GameConfig {
            radius: f32::NAN,
            ..Default::default()
        };
        assert!(nan_radius.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            GameConfig::from_json("{ width: "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let path = Path::new("/nonexistent/hex-popper/config.json");
        assert!(matches!(GameConfig::load(path), Err(ConfigError::Io(_))));
        assert_eq!(GameConfig::load_or_default(path), GameConfig::default());
    }
}
