//! Controller configuration
//!
//! Loaded from JSON on native builds; every field has a default so partial
//! files are accepted.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ControllerError;

/// How the spin direction is chosen from the travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpinPolicy {
    /// Sign of the horizontal component only. Pure vertical travel has sign
    /// zero and produces no spin.
    #[default]
    Horizontal,
    /// Sign of whichever component has the larger magnitude (x wins ties), so
    /// vertical travel spins too.
    DominantAxis,
}

impl SpinPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpinPolicy::Horizontal => "Horizontal",
            SpinPolicy::DominantAxis => "DominantAxis",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "horizontal" | "h" => Some(SpinPolicy::Horizontal),
            "dominantaxis" | "dominant" => Some(SpinPolicy::DominantAxis),
            _ => None,
        }
    }
}

/// Rolling controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    // === Movement ===
    /// Top speed at full input (units/s)
    pub move_speed: f32,
    /// Velocity change rate while there is input intent (units/s²)
    pub acceleration: f32,
    /// Velocity change rate inside the dead-zone (units/s²)
    pub deceleration: f32,

    // === Rotation ===
    /// Rolling radius (units)
    pub circle_radius: f32,
    /// Derive the radius from the visual bounds when available
    pub radius_from_bounds: bool,
    pub spin_policy: SpinPolicy,

    // === Input ===
    pub action_map: String,
    pub move_action: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            acceleration: DEFAULT_ACCELERATION,
            deceleration: DEFAULT_DECELERATION,

            circle_radius: DEFAULT_CIRCLE_RADIUS,
            radius_from_bounds: true,
            spin_policy: SpinPolicy::Horizontal,

            action_map: DEFAULT_ACTION_MAP.to_string(),
            move_action: DEFAULT_MOVE_ACTION.to_string(),
        }
    }
}

impl ControllerConfig {
    /// Check every numeric field is in range
    pub fn validate(&self) -> Result<(), ControllerError> {
        validate_radius(self.circle_radius)?;
        validate_non_negative("move_speed", self.move_speed)?;
        validate_non_negative("acceleration", self.acceleration)?;
        validate_non_negative("deceleration", self.deceleration)?;
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ControllerError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ControllerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ControllerError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded controller config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ControllerError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!("Controller config saved to {}", path.display());
        Ok(())
    }
}

/// Radius must be finite and strictly positive
pub fn validate_radius(radius: f32) -> Result<(), ControllerError> {
    if !radius.is_finite() {
        return Err(ControllerError::invalid("circle_radius", radius, "must be finite"));
    }
    if radius <= 0.0 {
        return Err(ControllerError::invalid("circle_radius", radius, "must be > 0"));
    }
    Ok(())
}

fn validate_non_negative(field: &'static str, value: f32) -> Result<(), ControllerError> {
    if !value.is_finite() {
        return Err(ControllerError::invalid(field, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(ControllerError::invalid(field, value, "must be >= 0"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ControllerConfig::default();
        assert_eq!(config.move_speed, 5.0);
        assert_eq!(config.acceleration, 10.0);
        assert_eq!(config.deceleration, 10.0);
        assert_eq!(config.circle_radius, 0.5);
        assert!(config.radius_from_bounds);
        assert_eq!(config.spin_policy, SpinPolicy::Horizontal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ControllerConfig::from_json(r#"{ "move_speed": 8.0 }"#).unwrap();
        assert_eq!(config.move_speed, 8.0);
        assert_eq!(config.circle_radius, DEFAULT_CIRCLE_RADIUS);
        assert_eq!(config.action_map, "Player");
    }

    #[test]
    fn test_json_round_trip() {
        let config = ControllerConfig {
            circle_radius: 1.25,
            spin_policy: SpinPolicy::DominantAxis,
            radius_from_bounds: false,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(ControllerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_radius() {
        let err = ControllerConfig::from_json(r#"{ "circle_radius": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ControllerError::InvalidConfiguration {
                field: "circle_radius",
                ..
            }
        ));
        assert!(validate_radius(-1.0).is_err());
        assert!(validate_radius(f32::NAN).is_err());
        assert!(validate_radius(0.001).is_ok());
    }

    #[test]
    fn test_rejects_negative_rates() {
        let config = ControllerConfig {
            deceleration: -2.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ControllerError::InvalidConfiguration {
                field: "deceleration",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = ControllerConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ControllerError::Parse(_)));
    }

    #[test]
    fn test_spin_policy_from_str() {
        assert_eq!(SpinPolicy::from_str("HORIZONTAL"), Some(SpinPolicy::Horizontal));
        assert_eq!(SpinPolicy::from_str("dominant"), Some(SpinPolicy::DominantAxis));
        assert_eq!(SpinPolicy::from_str("diagonal"), None);
        assert_eq!(SpinPolicy::DominantAxis.as_str(), "DominantAxis");
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!(
            "rolling_circle_config_{}.json",
            std::process::id()
        ));
        let config = ControllerConfig {
            move_speed: 3.0,
            ..Default::default()
        };
        config.save(&path).unwrap();
        let loaded = ControllerConfig::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }
}
