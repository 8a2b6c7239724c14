//! Controller error types

use thiserror::Error;

/// Errors raised while configuring or wiring a controller
///
/// None of these cross the per-frame boundary: the frame and fixed-step hooks
/// log and degrade instead of returning them.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// An input map or action could not be resolved
    #[error("missing dependency: {what}")]
    MissingDependency { what: String },

    /// A configuration value is out of range
    #[error("invalid configuration: {field} = {value} ({reason})")]
    InvalidConfiguration {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },

    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ControllerError {
    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingDependency { what: what.into() }
    }

    pub fn invalid(field: &'static str, value: f32, reason: &'static str) -> Self {
        Self::InvalidConfiguration {
            field,
            value,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ControllerError::missing("action 'Move' in map 'Player'");
        assert_eq!(
            err.to_string(),
            "missing dependency: action 'Move' in map 'Player'"
        );

        let err = ControllerError::invalid("circle_radius", 0.0, "must be > 0");
        assert_eq!(
            err.to_string(),
            "invalid configuration: circle_radius = 0 (must be > 0)"
        );
    }
}
