//! Tunable parameters for CSG queries.

use serde::{Deserialize, Serialize};
use solidray_math::Tolerance;

use crate::error::{Result, TraceError};

/// Parameters used by [`CsgOp`](crate::CsgOp) when enumerating crossings.
///
/// The parallel-ray epsilon belongs to the primitives that use it; see
/// [`Plane::with_tolerance`](crate::Plane::with_tolerance) and
/// [`Cube::with_tolerance`](crate::Cube::with_tolerance).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceSettings {
    /// Distance, in world units, a search restarts past each found surface.
    pub restart: f64,
    /// Maximum number of crossings collected from one child for one ray.
    pub max_crossings: usize,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            restart: Tolerance::DEFAULT.restart,
            max_crossings: 1024,
        }
    }
}

impl TraceSettings {
    /// Check that every field is usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.restart.is_finite() && self.restart > 0.0) {
            return Err(TraceError::InvalidSettings(format!(
                "restart distance must be positive and finite, got {}",
                self.restart
            )));
        }
        if self.max_crossings == 0 {
            return Err(TraceError::InvalidSettings(
                "max_crossings must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON string and validate.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = TraceSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.max_crossings, 1024);
        assert!((settings.restart - 1e-6).abs() < 1e-18);
    }

    #[test]
    fn test_settings_serialization() {
        let settings = TraceSettings {
            max_crossings: 64,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        let parsed = TraceSettings::from_json(&json).unwrap();
        assert_eq!(parsed.max_crossings, 64);
        assert_eq!(parsed.restart, settings.restart);
    }

    #[test]
    fn test_settings_rejects_zero_cap() {
        let json = r#"{"restart":1e-6,"max_crossings":0}"#;
        let err = TraceSettings::from_json(json).unwrap_err();
        assert!(matches!(err, TraceError::InvalidSettings(_)));
    }

    #[test]
    fn test_settings_rejects_bad_restart() {
        let mut settings = TraceSettings::default();
        settings.restart = 0.0;
        assert!(settings.validate().is_err());
        settings.restart = -1e-6;
        assert!(settings.validate().is_err());
        settings.restart = f64::NAN;
        assert!(settings.validate().is_err());
        settings.restart = f64::INFINITY;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_has_no_parallel_field() {
        // Unknown keys are ignored, so an old-style tolerance block has no effect
        let json = r#"{"restart":1e-5,"max_crossings":8,"tolerance":{"parallel":1.0,"restart":1.0}}"#;
        let parsed = TraceSettings::from_json(json).unwrap();
        assert_eq!(parsed.restart, 1e-5);
        let out = parsed.to_json().unwrap();
        assert!(!out.contains("parallel"));
    }

    #[test]
    fn test_settings_malformed_json() {
        let err = TraceSettings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TraceError::Json(_)));
    }
}
