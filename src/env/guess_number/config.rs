//! Guess-the-number configuration
//!
//! Defines the constants of the game and provides validation and builder
//! pattern methods.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::env::EnvError;

/// Guess-the-number configuration parameters
///
/// Defaults reproduce the classic game: a target in `[-1000, 1000]`,
/// actions in `[-2000, 2000]` and a 200 step horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuessConfig {
    /// Target is drawn uniformly from `[-range, range]`
    pub range: f64,

    /// Legal actions are `[-bounds, bounds]`; also the reward offset
    pub bounds: f64,

    /// Episode horizon in steps
    pub guess_max: usize,
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self { range: 1000.0, bounds: 2000.0, guess_max: 200 }
    }
}

impl GuessConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), EnvError> {
        if !self.range.is_finite() || self.range <= 0.0 {
            return Err(EnvError::InvalidConfig("range must be finite and positive".into()));
        }
        // bounds > range keeps both sides of the reward ratio positive
        if !self.bounds.is_finite() || self.bounds <= self.range {
            return Err(EnvError::InvalidConfig(
                "bounds must be finite and greater than range".into(),
            ));
        }
        if self.guess_max == 0 {
            return Err(EnvError::InvalidConfig("guess_max must be positive".into()));
        }
        Ok(())
    }

    /// Set target range
    pub fn range(mut self, range: f64) -> Self {
        self.range = range;
        self
    }

    /// Set action bounds
    pub fn bounds(mut self, bounds: f64) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set episode horizon
    pub fn guess_max(mut self, guess_max: usize) -> Self {
        self.guess_max = guess_max;
        self
    }

    /// Parse and validate a configuration from JSON
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("failed to parse guess config")?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = GuessConfig::default();
        assert_eq!(config.range, 1000.0);
        assert_eq!(config.bounds, 2000.0);
        assert_eq!(config.guess_max, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GuessConfig::new().range(10.0).bounds(20.0).guess_max(5);
        assert_eq!(config, GuessConfig { range: 10.0, bounds: 20.0, guess_max: 5 });
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(GuessConfig::new().range(0.0).validate().is_err());
        assert!(GuessConfig::new().range(f64::NAN).validate().is_err());
        assert!(GuessConfig::new().bounds(1000.0).validate().is_err(), "bounds must exceed range");
        assert!(GuessConfig::new().bounds(f64::INFINITY).validate().is_err());
        assert!(matches!(
            GuessConfig::new().guess_max(0).validate(),
            Err(EnvError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = GuessConfig::from_json(r#"{ "guess_max": 10 }"#).unwrap();
        assert_eq!(config.guess_max, 10);
        assert_eq!(config.range, 1000.0);
        assert_eq!(config.bounds, 2000.0);
    }

    #[test]
    fn test_from_json_validates() {
        let err = GuessConfig::from_json(r#"{ "range": 50, "bounds": 10 }"#).unwrap_err();
        assert!(matches!(err.downcast_ref::<EnvError>(), Some(EnvError::InvalidConfig(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = GuessConfig::new().guess_max(7);
        let parsed = GuessConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
