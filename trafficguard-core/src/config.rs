//! Registry configuration
//!
//! Tuning knobs for a registry instance. Every field has a default, so a
//! configuration file only needs to name what it changes:
//!
//! ```json
//! { "stale_threshold_secs": 1800, "reading_max": 500.0 }
//! ```

use crate::{
    constants::{
        buffers::{DEFAULT_READING_CAPACITY, DEFAULT_REGISTRY_CAPACITY},
        sensors::{READING_MAX, READING_MIN},
        time::{MS_PER_SECOND, STALE_THRESHOLD_SECS},
    },
    errors::{RegistryError, RegistryResult},
    validators::ReadingValidator,
};

/// Configuration for a `SensorRegistry`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegistryConfig {
    /// Initial slot count of the sensor table
    pub initial_capacity: usize,

    /// Initial slot count of each new sensor's reading log
    pub reading_capacity: usize,

    /// Lowest accepted reading (inclusive)
    pub reading_min: f32,

    /// Highest accepted reading (inclusive)
    pub reading_max: f32,

    /// Idle time after which a sweep demotes a sensor
    pub stale_threshold_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_REGISTRY_CAPACITY,
            reading_capacity: DEFAULT_READING_CAPACITY,
            reading_min: READING_MIN,
            reading_max: READING_MAX,
            stale_threshold_secs: STALE_THRESHOLD_SECS,
        }
    }
}

impl RegistryConfig {
    /// Check the configuration for inconsistent values
    pub fn validate(&self) -> RegistryResult<()> {
        if self.initial_capacity == 0 {
            return Err(RegistryError::InvalidConfig {
                reason: "initial_capacity must be at least 1",
            });
        }
        if self.reading_capacity == 0 {
            return Err(RegistryError::InvalidConfig {
                reason: "reading_capacity must be at least 1",
            });
        }
        if !self.reading_min.is_finite() || !self.reading_max.is_finite() {
            return Err(RegistryError::InvalidConfig {
                reason: "reading band limits must be finite",
            });
        }
        if self.reading_min > self.reading_max {
            return Err(RegistryError::InvalidConfig {
                reason: "reading_min exceeds reading_max",
            });
        }
        Ok(())
    }

    /// Validator for the configured reading band
    pub fn validator(&self) -> ReadingValidator {
        ReadingValidator::new_with_limits(self.reading_min, self.reading_max)
    }

    /// Staleness threshold in milliseconds
    pub fn stale_threshold_ms(&self) -> u64 {
        self.stale_threshold_secs.saturating_mul(MS_PER_SECOND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_policy() {
        let config = RegistryConfig::default();

        assert_eq!(config.initial_capacity, 4);
        assert_eq!(config.reading_capacity, 4);
        assert_eq!(config.stale_threshold_ms(), 3_600_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_capacity() {
        let config = RegistryConfig {
            reading_capacity: 0,
            ..RegistryConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(RegistryError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rejects_inverted_band() {
        let config = RegistryConfig {
            reading_min: 10.0,
            reading_max: 5.0,
            ..RegistryConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_defaults() {
        let config: RegistryConfig =
            serde_json::from_str(r#"{ "stale_threshold_secs": 60 }"#).unwrap();

        assert_eq!(config.stale_threshold_secs, 60);
        assert_eq!(config.reading_max, 1000.0);
    }
}
