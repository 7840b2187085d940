//! Core registry engine for TrafficGuard
//!
//! Keeps an in-memory registry of traffic sensors, each owning a growable
//! log of numeric readings, and demotes sensors that have gone silent.
//!
//! Key constraints:
//! - Single logical actor drives the registry; no locking inside
//! - Every mutating operation is all-or-nothing from the caller's view
//! - Out-of-band readings wipe the sensor's whole log, not just the sample
//!
//! ```no_run
//! use trafficguard_core::{SensorRegistry, StalenessCollector, RegistryError};
//!
//! let mut registry = SensorRegistry::new();
//! registry.add(1, "Main&5th")?;
//! registry.add_reading(1, 45.0)?;
//!
//! match registry.add_reading(1, 1500.0) {
//!     Err(RegistryError::CorruptReading { .. }) => {} // log was reset
//!     _ => {}
//! }
//!
//! let report = StalenessCollector::default().sweep_now(&mut registry);
//! assert_eq!(report.count_marked, 0);
//! # Ok::<(), RegistryError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod buffer;
pub mod collector;
pub mod config;
pub mod constants;
pub mod errors;
pub mod registry;
pub mod sensor;
pub mod time;
pub mod traits;
pub mod validators;

// Public API
pub use buffer::ReadingLog;
pub use collector::{DemotedSensor, StalenessCollector, SweepReport};
pub use config::RegistryConfig;
pub use errors::{RegistryError, RegistryResult, ValidationError, ValidationResult};
pub use registry::{SensorRegistry, SensorView, SensorViews};
pub use sensor::{LightState, Location, Sensor, SensorId};
pub use traits::{Validator, ValidatorConstraints};
pub use validators::ReadingValidator;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
