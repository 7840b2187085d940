//! Error Types for Registry Operations and Reading Validation
//!
//! ## Design Philosophy
//!
//! The registry is driven by a single caller that reports which error
//! occurred and carries on, so every error here is recoverable:
//!
//! 1. **Copy Semantics**: Errors carry only ids, codes and the offending
//!    value, so they are `Copy` and cheap to return from every operation.
//!
//! 2. **No Heap Allocation**: Messages are `&'static str`; nothing in an
//!    error outlives the call that produced it.
//!
//! 3. **All-or-nothing**: An `Err` means the registry is unchanged, with one
//!    exception: `CorruptReading` is returned *after* the sensor's log has
//!    been reset and its timestamp refreshed.
//!
//! ## Error Categories
//!
//! ### Identity
//! - `DuplicateId`: `add` with an id that is already registered
//! - `NotFound`: any per-sensor operation on an unknown id
//!
//! ### Input
//! - `InvalidStatus`: light-state code outside {0, 1, 2}
//! - `InvalidReading`: the log refused a value that failed validation
//! - `CorruptReading`: a sensor received an out-of-band value and recovered
//!
//! ### System
//! - `ResourceExhausted`: capacity growth failed, nothing was stored
//! - `InvalidConfig`: registry configuration is inconsistent
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use trafficguard_core::{RegistryError, SensorRegistry};
//!
//! fn record(registry: &mut SensorRegistry, id: u32, value: f32) {
//!     match registry.add_reading(id, value) {
//!         Ok(()) => {}
//!         Err(RegistryError::NotFound { .. }) => {
//!             // Unknown sensor - ask the operator to register it
//!         }
//!         Err(RegistryError::CorruptReading { .. }) => {
//!             // History discarded - downstream aggregates must restart
//!         }
//!         Err(_) => {
//!             // Report and continue
//!         }
//!     }
//! }
//! ```

use thiserror_no_std::Error;

use crate::sensor::SensorId;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for registry, sensor and log operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Reading validation failures
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Value outside the accepted band
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The submitted reading
        value: f32,
        /// Lowest accepted value
        min: f32,
        /// Highest accepted value
        max: f32,
    },

    /// Value makes no numeric sense (NaN, infinity)
    #[error("Invalid value: not a valid number")]
    InvalidValue,
}

/// Registry operation failures
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RegistryError {
    /// A sensor with this id is already registered
    #[error("Sensor ID {id} already exists")]
    DuplicateId {
        /// The conflicting id
        id: SensorId,
    },

    /// No sensor with this id is registered
    #[error("Sensor {id} not found")]
    NotFound {
        /// The id that was looked up
        id: SensorId,
    },

    /// Light-state code outside {0, 1, 2}
    #[error("Invalid status code {code}")]
    InvalidStatus {
        /// The rejected code
        code: i64,
    },

    /// The reading log refused a value that failed validation
    #[error("Invalid reading: {0}")]
    InvalidReading(ValidationError),

    /// Out-of-band reading; the sensor's log was reset
    #[error("Corrupt sensor data ({value}) on sensor {id}, readings reset")]
    CorruptReading {
        /// Sensor whose log was reset
        id: SensorId,
        /// The offending value
        value: f32,
    },

    /// Capacity growth failed; nothing was stored
    #[error("Allocation failed growing storage to {requested} slots")]
    ResourceExhausted {
        /// Slot count that could not be allocated
        requested: usize,
    },

    /// Registry configuration is inconsistent
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong
        reason: &'static str,
    },
}

impl From<ValidationError> for RegistryError {
    fn from(err: ValidationError) -> Self {
        RegistryError::InvalidReading(err)
    }
}
