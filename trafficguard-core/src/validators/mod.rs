//! Reading Validators
//!
//! ## Overview
//!
//! A traffic sensor reports counts and occupancy figures that live in a
//! known band. A value outside that band is not just an outlier: it means
//! the sensor's output buffer can no longer be trusted, and the registry
//! wipes the sensor's whole reading log in response.
//!
//! ## Validation Layers
//!
//! ### 1. Numeric sanity
//! NaN and infinities are rejected before any comparison.
//!
//! ### 2. Range Validation
//! Inclusive band, `[0, 1000]` by default:
//! ```rust
//! use trafficguard_core::constants::sensors::{READING_MIN, READING_MAX};
//!
//! assert_eq!(READING_MIN, 0.0);
//! assert_eq!(READING_MAX, 1000.0);
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use trafficguard_core::validators::ReadingValidator;
//! use trafficguard_core::Validator;
//!
//! let validator = ReadingValidator::default();
//! assert!(validator.validate(45.0).is_ok());
//! assert!(validator.validate(1500.0).is_err());
//!
//! // Tighter band for an occupancy-percentage sensor
//! let occupancy = ReadingValidator::new_with_limits(0.0, 100.0);
//! assert!(occupancy.validate(101.0).is_err());
//! ```

mod reading;
mod utils;

pub use reading::ReadingValidator;
pub use utils::check_range;
