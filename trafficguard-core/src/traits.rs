//! Core traits for validators
//!
//! These traits define the interface reading validators implement.
//! Keep them simple - the registry only needs a yes/no per value.

use crate::errors::ValidationResult;

/// Core validator trait - implement this for each reading type
pub trait Validator {
    /// The type of value this validator handles
    type Value;

    /// Validate a single reading
    fn validate(&self, value: Self::Value) -> ValidationResult<()>;

    /// Get the accepted band for this validator
    fn constraints(&self) -> ValidatorConstraints;
}

/// Accepted band for a validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatorConstraints {
    /// Minimum valid value (inclusive)
    pub min_value: f32,

    /// Maximum valid value (inclusive)
    pub max_value: f32,
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
