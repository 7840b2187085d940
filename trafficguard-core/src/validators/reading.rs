//! Traffic reading validator
//!
//! Accepts finite values inside an inclusive band. Everything else is
//! treated as corrupted sensor output.

use crate::{
    constants::sensors::{READING_MAX, READING_MIN},
    errors::{ValidationError, ValidationResult},
    traits::{Validatable, Validator, ValidatorConstraints},
};

use super::utils;

/// Validator for traffic sensor readings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingValidator {
    /// Lowest accepted reading
    min: f32,

    /// Highest accepted reading
    max: f32,
}

impl Default for ReadingValidator {
    fn default() -> Self {
        Self {
            min: READING_MIN,
            max: READING_MAX,
        }
    }
}

impl ReadingValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f32, max: f32) -> Self {
        // Sanity check: can't have min > max
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        Self { min, max }
    }

    /// Check a value without building an error
    pub fn accepts(&self, value: f32) -> bool {
        self.validate(value).is_ok()
    }
}

impl Validator for ReadingValidator {
    type Value = f32;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        if !value.is_valid() {
            return Err(ValidationError::InvalidValue);
        }

        utils::check_range(value, self.min, self.max)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min,
            max_value: self.max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_band_bounds_are_inclusive() {
        let validator = ReadingValidator::default();

        assert!(validator.validate(0.0).is_ok());
        assert!(validator.validate(1000.0).is_ok());
        assert!(validator.validate(45.0).is_ok());
    }

    #[test]
    fn out_of_band_values_rejected() {
        let validator = ReadingValidator::default();

        assert_eq!(
            validator.validate(1500.0),
            Err(ValidationError::OutOfRange { value: 1500.0, min: 0.0, max: 1000.0 })
        );
        assert!(validator.validate(-1.0).is_err());
    }

    #[test]
    fn non_finite_values_rejected() {
        let validator = ReadingValidator::default();

        assert_eq!(validator.validate(f32::NAN), Err(ValidationError::InvalidValue));
        assert_eq!(validator.validate(f32::INFINITY), Err(ValidationError::InvalidValue));
    }

    #[test]
    fn swapped_limits_are_normalized() {
        let validator = ReadingValidator::new_with_limits(100.0, 0.0);
        let constraints = validator.constraints();

        assert_eq!(constraints.min_value, 0.0);
        assert_eq!(constraints.max_value, 100.0);
        assert!(validator.accepts(50.0));
    }
}
