//! Shared validation helpers

use crate::errors::{ValidationError, ValidationResult};

/// Check if a value is within the inclusive range `[min, max]`
pub fn check_range(value: f32, min: f32, max: f32) -> ValidationResult<()> {
    if value < min || value > max {
        Err(ValidationError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}
