//! Growable Reading Log for Per-Sensor History
//!
//! ## Overview
//!
//! Every sensor owns exactly one `ReadingLog`: an append-only sequence of
//! readings in arrival order. The log validates each value before storing
//! it and grows its storage by doubling when full.
//!
//! ## Capacity Model
//!
//! The log tracks a logical `capacity` next to the stored samples. It starts
//! at 4 and doubles whenever an append finds it exhausted:
//!
//! ```text
//! append #   len before   capacity before   capacity after
//!   1..4        0..3             4                 4
//!   5             4              4                 8
//!   9             8              8                16
//! ```
//!
//! Growth goes through `Vec::try_reserve_exact`, so an allocation failure
//! surfaces as `ResourceExhausted` and leaves the log exactly as it was.
//! The logical capacity is what listings report; the allocator may hand out
//! more than was asked for.
//!
//! ## Invariants
//!
//! - `len() <= capacity()` at all times
//! - Stored values are in arrival order and all passed validation
//! - `reset()` empties the log but never shrinks `capacity()`
//!
//! ## Usage Example
//!
//! ```rust
//! use trafficguard_core::buffer::ReadingLog;
//! use trafficguard_core::RegistryError;
//!
//! let mut log = ReadingLog::new();
//! log.append(45.0)?;
//! log.append(12.5)?;
//! assert_eq!(log.as_slice(), &[45.0, 12.5]);
//!
//! // Out-of-band value is refused; the caller decides how to recover
//! assert!(matches!(log.append(1500.0), Err(RegistryError::InvalidReading(_))));
//! assert_eq!(log.len(), 2);
//! # Ok::<(), RegistryError>(())
//! ```

use alloc::vec::Vec;
use core::slice;

use crate::{
    constants::buffers::{grown_capacity, DEFAULT_READING_CAPACITY},
    errors::{RegistryError, RegistryResult},
    traits::Validator,
    validators::ReadingValidator,
};

/// Append-only, capacity-doubling sequence of readings owned by one sensor
#[derive(Debug, Clone)]
pub struct ReadingLog {
    /// Stored readings, oldest first
    samples: Vec<f32>,

    /// Logical slot count; `samples.len()` never exceeds it
    capacity: usize,

    /// Band every appended value must fall into
    validator: ReadingValidator,
}

impl ReadingLog {
    /// Creates an empty log with the default capacity and reading band
    pub fn new() -> Self {
        Self {
            samples: Vec::with_capacity(DEFAULT_READING_CAPACITY),
            capacity: DEFAULT_READING_CAPACITY,
            validator: ReadingValidator::default(),
        }
    }

    /// Creates an empty log with `capacity` slots reserved up front
    ///
    /// Fails with `ResourceExhausted` if the slots cannot be allocated.
    pub fn try_with_capacity(capacity: usize, validator: ReadingValidator) -> RegistryResult<Self> {
        let mut samples = Vec::new();
        samples
            .try_reserve_exact(capacity)
            .map_err(|_| RegistryError::ResourceExhausted { requested: capacity })?;

        Ok(Self {
            samples,
            capacity,
            validator,
        })
    }

    /// Validates and stores a reading
    ///
    /// Returns `InvalidReading` without touching the log when the value
    /// fails validation. Grows capacity first when the log is full; growth
    /// failure returns `ResourceExhausted` and nothing is appended.
    /// Timestamps are the caller's business.
    pub fn append(&mut self, value: f32) -> RegistryResult<()> {
        self.validator.validate(value)?;

        if self.samples.len() >= self.capacity {
            grow_storage(&mut self.samples, &mut self.capacity, DEFAULT_READING_CAPACITY)?;
        }

        self.samples.push(value);
        Ok(())
    }

    /// Discards every stored reading, keeping the current capacity
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Number of stored readings
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the log holds no readings
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Logical slot count
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stored readings, oldest first
    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }

    /// Iterate over readings from oldest to newest
    pub fn iter(&self) -> slice::Iter<'_, f32> {
        self.samples.iter()
    }

    /// Most recent reading
    pub fn last(&self) -> Option<f32> {
        self.samples.last().copied()
    }

    /// Validator applied on append
    pub fn validator(&self) -> &ReadingValidator {
        &self.validator
    }
}

impl Default for ReadingLog {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ReadingLog {
    type Item = &'a f32;
    type IntoIter = slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Grows `storage` to the next doubled capacity
///
/// Shared by reading logs and the registry's sensor table. On failure
/// neither `storage` nor `capacity` change.
pub(crate) fn grow_storage<T>(
    storage: &mut Vec<T>,
    capacity: &mut usize,
    minimum: usize,
) -> RegistryResult<()> {
    let requested = grown_capacity(*capacity, minimum);
    let additional = requested.saturating_sub(storage.len());

    storage
        .try_reserve_exact(additional)
        .map_err(|_| RegistryError::ResourceExhausted { requested })?;

    *capacity = requested;
    Ok(())
}
