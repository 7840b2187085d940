//! Traffic Sensor Reading Limits
//!
//! Limits applied to values reported by traffic sensors and to the labels
//! operators attach to them.

// ===== READING BAND =====

/// Lowest accepted reading.
///
/// Traffic counts and occupancy figures are never negative; a negative
/// value means the sensor's output buffer is garbage.
pub const READING_MIN: f32 = 0.0;

/// Highest accepted reading.
///
/// Anything above this is treated as corrupted sensor data and triggers a
/// full reset of that sensor's reading log.
pub const READING_MAX: f32 = 1000.0;

// ===== LABELS =====

/// Maximum location label payload in bytes.
///
/// Longer labels are truncated at a character boundary, never rejected.
pub const LOCATION_MAX_LEN: usize = 49;
