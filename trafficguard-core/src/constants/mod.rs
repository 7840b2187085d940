//! Constants for TrafficGuard Core
//!
//! Centralizes the numeric policy of the registry: accepted reading band,
//! initial capacities, growth factor and the staleness threshold.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Sensors**: Reading band and location label limits
//! - **Time**: Time unit conversions and the staleness threshold
//! - **Buffers**: Initial capacities and growth factor

/// Sensor reading limits and label sizes.
pub mod sensors;

/// Time-related constants for conversions and staleness.
pub mod time;

/// Capacity and growth parameters for the registry and reading logs.
pub mod buffers;

// Re-export commonly used constants for convenience
pub use sensors::{READING_MIN, READING_MAX, LOCATION_MAX_LEN};

pub use time::{MS_PER_SECOND, SECONDS_PER_HOUR, STALE_THRESHOLD_MS, STALE_THRESHOLD_SECS};

pub use buffers::{
    GROWTH_FACTOR, DEFAULT_READING_CAPACITY, DEFAULT_REGISTRY_CAPACITY,
};
