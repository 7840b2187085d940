//! Time-Related Constants
//!
//! Time unit conversions and the staleness policy used by the collector.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Minutes per hour.
pub const MINUTES_PER_HOUR: u64 = 60;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: u64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;

/// Milliseconds per hour.
pub const MS_PER_HOUR: u64 = MS_PER_SECOND * SECONDS_PER_HOUR;

// ===== STALENESS =====

/// Idle time after which a sweep demotes a sensor to inactive (seconds).
///
/// A sensor must be idle for strictly longer than this to be demoted.
pub const STALE_THRESHOLD_SECS: u64 = SECONDS_PER_HOUR;

/// Staleness threshold in milliseconds.
pub const STALE_THRESHOLD_MS: u64 = STALE_THRESHOLD_SECS * MS_PER_SECOND;
