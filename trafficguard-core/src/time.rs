//! Time management for the registry
//!
//! Provides a clock abstraction so that sensor timestamps can come from:
//! - System clock (when available)
//! - A shared clock advanced by its owner (tests, targets without a system clock)

use alloc::sync::Arc;
use core::sync::atomic::{AtomicU64, Ordering};

use crate::constants::time::MS_PER_SECOND;

/// Timestamp in milliseconds since epoch (or since an arbitrary origin for test clocks)
pub type Timestamp = u64;

/// Source of time for the registry
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Clock advanced by its owner
///
/// Clones share the same instant, so a test (or a firmware tick handler)
/// can hand one clone to a registry and keep another to move time forward.
#[derive(Debug, Clone, Default)]
pub struct ManualTime {
    timestamp: Arc<AtomicU64>,
}

impl ManualTime {
    /// Create a clock starting at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self {
            timestamp: Arc::new(AtomicU64::new(timestamp)),
        }
    }

    /// Jump to `timestamp`
    pub fn set(&self, timestamp: Timestamp) {
        self.timestamp.store(timestamp, Ordering::SeqCst);
    }

    /// Advance by `ms` milliseconds
    pub fn advance(&self, ms: u64) {
        let _ = self
            .timestamp
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |t| {
                Some(t.saturating_add(ms))
            });
    }

    /// Advance by whole seconds
    pub fn advance_secs(&self, secs: u64) {
        self.advance(secs.saturating_mul(MS_PER_SECOND));
    }
}

impl TimeSource for ManualTime {
    fn now(&self) -> Timestamp {
        self.timestamp.load(Ordering::SeqCst)
    }
}

/// Clock used by registries that do not name one
#[cfg(feature = "std")]
pub type DefaultClock = SystemTime;

/// Clock used by registries that do not name one
#[cfg(not(feature = "std"))]
pub type DefaultClock = ManualTime;

/// Milliseconds elapsed from `earlier` to `later`, zero if the clock went backwards
pub fn delta_ms(earlier: Timestamp, later: Timestamp) -> u64 {
    later.saturating_sub(earlier)
}

/// Whole seconds elapsed from `earlier` to `later`
pub fn delta_secs(earlier: Timestamp, later: Timestamp) -> u64 {
    delta_ms(earlier, later) / MS_PER_SECOND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_clones_share_instant() {
        let clock = ManualTime::new(0);
        let handle = clock.clone();

        handle.advance_secs(90);
        assert_eq!(clock.now(), 90_000);

        handle.set(5);
        assert_eq!(clock.now(), 5);
    }

    #[test]
    fn manual_time_saturates() {
        let clock = ManualTime::new(u64::MAX - 10);
        clock.advance(500);
        assert_eq!(clock.now(), u64::MAX);

        clock.advance_secs(u64::MAX);
        assert_eq!(clock.now(), u64::MAX);
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_clock_reads_wall_time() {
        fn read<T: TimeSource>(clock: &T) -> Timestamp {
            clock.now()
        }
        assert!(read(&SystemTime) > 0);
    }

    #[test]
    fn deltas_saturate() {
        assert_eq!(delta_ms(2000, 1000), 0);
        assert_eq!(delta_secs(1000, 4999), 3);
    }
}
