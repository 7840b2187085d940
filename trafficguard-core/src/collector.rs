//! Staleness Collector
//!
//! Scans a registry on demand and demotes sensors that have been silent
//! for longer than a threshold. It is a garbage collector in name only:
//! nothing is ever removed, no timestamp is touched, and a demoted sensor
//! is never reactivated.
//!
//! ## Sweep Rules
//!
//! For every *active* sensor, `now - last_updated > threshold` marks it
//! inactive. Inactive sensors are skipped entirely, which makes a sweep
//! idempotent: a second sweep right after the first demotes nothing.
//!
//! ```text
//! threshold = 1h
//! sensor   last_updated   idle     active before   active after
//!   1        now            0s        yes             yes
//!   2        now - 1h       3600s     yes             yes   (not strictly greater)
//!   3        now - 2h       7200s     yes             no    -> reported
//!   4        now - 5h       18000s    no              no    (skipped)
//! ```
//!
//! There is no background thread; the caller decides when to sweep.

use alloc::vec::Vec;

use crate::{
    constants::time::{MS_PER_SECOND, STALE_THRESHOLD_MS},
    registry::SensorRegistry,
    sensor::SensorId,
    time::{TimeSource, Timestamp},
};

/// A sensor demoted by a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DemotedSensor {
    /// Sensor identity
    pub id: SensorId,
    /// Whole seconds since its last update at sweep time
    pub idle_secs: u64,
}

/// Outcome of one sweep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepReport {
    /// Sensors demoted by this sweep
    pub count_marked: usize,
    /// Active sensors examined
    pub scanned: usize,
    /// The demoted sensors, in table order
    pub demoted: Vec<DemotedSensor>,
}

/// Demotes sensors idle for longer than a threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StalenessCollector {
    threshold_ms: u64,
}

impl Default for StalenessCollector {
    fn default() -> Self {
        Self {
            threshold_ms: STALE_THRESHOLD_MS,
        }
    }
}

impl StalenessCollector {
    /// Collector with a threshold in milliseconds
    pub fn new(threshold_ms: u64) -> Self {
        Self { threshold_ms }
    }

    /// Collector with a threshold in whole seconds
    pub fn from_secs(threshold_secs: u64) -> Self {
        Self::new(threshold_secs.saturating_mul(MS_PER_SECOND))
    }

    /// Threshold in milliseconds
    pub fn threshold_ms(&self) -> u64 {
        self.threshold_ms
    }

    /// Demote every active sensor idle for longer than the threshold at `now`
    pub fn sweep<T: TimeSource>(
        &self,
        registry: &mut SensorRegistry<T>,
        now: Timestamp,
    ) -> SweepReport {
        let mut report = SweepReport::default();

        for sensor in registry.sensors_mut().iter_mut().filter(|s| s.is_active()) {
            report.scanned += 1;

            let idle_ms = sensor.idle_ms(now);
            if idle_ms > self.threshold_ms {
                sensor.deactivate();

                let demoted = DemotedSensor {
                    id: sensor.id(),
                    idle_secs: idle_ms / MS_PER_SECOND,
                };
                log_info!(
                    "Marking sensor {} as inactive (last updated: {} seconds ago)",
                    demoted.id,
                    demoted.idle_secs
                );
                report.demoted.push(demoted);
            }
        }

        report.count_marked = report.demoted.len();
        log_info!(
            "Garbage collection completed. {} sensors marked inactive.",
            report.count_marked
        );
        report
    }

    /// Sweep at the registry's current time
    pub fn sweep_now<T: TimeSource>(&self, registry: &mut SensorRegistry<T>) -> SweepReport {
        let now = registry.now();
        self.sweep(registry, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualTime;

    const HOUR_MS: u64 = 3_600_000;

    fn registry_at(start: Timestamp) -> (SensorRegistry<ManualTime>, ManualTime) {
        let clock = ManualTime::new(start);
        (SensorRegistry::with_time_source(clock.clone()), clock)
    }

    #[test]
    fn fresh_sensors_stay_active() {
        let (mut registry, clock) = registry_at(0);
        registry.add(1, "x").unwrap();

        let report = StalenessCollector::default().sweep(&mut registry, clock.now());

        assert_eq!(report.count_marked, 0);
        assert_eq!(report.scanned, 1);
        assert!(registry.find(1).unwrap().is_active());
    }

    #[test]
    fn threshold_is_strict() {
        let (mut registry, _) = registry_at(0);
        registry.add(1, "x").unwrap();
        let collector = StalenessCollector::default();

        assert_eq!(collector.sweep(&mut registry, HOUR_MS).count_marked, 0);
        assert_eq!(collector.sweep(&mut registry, HOUR_MS + 1).count_marked, 1);
    }

    #[test]
    fn stale_sensor_demoted_not_removed() {
        let (mut registry, clock) = registry_at(0);
        registry.add(1, "old").unwrap();
        clock.advance(2 * HOUR_MS);
        registry.add(2, "new").unwrap();

        let report = StalenessCollector::default().sweep_now(&mut registry);

        assert_eq!(report.count_marked, 1);
        assert_eq!(report.demoted, vec![DemotedSensor { id: 1, idle_secs: 7200 }]);
        assert_eq!(registry.len(), 2);
        assert!(!registry.find(1).unwrap().is_active());
        assert!(registry.find(2).unwrap().is_active());
        assert_eq!(registry.find(1).unwrap().last_updated(), 0);
    }

    #[test]
    fn second_sweep_marks_nothing() {
        let (mut registry, clock) = registry_at(0);
        for id in 0..3 {
            registry.add(id, "x").unwrap();
        }
        clock.advance(2 * HOUR_MS);
        let collector = StalenessCollector::default();

        assert_eq!(collector.sweep_now(&mut registry).count_marked, 3);

        let again = collector.sweep_now(&mut registry);
        assert_eq!(again.count_marked, 0);
        assert_eq!(again.scanned, 0);
    }

    #[test]
    fn custom_threshold() {
        let (mut registry, clock) = registry_at(0);
        registry.add(1, "x").unwrap();
        clock.advance_secs(11);

        let report = StalenessCollector::from_secs(10).sweep_now(&mut registry);

        assert_eq!(report.count_marked, 1);
        assert_eq!(report.demoted[0].idle_secs, 11);
    }

    #[test]
    fn clock_behind_last_update_is_not_stale() {
        let (mut registry, _) = registry_at(5 * HOUR_MS);
        registry.add(1, "x").unwrap();

        let report = StalenessCollector::default().sweep(&mut registry, 0);

        assert_eq!(report.count_marked, 0);
    }
}
