//! Shared fixtures for registry integration tests
//!
//! Provides:
//! - Registries on a controllable clock
//! - A small downtown fixture with a handful of sensors
//! - Assertion helpers for registry contents

#![allow(dead_code)]

use trafficguard_core::{
    time::{ManualTime, Timestamp},
    SensorId, SensorRegistry,
};

/// Start of every fixture clock (ms)
pub const START_MS: Timestamp = 1_700_000_000_000;

/// One hour in milliseconds
pub const HOUR_MS: u64 = 3_600_000;

/// Intersections used by the downtown fixture
pub const DOWNTOWN: [(SensorId, &str); 5] = [
    (1, "Main&5th"),
    (2, "Main&6th"),
    (3, "Oak&Elm"),
    (4, "Harbor&1st"),
    (5, "Station"),
];

/// Empty registry on a shared clock
pub fn registry() -> (SensorRegistry<ManualTime>, ManualTime) {
    let clock = ManualTime::new(START_MS);
    (SensorRegistry::with_time_source(clock.clone()), clock)
}

/// Registry holding the `DOWNTOWN` sensors
pub fn downtown() -> (SensorRegistry<ManualTime>, ManualTime) {
    let (mut registry, clock) = registry();
    for (id, location) in DOWNTOWN {
        registry
            .add(id, location)
            .expect("fixture ids are unique");
    }
    (registry, clock)
}

/// Ids in table order
pub fn ids(registry: &SensorRegistry<ManualTime>) -> Vec<SensorId> {
    registry.sensors().iter().map(|s| s.id()).collect()
}

/// Panics if any id appears twice
pub fn assert_unique_ids(registry: &SensorRegistry<ManualTime>) {
    let mut seen = ids(registry);
    seen.sort_unstable();
    let before = seen.len();
    seen.dedup();
    assert_eq!(before, seen.len(), "duplicate sensor ids in registry");
}
