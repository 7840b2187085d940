//! Property tests for registry invariants

mod common;

use proptest::prelude::*;
use trafficguard_core::{ReadingLog, RegistryError, SensorId};

use common::{assert_unique_ids, ids, registry, HOUR_MS};

fn valid_reading() -> impl Strategy<Value = f32> {
    0.0f32..=1000.0f32
}

fn corrupt_reading() -> impl Strategy<Value = f32> {
    prop_oneof![-1.0e6f32..-0.001f32, 1000.001f32..1.0e6f32]
}

proptest! {
    #[test]
    fn ids_stay_unique(adds in prop::collection::vec(0u32..20, 0..60)) {
        let (mut registry, _) = registry();

        for id in adds {
            let existed = registry.contains(id);
            let before = registry.len();
            let result = registry.add(id, "x");

            if existed {
                prop_assert_eq!(result, Err(RegistryError::DuplicateId { id }));
                prop_assert_eq!(registry.len(), before);
            } else {
                prop_assert!(result.is_ok());
                prop_assert_eq!(registry.len(), before + 1);
            }
        }

        assert_unique_ids(&registry);
    }

    #[test]
    fn appends_keep_every_value_in_order(values in prop::collection::vec(valid_reading(), 0..200)) {
        let mut log = ReadingLog::new();

        for &value in &values {
            log.append(value).unwrap();
            prop_assert!(log.len() <= log.capacity());
        }

        prop_assert_eq!(log.as_slice(), values.as_slice());
    }

    #[test]
    fn corrupt_reading_empties_log(
        prior in prop::collection::vec(valid_reading(), 0..40),
        bad in corrupt_reading(),
    ) {
        let (mut registry, clock) = registry();
        registry.add(1, "x").unwrap();
        for value in prior {
            registry.add_reading(1, value).unwrap();
        }
        let capacity = registry.find(1).unwrap().readings().capacity();

        clock.advance(1_000);
        let result = registry.add_reading(1, bad);

        prop_assert_eq!(result, Err(RegistryError::CorruptReading { id: 1, value: bad }));
        let sensor = registry.find(1).unwrap();
        prop_assert!(sensor.readings().is_empty());
        prop_assert_eq!(sensor.readings().capacity(), capacity);
        prop_assert!(sensor.is_active());
        prop_assert_eq!(sensor.last_updated(), registry.now());
    }

    #[test]
    fn sweep_is_idempotent(
        idle_minutes in prop::collection::vec(0u64..180, 1..30),
    ) {
        let (mut registry, clock) = registry();
        let horizon = 180 * 60_000;

        // Register sensors so that sensor i has been idle idle_minutes[i] at the horizon
        let mut order: Vec<(SensorId, u64)> = idle_minutes
            .iter()
            .enumerate()
            .map(|(i, &m)| (i as SensorId, m))
            .collect();
        order.sort_by(|a, b| b.1.cmp(&a.1));
        let start = registry.now();
        for (id, minutes) in &order {
            clock.set(start + horizon - minutes * 60_000);
            registry.add(*id, "x").unwrap();
        }
        clock.set(start + horizon);

        let first = registry.sweep(registry.now(), HOUR_MS);
        let expected = idle_minutes.iter().filter(|&&m| m * 60_000 > HOUR_MS).count();
        prop_assert_eq!(first.count_marked, expected);

        let second = registry.sweep(registry.now(), HOUR_MS);
        prop_assert_eq!(second.count_marked, 0);
        prop_assert_eq!(registry.len(), idle_minutes.len());
    }

    #[test]
    fn removal_preserves_survivor_order(count in 1usize..40, pick in any::<prop::sample::Index>()) {
        let (mut registry, _) = registry();
        for id in 0..count as SensorId {
            registry.add(id, "x").unwrap();
        }
        let victim = pick.index(count) as SensorId;

        registry.remove(victim).unwrap();

        let expected: Vec<SensorId> = (0..count as SensorId).filter(|&id| id != victim).collect();
        prop_assert_eq!(ids(&registry), expected);
        prop_assert_eq!(registry.remove(victim), Err(RegistryError::NotFound { id: victim }));
    }
}
