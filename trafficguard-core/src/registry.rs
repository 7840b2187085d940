//! Sensor Registry
//!
//! Owns every `Sensor` and is the only way to reach one. Enforces identity
//! uniqueness, keeps insertion order for listings, and stamps every
//! mutation with the time from its clock.
//!
//! ## Storage
//!
//! Sensors live in a contiguous table that starts at 4 slots and doubles
//! when full, the same growth policy as the reading logs. Removal shifts
//! later entries down, so survivors keep their relative order.
//!
//! Lookup is a linear scan by id. A district holds tens to low hundreds of
//! sensors; at that size a scan beats maintaining an index.
//!
//! ## All-or-nothing
//!
//! A failed `add` leaves the table exactly as it was: the new sensor's log
//! is allocated first, then the table grows, and only then is the sensor
//! pushed. `CorruptReading` is the one error that still changes state
//! (log reset, timestamp refreshed).
//!
//! ```rust
//! use trafficguard_core::{SensorRegistry, LightState, RegistryError};
//! use trafficguard_core::time::ManualTime;
//!
//! let clock = ManualTime::new(0);
//! let mut registry = SensorRegistry::with_time_source(clock.clone());
//!
//! registry.add(1, "Main&5th")?;
//! registry.add(2, "Oak&Elm")?;
//! assert_eq!(registry.add(1, "Again"), Err(RegistryError::DuplicateId { id: 1 }));
//!
//! registry.set_status(1, 2)?;
//! assert_eq!(registry.find(1).map(|s| s.status()), Some(LightState::Green));
//!
//! let ids: Vec<u32> = registry.iter(true).map(|view| view.id).collect();
//! assert_eq!(ids, vec![1, 2]);
//! # Ok::<(), RegistryError>(())
//! ```

use alloc::vec::Vec;
use core::slice;

use crate::{
    buffer::{grow_storage, ReadingLog},
    collector::{StalenessCollector, SweepReport},
    config::RegistryConfig,
    constants::buffers::DEFAULT_REGISTRY_CAPACITY,
    errors::{RegistryError, RegistryResult},
    sensor::{LightState, Location, Sensor, SensorId},
    time::{self, DefaultClock, TimeSource, Timestamp},
    validators::ReadingValidator,
};

/// Collection of registered sensors
#[derive(Debug)]
pub struct SensorRegistry<T: TimeSource = DefaultClock> {
    /// Sensors in insertion order
    entries: Vec<Sensor>,

    /// Logical slot count of `entries`
    capacity: usize,

    config: RegistryConfig,

    /// Band applied to readings of every sensor created here
    validator: ReadingValidator,

    time_source: T,
}

#[cfg(feature = "std")]
impl SensorRegistry<crate::time::SystemTime> {
    /// Creates an empty registry on the system clock with default settings
    pub fn new() -> Self {
        Self::with_time_source(crate::time::SystemTime)
    }
}

#[cfg(feature = "std")]
impl Default for SensorRegistry<crate::time::SystemTime> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeSource> SensorRegistry<T> {
    /// Creates an empty registry with default settings on `time_source`
    pub fn with_time_source(time_source: T) -> Self {
        let config = RegistryConfig::default();
        Self {
            entries: Vec::with_capacity(DEFAULT_REGISTRY_CAPACITY),
            capacity: DEFAULT_REGISTRY_CAPACITY,
            validator: config.validator(),
            config,
            time_source,
        }
    }

    /// Creates an empty registry from a configuration
    ///
    /// Fails with `InvalidConfig` for inconsistent settings and with
    /// `ResourceExhausted` if the initial table cannot be allocated.
    pub fn with_config(config: RegistryConfig, time_source: T) -> RegistryResult<Self> {
        config.validate()?;

        let mut entries = Vec::new();
        entries
            .try_reserve_exact(config.initial_capacity)
            .map_err(|_| RegistryError::ResourceExhausted {
                requested: config.initial_capacity,
            })?;

        Ok(Self {
            entries,
            capacity: config.initial_capacity,
            validator: config.validator(),
            config,
            time_source,
        })
    }

    /// Registers a new sensor: status red, active, empty log
    ///
    /// Fails with `DuplicateId` if `id` is taken and with
    /// `ResourceExhausted` if storage cannot grow; either way nothing is
    /// inserted.
    pub fn add(&mut self, id: SensorId, location: &str) -> RegistryResult<()> {
        if self.contains(id) {
            log_warn!("Sensor ID {} already exists", id);
            return Err(RegistryError::DuplicateId { id });
        }

        let readings = ReadingLog::try_with_capacity(self.config.reading_capacity, self.validator)?;

        if self.entries.len() >= self.capacity {
            grow_storage(&mut self.entries, &mut self.capacity, DEFAULT_REGISTRY_CAPACITY)?;
            log_debug!("Sensor table grown to {} slots", self.capacity);
        }

        let sensor = Sensor::with_log(id, Location::new(location), readings, self.now());
        log_info!("Sensor {} at {} added", id, sensor.location());
        self.entries.push(sensor);
        Ok(())
    }

    /// Releases a sensor and its reading log
    ///
    /// Later entries shift down one slot, keeping their relative order.
    pub fn remove(&mut self, id: SensorId) -> RegistryResult<()> {
        let index = self.position(id).ok_or(RegistryError::NotFound { id })?;

        self.entries.remove(index);
        log_info!("Sensor {} removed", id);
        Ok(())
    }

    /// Looks up a sensor by id
    pub fn find(&self, id: SensorId) -> Option<&Sensor> {
        self.entries.iter().find(|sensor| sensor.id() == id)
    }

    /// Looks up a sensor by id for mutation
    pub fn find_mut(&mut self, id: SensorId) -> Option<&mut Sensor> {
        self.entries.iter_mut().find(|sensor| sensor.id() == id)
    }

    /// Check if a sensor with this id is registered
    pub fn contains(&self, id: SensorId) -> bool {
        self.position(id).is_some()
    }

    /// Records a reading on sensor `id`
    ///
    /// Propagates `NotFound`, `CorruptReading` (after the log reset) and
    /// `ResourceExhausted` from the sensor.
    pub fn add_reading(&mut self, id: SensorId, value: f32) -> RegistryResult<()> {
        let now = self.now();
        self.find_mut(id)
            .ok_or(RegistryError::NotFound { id })?
            .record_reading(value, now)
    }

    /// Sets the light state of sensor `id` from a raw status code
    pub fn set_status(&mut self, id: SensorId, code: i64) -> RegistryResult<()> {
        let now = self.now();
        self.find_mut(id)
            .ok_or(RegistryError::NotFound { id })?
            .set_status(code, now)
    }

    /// Sets the light state of sensor `id`
    pub fn set_light_state(&mut self, id: SensorId, state: LightState) -> RegistryResult<()> {
        let now = self.now();
        self.find_mut(id)
            .ok_or(RegistryError::NotFound { id })?
            .set_light_state(state, now);
        Ok(())
    }

    /// Read-only views of the sensors, in table order
    ///
    /// Inactive sensors are skipped unless `include_inactive` is set. Each
    /// call takes a fresh look at the current state.
    pub fn iter(&self, include_inactive: bool) -> SensorViews<'_> {
        SensorViews {
            inner: self.entries.iter(),
            include_inactive,
            now: self.now(),
        }
    }

    /// Demote active sensors idle for longer than `threshold_ms` at `now`
    ///
    /// Shorthand for [`StalenessCollector::sweep`].
    pub fn sweep(&mut self, now: Timestamp, threshold_ms: u64) -> SweepReport {
        StalenessCollector::new(threshold_ms).sweep(self, now)
    }

    /// All sensors in table order
    pub fn sensors(&self) -> &[Sensor] {
        &self.entries
    }

    pub(crate) fn sensors_mut(&mut self) -> &mut [Sensor] {
        &mut self.entries
    }

    /// Releases every sensor; returns how many were released
    pub fn clear(&mut self) -> usize {
        let released = self.entries.len();
        self.entries.clear();
        log_info!("Registry cleared, {} sensors released", released);
        released
    }

    /// Number of registered sensors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no sensors are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Logical slot count of the sensor table
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Configuration this registry was built with
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Current time on the registry's clock
    pub fn now(&self) -> Timestamp {
        self.time_source.now()
    }

    /// The registry's clock
    pub fn time_source(&self) -> &T {
        &self.time_source
    }

    fn position(&self, id: SensorId) -> Option<usize> {
        self.entries.iter().position(|sensor| sensor.id() == id)
    }
}

/// Read-only snapshot of one sensor for listings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SensorView<'a> {
    /// Sensor identity
    pub id: SensorId,
    /// Location label
    pub location: &'a str,
    /// Current light state
    pub status: LightState,
    /// Whole seconds since the last update
    pub seconds_since_update: u64,
    /// Activity flag
    pub active: bool,
    /// Stored reading count
    pub reading_count: usize,
    /// Reading log capacity
    pub reading_capacity: usize,
    /// Stored readings, oldest first
    pub readings: &'a [f32],
}

impl<'a> SensorView<'a> {
    /// Snapshot `sensor` as seen at `now`
    pub fn new(sensor: &'a Sensor, now: Timestamp) -> Self {
        let log = sensor.readings();
        Self {
            id: sensor.id(),
            location: sensor.location(),
            status: sensor.status(),
            seconds_since_update: time::delta_secs(sensor.last_updated(), now),
            active: sensor.is_active(),
            reading_count: log.len(),
            reading_capacity: log.capacity(),
            readings: log.as_slice(),
        }
    }
}

/// Iterator over `SensorView`s, see [`SensorRegistry::iter`]
#[derive(Debug, Clone)]
pub struct SensorViews<'a> {
    inner: slice::Iter<'a, Sensor>,
    include_inactive: bool,
    now: Timestamp,
}

impl<'a> Iterator for SensorViews<'a> {
    type Item = SensorView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let include_inactive = self.include_inactive;
        let now = self.now;
        self.inner
            .by_ref()
            .find(|sensor| include_inactive || sensor.is_active())
            .map(|sensor| SensorView::new(sensor, now))
    }
}
