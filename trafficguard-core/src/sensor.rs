//! Traffic sensor records
//!
//! A `Sensor` couples an identity and a location label with the current
//! light state, an activity flag, the time of its last update and the
//! reading log it exclusively owns.
//!
//! Sensors are created and destroyed only by the registry. Callers can
//! record readings and change status; the activity flag belongs to the
//! staleness collector and is never set back to `true` once cleared.

use core::fmt;
use core::ops::Deref;

use crate::{
    buffer::ReadingLog,
    constants::sensors::LOCATION_MAX_LEN,
    errors::{RegistryError, RegistryResult},
    time::{self, Timestamp},
};

/// Sensor identity, unique within a registry
pub type SensorId = u32;

/// Traffic light state reported by a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(u8)]
pub enum LightState {
    /// Stop; the state of every new sensor
    #[default]
    Red = 0,
    /// Caution
    Yellow = 1,
    /// Go
    Green = 2,
}

impl LightState {
    /// All states in code order
    pub const ALL: [LightState; 3] = [LightState::Red, LightState::Yellow, LightState::Green];

    /// Parse an operator-supplied status code (0=RED, 1=YELLOW, 2=GREEN)
    pub fn from_code(code: i64) -> RegistryResult<Self> {
        match code {
            0 => Ok(LightState::Red),
            1 => Ok(LightState::Yellow),
            2 => Ok(LightState::Green),
            _ => Err(RegistryError::InvalidStatus { code }),
        }
    }

    /// Numeric code of this state
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            LightState::Red => "RED",
            LightState::Yellow => "YELLOW",
            LightState::Green => "GREEN",
        }
    }
}

impl TryFrom<u8> for LightState {
    type Error = RegistryError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(i64::from(code))
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Location label, at most `LOCATION_MAX_LEN` bytes
///
/// Longer input is truncated at the last character boundary that fits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location(heapless::String<LOCATION_MAX_LEN>);

impl Location {
    /// Build a label from `text`, truncating if it is too long
    pub fn new(text: &str) -> Self {
        let mut label = heapless::String::new();
        for ch in text.chars() {
            if label.push(ch).is_err() {
                log_debug!(
                    "Location label truncated to {} bytes: {:?}",
                    LOCATION_MAX_LEN,
                    label.as_str()
                );
                break;
            }
        }
        Self(label)
    }

    /// The label text
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for Location {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Location {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Location {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A registered traffic sensor
#[derive(Debug, Clone)]
pub struct Sensor {
    id: SensorId,
    location: Location,
    status: LightState,
    last_updated: Timestamp,
    is_active: bool,
    readings: ReadingLog,
}

impl Sensor {
    /// Create an active sensor showing red, with an empty default log
    pub fn new(id: SensorId, location: &str, now: Timestamp) -> Self {
        Self::with_log(id, Location::new(location), ReadingLog::new(), now)
    }

    pub(crate) fn with_log(
        id: SensorId,
        location: Location,
        readings: ReadingLog,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            location,
            status: LightState::Red,
            last_updated: now,
            is_active: true,
            readings,
        }
    }

    /// Change the light state from a raw status code
    ///
    /// Fails with `InvalidStatus` for codes outside {0, 1, 2}; the sensor is
    /// left unchanged in that case.
    pub fn set_status(&mut self, code: i64, now: Timestamp) -> RegistryResult<()> {
        let state = LightState::from_code(code)?;
        self.set_light_state(state, now);
        Ok(())
    }

    /// Change the light state
    pub fn set_light_state(&mut self, state: LightState, now: Timestamp) {
        self.status = state;
        self.last_updated = now;
        log_info!("Sensor {} status changed to {}", self.id, state);
    }

    /// Store a reading, recovering from corrupt input
    ///
    /// A value that fails validation wipes the whole log (capacity is kept),
    /// refreshes the timestamp and returns `CorruptReading`. On success the
    /// timestamp is refreshed. A failed growth returns `ResourceExhausted`
    /// with the sensor untouched.
    pub fn record_reading(&mut self, value: f32, now: Timestamp) -> RegistryResult<()> {
        match self.readings.append(value) {
            Ok(()) => {
                self.last_updated = now;
                log_debug!("Reading {:.2} added to sensor {}", value, self.id);
                Ok(())
            }
            Err(RegistryError::InvalidReading(_reason)) => {
                log_warn!(
                    "Corrupt sensor data detected on sensor {} ({:.2}): {}",
                    self.id,
                    value,
                    _reason
                );
                self.recover(now);
                Err(RegistryError::CorruptReading { id: self.id, value })
            }
            Err(err) => Err(err),
        }
    }

    /// Discard the whole log after corrupt input
    fn recover(&mut self, now: Timestamp) {
        let _discarded = self.readings.len();
        self.readings.reset();
        self.last_updated = now;
        log_warn!(
            "Reset {} readings on sensor {} after corrupt input",
            _discarded,
            self.id
        );
    }

    /// Demote to inactive; only the staleness collector calls this
    pub(crate) fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Sensor identity
    pub fn id(&self) -> SensorId {
        self.id
    }

    /// Location label
    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    /// Current light state
    pub fn status(&self) -> LightState {
        self.status
    }

    /// Time of the last successful mutation
    pub fn last_updated(&self) -> Timestamp {
        self.last_updated
    }

    /// Whether the sensor has escaped demotion so far
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// The sensor's reading log
    pub fn readings(&self) -> &ReadingLog {
        &self.readings
    }

    /// Milliseconds since the last update
    pub fn idle_ms(&self, now: Timestamp) -> u64 {
        time::delta_ms(self.last_updated, now)
    }
}
