//! Capacity and Growth Parameters
//!
//! Both the registry's sensor table and each sensor's reading log start
//! small and double when full. Expected scale is tens to low hundreds of
//! sensors per district, so the initial sizes stay tiny.

/// Initial slot count of a sensor's reading log.
pub const DEFAULT_READING_CAPACITY: usize = 4;

/// Initial slot count of the registry's sensor table.
pub const DEFAULT_REGISTRY_CAPACITY: usize = 4;

/// Multiplier applied to capacity when storage is full.
pub const GROWTH_FACTOR: usize = 2;

/// Next capacity for storage currently holding `capacity` slots.
///
/// Never returns less than `minimum`, so zero-capacity storage still grows.
pub const fn grown_capacity(capacity: usize, minimum: usize) -> usize {
    let doubled = capacity.saturating_mul(GROWTH_FACTOR);
    if doubled < minimum {
        minimum
    } else {
        doubled
    }
}
