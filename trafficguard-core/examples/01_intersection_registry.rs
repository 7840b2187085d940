//! Example 01: Intersection Registry
//!
//! Registers a few intersections, feeds them readings (one of them
//! corrupt), switches a light, and runs a staleness sweep on a simulated
//! clock.
//!
//! Run with: `cargo run --example 01_intersection_registry`

use trafficguard_core::{
    time::ManualTime, LightState, RegistryError, SensorRegistry, StalenessCollector,
};

fn main() -> Result<(), RegistryError> {
    println!("TrafficGuard Example: Intersection Registry");
    println!("===========================================\n");

    let clock = ManualTime::new(0);
    let mut registry = SensorRegistry::with_time_source(clock.clone());

    registry.add(1, "Main&5th")?;
    registry.add(2, "Oak&Elm")?;
    registry.add(3, "Harbor&1st")?;

    for value in [45.0, 52.5, 61.0] {
        registry.add_reading(1, value)?;
    }
    registry.add_reading(2, 12.0)?;

    match registry.add_reading(2, 1500.0) {
        Err(RegistryError::CorruptReading { id, value }) => {
            println!("Sensor {id}: corrupt value {value:.2}, history discarded");
        }
        other => println!("Unexpected result: {other:?}"),
    }

    registry.set_light_state(1, LightState::Green)?;

    // Sensor 3 goes quiet while the others keep reporting
    clock.advance_secs(2 * 3600);
    registry.add_reading(1, 40.0)?;
    registry.add_reading(2, 18.0)?;

    let report = StalenessCollector::default().sweep_now(&mut registry);
    println!("\nSweep demoted {} sensor(s)", report.count_marked);
    for demoted in &report.demoted {
        println!("  sensor {} idle for {}s", demoted.id, demoted.idle_secs);
    }

    println!("\nAll sensors:");
    for view in registry.iter(true) {
        println!(
            "  #{:<3} {:<12} {:<6} active={:<5} readings {}/{}: {:?}",
            view.id,
            view.location,
            view.status.name(),
            view.active,
            view.reading_count,
            view.reading_capacity,
            view.readings
        );
    }

    Ok(())
}
