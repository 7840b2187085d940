//! Sensor listing output

use std::io::{self, Write};

use trafficguard_core::{time::TimeSource, SensorRegistry, SensorView};

/// How listings are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFormat {
    /// Human-readable blocks, one per sensor
    #[default]
    Text,
    /// A JSON array of sensor views
    Json,
}

/// Print the sensors of `registry`, skipping inactive ones unless `include_inactive`
pub fn render_listing<W: Write, T: TimeSource>(
    out: &mut W,
    registry: &SensorRegistry<T>,
    include_inactive: bool,
    format: ListFormat,
) -> io::Result<()> {
    match format {
        ListFormat::Text => render_text(out, registry, include_inactive),
        ListFormat::Json => render_json(out, registry, include_inactive),
    }
}

fn render_text<W: Write, T: TimeSource>(
    out: &mut W,
    registry: &SensorRegistry<T>,
    include_inactive: bool,
) -> io::Result<()> {
    writeln!(out, "\n=== Sensor List ===")?;
    if registry.is_empty() {
        writeln!(out, "No sensors in system.")?;
        return Ok(());
    }

    let mut displayed = 0;
    for view in registry.iter(include_inactive) {
        write_sensor(out, &view)?;
        displayed += 1;
    }

    if displayed == 0 {
        writeln!(out, "No sensors match the display criteria.")?;
    } else {
        writeln!(out, "\nTotal displayed: {displayed}")?;
    }
    Ok(())
}

fn write_sensor<W: Write>(out: &mut W, view: &SensorView<'_>) -> io::Result<()> {
    writeln!(out, "\nSensor ID: {}", view.id)?;
    writeln!(out, "Location: {}", view.location)?;
    writeln!(out, "Status: {}", view.status)?;
    writeln!(out, "Last Updated: {} seconds ago", view.seconds_since_update)?;
    writeln!(out, "Active: {}", if view.active { "YES" } else { "NO" })?;
    write!(out, "Readings ({}/{}): ", view.reading_count, view.reading_capacity)?;
    for reading in view.readings {
        write!(out, "{reading:.2} ")?;
    }
    writeln!(out)
}

fn render_json<W: Write, T: TimeSource>(
    out: &mut W,
    registry: &SensorRegistry<T>,
    include_inactive: bool,
) -> io::Result<()> {
    let views: Vec<SensorView<'_>> = registry.iter(include_inactive).collect();
    serde_json::to_writer_pretty(&mut *out, &views)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trafficguard_core::time::ManualTime;

    fn rendered(registry: &SensorRegistry<ManualTime>, include_inactive: bool, format: ListFormat) -> String {
        let mut out = Vec::new();
        render_listing(&mut out, registry, include_inactive, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_registry() {
        let registry = SensorRegistry::with_time_source(ManualTime::new(0));

        assert!(rendered(&registry, true, ListFormat::Text).contains("No sensors in system."));
    }

    #[test]
    fn text_block_layout() {
        let clock = ManualTime::new(0);
        let mut registry = SensorRegistry::with_time_source(clock.clone());
        registry.add(1, "Main&5th").unwrap();
        registry.add_reading(1, 45.0).unwrap();
        registry.add_reading(1, 3.5).unwrap();
        clock.advance_secs(12);

        let text = rendered(&registry, false, ListFormat::Text);

        assert!(text.contains("Sensor ID: 1\n"));
        assert!(text.contains("Location: Main&5th\n"));
        assert!(text.contains("Status: RED\n"));
        assert!(text.contains("Last Updated: 12 seconds ago\n"));
        assert!(text.contains("Active: YES\n"));
        assert!(text.contains("Readings (2/4): 45.00 3.50 \n"));
        assert!(text.contains("Total displayed: 1"));
    }

    #[test]
    fn nothing_matches_when_all_inactive() {
        let clock = ManualTime::new(0);
        let mut registry = SensorRegistry::with_time_source(clock.clone());
        registry.add(1, "x").unwrap();
        clock.advance_secs(7200);
        registry.sweep(clock.now(), 3_600_000);

        let text = rendered(&registry, false, ListFormat::Text);
        assert!(text.contains("No sensors match the display criteria."));

        let text = rendered(&registry, true, ListFormat::Text);
        assert!(text.contains("Active: NO"));
    }

    #[test]
    fn json_array_of_views() {
        let mut registry = SensorRegistry::with_time_source(ManualTime::new(0));
        registry.add(3, "Oak").unwrap();
        registry.add(4, "Elm").unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&rendered(&registry, true, ListFormat::Json)).unwrap();

        assert_eq!(json.as_array().unwrap().len(), 2);
        assert_eq!(json[1]["location"], "Elm");
        assert_eq!(json[0]["status"], "RED");
    }
}
