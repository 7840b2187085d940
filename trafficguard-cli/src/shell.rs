//! Interactive menu loop
//!
//! Reads whitespace-separated tokens from any `BufRead`, so answers can be
//! typed one per line or several on one line. End of input behaves like
//! choosing "Exit System".

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use trafficguard_core::{
    time::TimeSource, RegistryError, SensorId, SensorRegistry, StalenessCollector,
};

use crate::render::{render_listing, ListFormat};

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Register a sensor
    AddSensor,
    /// Release a sensor
    RemoveSensor,
    /// Record a reading
    AddReading,
    /// Change a light state
    UpdateStatus,
    /// List active sensors
    ListActive,
    /// List every sensor
    ListAll,
    /// Run a staleness sweep
    Sweep,
    /// Release everything and leave
    Exit,
}

impl MenuChoice {
    /// Map a menu number (1-8) to a choice
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::AddSensor),
            2 => Some(MenuChoice::RemoveSensor),
            3 => Some(MenuChoice::AddReading),
            4 => Some(MenuChoice::UpdateStatus),
            5 => Some(MenuChoice::ListActive),
            6 => Some(MenuChoice::ListAll),
            7 => Some(MenuChoice::Sweep),
            8 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\nMain Menu:
1. Add Traffic Sensor
2. Remove Traffic Sensor
3. Add Sensor Reading
4. Update Traffic Light Status
5. Display All Active Sensors
6. Display All Sensors (including inactive)
7. Run Garbage Collection
8. Exit System";

/// Operator console over a registry
pub struct Shell<R, W, T: TimeSource> {
    registry: SensorRegistry<T>,
    collector: StalenessCollector,
    input: R,
    output: W,
    pending: VecDeque<String>,
    format: ListFormat,
}

/// Outcome of reading one answer
enum Answer<V> {
    Value(V),
    Unparsable,
    EndOfInput,
}

impl<V> Answer<V> {
    /// Whether the menu loop should continue after a non-value answer
    fn keeps_going(&self) -> bool {
        !matches!(self, Answer::EndOfInput)
    }
}

impl<R: BufRead, W: Write, T: TimeSource> Shell<R, W, T> {
    /// Console reading from `input` and writing to `output`
    pub fn new(
        registry: SensorRegistry<T>,
        collector: StalenessCollector,
        input: R,
        output: W,
    ) -> Self {
        Self {
            registry,
            collector,
            input,
            output,
            pending: VecDeque::new(),
            format: ListFormat::Text,
        }
    }

    /// Print listings in `format`
    pub fn with_format(mut self, format: ListFormat) -> Self {
        self.format = format;
        self
    }

    /// The registry driven by this console
    pub fn registry(&self) -> &SensorRegistry<T> {
        &self.registry
    }

    /// Everything written so far
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run the menu until the operator exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nSmart City Traffic Light Management System")?;
        writeln!(self.output, "========================================")?;

        loop {
            writeln!(self.output, "{MENU}")?;
            let choice = match self.ask::<i64>("Enter your choice (1-8): ")? {
                Answer::Value(number) => number,
                Answer::Unparsable => {
                    writeln!(self.output, "Invalid input! Please enter a number.")?;
                    self.pending.clear();
                    continue;
                }
                Answer::EndOfInput => break,
            };

            let Some(choice) = MenuChoice::from_number(choice) else {
                writeln!(self.output, "Invalid choice! Please enter 1-8.")?;
                continue;
            };

            let keep_going = match choice {
                MenuChoice::AddSensor => self.add_sensor()?,
                MenuChoice::RemoveSensor => self.remove_sensor()?,
                MenuChoice::AddReading => self.add_reading()?,
                MenuChoice::UpdateStatus => self.update_status()?,
                MenuChoice::ListActive => self.list(false)?,
                MenuChoice::ListAll => self.list(true)?,
                MenuChoice::Sweep => self.sweep()?,
                MenuChoice::Exit => false,
            };
            if !keep_going {
                break;
            }
        }

        self.shutdown()
    }

    fn add_sensor(&mut self) -> io::Result<bool> {
        let id = match self.ask_or_report::<SensorId>("Enter sensor ID: ")? {
            Answer::Value(id) => id,
            other => return Ok(other.keeps_going()),
        };
        let location = match self.ask::<String>("Enter location: ")? {
            Answer::Value(location) => location,
            _ => return Ok(false),
        };

        match self.registry.add(id, &location) {
            Ok(()) => {
                let stored = self.registry.find(id).map(|s| s.location().to_owned());
                writeln!(
                    self.output,
                    "Sensor {} at {} added successfully.",
                    id,
                    stored.as_deref().unwrap_or(&location)
                )?;
            }
            Err(err) => self.report_failure(err, "Failed to add sensor!")?,
        }
        Ok(true)
    }

    fn remove_sensor(&mut self) -> io::Result<bool> {
        let id = match self.ask_or_report::<SensorId>("Enter sensor ID to remove: ")? {
            Answer::Value(id) => id,
            other => return Ok(other.keeps_going()),
        };

        match self.registry.remove(id) {
            Ok(()) => writeln!(self.output, "Sensor {id} removed successfully.")?,
            Err(err) => self.report_failure(err, "Failed to remove sensor!")?,
        }
        Ok(true)
    }

    fn add_reading(&mut self) -> io::Result<bool> {
        let id = match self.ask_or_report::<SensorId>("Enter sensor ID: ")? {
            Answer::Value(id) => id,
            other => return Ok(other.keeps_going()),
        };
        let value = match self.ask_or_report::<f32>("Enter reading value: ")? {
            Answer::Value(value) => value,
            other => return Ok(other.keeps_going()),
        };

        match self.registry.add_reading(id, value) {
            Ok(()) => writeln!(self.output, "Reading {value:.2} added to sensor {id}.")?,
            Err(RegistryError::CorruptReading { id, value }) => {
                writeln!(self.output, "Warning: Corrupt sensor data detected ({value:.2})")?;
                writeln!(self.output, "Handling potential buffer overflow for sensor {id}")?;
                writeln!(self.output, "Failed to add reading!")?;
            }
            Err(err) => self.report_failure(err, "Failed to add reading!")?,
        }
        Ok(true)
    }

    fn update_status(&mut self) -> io::Result<bool> {
        let id = match self.ask_or_report::<SensorId>("Enter sensor ID: ")? {
            Answer::Value(id) => id,
            other => return Ok(other.keeps_going()),
        };
        let prompt = "Enter new status (0=RED, 1=YELLOW, 2=GREEN): ";
        let code = match self.ask_or_report::<i64>(prompt)? {
            Answer::Value(code) => code,
            other => return Ok(other.keeps_going()),
        };

        match self.registry.set_status(id, code) {
            Ok(()) => {
                let status = self.registry.find(id).map(|s| s.status().name()).unwrap_or("?");
                writeln!(self.output, "Sensor {id} status changed to {status}.")?;
            }
            Err(err) => self.report_failure(err, "Failed to update status!")?,
        }
        Ok(true)
    }

    fn list(&mut self, include_inactive: bool) -> io::Result<bool> {
        render_listing(&mut self.output, &self.registry, include_inactive, self.format)?;
        Ok(true)
    }

    fn sweep(&mut self) -> io::Result<bool> {
        let report = self.collector.sweep_now(&mut self.registry);

        for demoted in &report.demoted {
            writeln!(
                self.output,
                "Marking sensor {} as inactive (last updated: {} seconds ago)",
                demoted.id, demoted.idle_secs
            )?;
        }
        writeln!(
            self.output,
            "Garbage collection completed. {} sensors marked inactive.",
            report.count_marked
        )?;
        Ok(true)
    }

    fn shutdown(&mut self) -> io::Result<()> {
        let released = self.registry.clear();
        log::info!("Shutting down, released {released} sensors");
        writeln!(self.output, "System shutdown. All memory freed.")?;
        self.output.flush()
    }

    fn report_failure(&mut self, err: RegistryError, summary: &str) -> io::Result<()> {
        writeln!(self.output, "Error: {err}!")?;
        writeln!(self.output, "{summary}")
    }

    /// Prompt and parse one token; report unparsable input
    fn ask_or_report<V: FromStr>(&mut self, prompt: &str) -> io::Result<Answer<V>> {
        let answer = self.ask::<V>(prompt)?;
        if let Answer::Unparsable = answer {
            writeln!(self.output, "Invalid input! Please enter a number.")?;
            self.pending.clear();
        }
        Ok(answer)
    }

    fn ask<V: FromStr>(&mut self, prompt: &str) -> io::Result<Answer<V>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        Ok(match self.next_token()? {
            Some(token) => match token.parse() {
                Ok(value) => Answer::Value(value),
                Err(_) => Answer::Unparsable,
            },
            None => Answer::EndOfInput,
        })
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }
}
