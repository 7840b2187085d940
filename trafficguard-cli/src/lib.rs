//! Operator console for TrafficGuard
//!
//! The interactive menu, listing renderer and configuration loading used by
//! the `trafficguard` binary. All sensor state lives in
//! `trafficguard_core::SensorRegistry`; this crate only reads input, calls
//! the registry and prints results.

pub mod render;
pub mod settings;
pub mod shell;

pub use render::ListFormat;
pub use settings::load_config;
pub use shell::{MenuChoice, Shell};
