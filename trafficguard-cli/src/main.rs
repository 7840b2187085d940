//! `trafficguard` - interactive console for the traffic sensor registry

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use trafficguard_core::{time::SystemTime, SensorRegistry, StalenessCollector};
use trafficguard_cli::{load_config, ListFormat, Shell};

/// Smart city traffic light sensor registry
#[derive(Debug, Parser)]
#[command(name = "trafficguard", version, about)]
struct Cli {
    /// JSON file with registry settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Idle seconds before a sweep marks a sensor inactive (overrides the config file)
    #[arg(long)]
    stale_threshold_secs: Option<u64>,

    /// Print sensor listings as JSON
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(secs) = cli.stale_threshold_secs {
        config.stale_threshold_secs = secs;
    }
    log::debug!("Registry configuration: {config:?}");

    let collector = StalenessCollector::from_secs(config.stale_threshold_secs);
    let registry = SensorRegistry::with_config(config, SystemTime)?;
    let format = if cli.json { ListFormat::Json } else { ListFormat::Text };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(registry, collector, stdin.lock(), stdout.lock()).with_format(format);
    shell.run()?;

    Ok(())
}
