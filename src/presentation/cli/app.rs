use clap::Parser;

use crate::application::config::{
    ConfigError, MonitorConfig, OutputMode, DEFAULT_INTERVAL_SECS, DEFAULT_LOGFILE,
};

/// pulse — periodic host health sampler
///
/// Samples CPU, memory, disk and network counters at a fixed cadence,
/// derives a 0–100 health score and renders each tick as a console table
/// or a JSON record, with optional CSV logging for trend analysis.
#[derive(Parser, Debug)]
#[command(name = "pulse")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Update interval in seconds
    #[arg(short, long, default_value_t = DEFAULT_INTERVAL_SECS, allow_negative_numbers = true)]
    pub interval: f64,

    /// Enable CSV logging
    #[arg(long)]
    pub log: bool,

    /// CSV log file path
    #[arg(long, default_value = DEFAULT_LOGFILE, requires = "log")]
    pub logfile: String,

    /// Stop after this many updates
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_iterations: Option<u64>,

    /// Stop after this many seconds
    #[arg(long, allow_negative_numbers = true)]
    pub max_runtime: Option<f64>,

    /// Output JSON records instead of the table
    #[arg(long)]
    pub json: bool,

    /// Show per-core CPU usage
    #[arg(long)]
    pub per_core: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl TryFrom<&Cli> for MonitorConfig {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let config = Self {
            interval_secs: cli.interval,
            log: cli.log,
            logfile: cli.logfile.clone(),
            max_iterations: cli.max_iterations,
            max_runtime_secs: cli.max_runtime,
            output: if cli.json {
                OutputMode::Json
            } else {
                OutputMode::Table
            },
            per_core: cli.per_core,
        };
        config.validate()?;
        Ok(config)
    }
}
