use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Presentation form chosen once at startup, never per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputMode {
    /// Redrawn console table each tick.
    Table,
    /// One structured JSON record per tick on stdout.
    Json,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid interval: {0} (must be a finite number > 0)")]
    InvalidInterval(f64),
    #[error("invalid max runtime: {0} (must be a finite number > 0)")]
    InvalidMaxRuntime(f64),
}

/// Runtime configuration of the sampling loop.
///
/// Built from the CLI at startup; validation failures are fatal before the
/// loop begins, with a clear message and a non-zero exit.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorConfig {
    /// Seconds between tick boundaries.
    pub interval_secs: f64,
    /// Append each sample to the CSV log sink.
    pub log: bool,
    /// Path of the CSV log sink.
    pub logfile: String,
    /// Stop after this many ticks.
    pub max_iterations: Option<u64>,
    /// Stop once this much wall time has elapsed.
    pub max_runtime_secs: Option<f64>,
    pub output: OutputMode,
    /// Collect and display per-core CPU readings.
    pub per_core: bool,
}

pub const DEFAULT_INTERVAL_SECS: f64 = 2.0;
pub const DEFAULT_LOGFILE: &str = "system_log.csv";

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_INTERVAL_SECS,
            log: false,
            logfile: DEFAULT_LOGFILE.to_string(),
            max_iterations: None,
            max_runtime_secs: None,
            output: OutputMode::Table,
            per_core: false,
        }
    }
}

impl MonitorConfig {
    /// Checks the startup-fatal invariants.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the interval or the runtime cap is not a
    /// finite positive number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.interval_secs.is_finite() || self.interval_secs <= 0.0 {
            return Err(ConfigError::InvalidInterval(self.interval_secs));
        }
        if let Some(runtime) = self.max_runtime_secs {
            if !runtime.is_finite() || runtime <= 0.0 {
                return Err(ConfigError::InvalidMaxRuntime(runtime));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.interval_secs)
    }
}
