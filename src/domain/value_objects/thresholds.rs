use serde::{Deserialize, Serialize};

/// Display thresholds for flagging readings in the table renderer.
///
/// These are presentation thresholds, not alerting ones: a flagged value is
/// rendered in red, nothing else happens. Fixed at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    /// CPU usage percentage above which the reading is flagged
    pub cpu_pct: f64,
    /// Memory usage percentage above which the reading is flagged
    pub mem_pct: f64,
    /// Disk usage percentage above which the reading is flagged
    pub disk_pct: f64,
    /// Health score above this value is in the good band
    pub health_good_above: f64,
    /// Health score above this value (and below the good band) is a warning
    pub health_warn_above: f64,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            cpu_pct: 80.0,
            mem_pct: 80.0,
            disk_pct: 90.0,
            health_good_above: 70.0,
            health_warn_above: 40.0,
        }
    }
}
