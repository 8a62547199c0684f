use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One tick's immutable bundle of raw metric readings.
///
/// Utilization percentages are nominally in `[0, 100]` but may transiently
/// exceed 100 due to measurement artifacts; the health computation clamps.
/// Network counters are cumulative KB since boot — never deltas. Delta
/// computation belongs to the reporting side, using consecutive snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub timestamp: DateTime<Utc>,
    pub cpu_pct: f64,
    pub mem_pct: f64,
    pub disk_pct: f64,
    pub net_sent_kb: u64,
    pub net_recv_kb: u64,
    /// Per-core CPU percentages, populated only in per-core mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_core: Option<Vec<f32>>,
}

impl MetricsSnapshot {
    /// The fail-open snapshot reported when the metrics read fails:
    /// every reading zeroed, timestamped at the failed tick.
    #[must_use]
    pub fn zeroed() -> Self {
        Self {
            timestamp: Utc::now(),
            cpu_pct: 0.0,
            mem_pct: 0.0,
            disk_pct: 0.0,
            net_sent_kb: 0,
            net_recv_kb: 0,
            per_core: None,
        }
    }
}
