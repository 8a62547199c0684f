use thiserror::Error;

use crate::domain::entities::snapshot::MetricsSnapshot;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("failed to collect system metrics: {0}")]
    MetricsUnavailable(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
}

pub trait MetricsCollector: Send + Sync {
    /// Establish the CPU measurement baseline.
    ///
    /// CPU percentages are "since last call": the very first reading has no
    /// measurement interval behind it and is meaningless. The loop calls
    /// this once at startup and discards the result, so the first reported
    /// tick already covers a real interval.
    fn prime(&self);

    /// Collect one point-in-time snapshot.
    ///
    /// Network counters are cumulative KB since boot. `per_core` populates
    /// the per-core CPU readings.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError` if metrics are unavailable or permission
    /// is denied. The loop maps failures to a zeroed snapshot — a transient
    /// read failure must never stop the monitor.
    fn sample(&self, per_core: bool) -> Result<MetricsSnapshot, CollectionError>;
}
