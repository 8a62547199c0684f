use thiserror::Error;

use crate::domain::entities::snapshot::MetricsSnapshot;
use crate::domain::value_objects::health::HealthScore;

/// Column header written exactly once per sink lifetime.
pub const CSV_HEADER: &str = "timestamp,cpu,mem,disk,health,net_sent,net_recv";

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("sink probe failed: {0}")]
    ProbeFailed(String),
    #[error("sink write failed: {0}")]
    WriteFailed(String),
}

/// Append-only persistence target for logged samples.
///
/// `is_empty` is a capability, not a file-existence probe: the decision to
/// write the header lives in [`log_sample`], the sink only answers whether
/// anything has been written to it yet.
pub trait SampleSink: Send + Sync {
    /// Whether the sink is newly created or holds no rows yet.
    ///
    /// # Errors
    ///
    /// Returns `SinkError::ProbeFailed` if the sink state cannot be read.
    fn is_empty(&self) -> Result<bool, SinkError>;

    /// Append one raw line to the sink.
    ///
    /// # Errors
    ///
    /// Returns `SinkError::WriteFailed` if the append fails.
    fn append(&self, line: &str) -> Result<(), SinkError>;
}

/// Append one sample to the sink, writing the header first iff the sink is
/// newly created or empty.
///
/// Idempotent across process restarts: re-invoking against a non-empty sink
/// only appends data rows, it never rewrites the header or clobbers prior
/// rows.
///
/// # Errors
///
/// Returns `SinkError` if probing or appending fails. Callers surface the
/// failure and keep the loop running — a broken sink must not stop
/// reporting.
pub fn log_sample(
    sink: &dyn SampleSink,
    snapshot: &MetricsSnapshot,
    health: HealthScore,
) -> Result<(), SinkError> {
    if sink.is_empty()? {
        sink.append(CSV_HEADER)?;
    }
    sink.append(&format!(
        "{},{},{},{},{},{},{}",
        snapshot.timestamp.to_rfc3339(),
        snapshot.cpu_pct,
        snapshot.mem_pct,
        snapshot.disk_pct,
        health.value(),
        snapshot.net_sent_kb,
        snapshot.net_recv_kb,
    ))
}
