use crate::application::services::sampler::TickReport;

/// Renders one tick as a pretty-printed JSON record.
///
/// The `trends` object carries per-metric deltas (`current − previous`) and
/// is present only from the second tick onward.
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn render_record(report: &TickReport) -> Result<String, serde_json::Error> {
    let snapshot = &report.snapshot;
    let mut record = serde_json::json!({
        "timestamp": snapshot.timestamp.to_rfc3339(),
        "cpu": snapshot.cpu_pct,
        "mem": snapshot.mem_pct,
        "disk": snapshot.disk_pct,
        "health": report.health.value(),
        "net_sent_kb": snapshot.net_sent_kb,
        "net_recv_kb": snapshot.net_recv_kb,
    });

    if let Some(trends) = &report.trends {
        record["trends"] = serde_json::json!({
            "cpu": trends.cpu_delta,
            "mem": trends.mem_delta,
            "disk": trends.disk_delta,
            "health": trends.health_delta,
        });
    }

    serde_json::to_string_pretty(&record)
}
