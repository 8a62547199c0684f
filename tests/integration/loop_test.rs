#![allow(clippy::expect_used)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use chrono::Utc;

use pulse::application::config::{MonitorConfig, OutputMode};
use pulse::application::services::sampler::{LoopState, SamplerService, StopReason};
use pulse::domain::entities::snapshot::MetricsSnapshot;
use pulse::domain::ports::collector::{CollectionError, MetricsCollector};
use pulse::domain::ports::sink::{SampleSink, SinkError, CSV_HEADER};
use pulse::domain::value_objects::thresholds::ThresholdSet;
use pulse::presentation::cli::commands::monitor::run_monitor;
use pulse::presentation::cli::formatters::table_fmt::format_sample_table;

// ---------------------------------------------------------------------------
// Mocks
// ---------------------------------------------------------------------------

struct FixedCollector {
    cpu: f64,
    mem: f64,
    disk: f64,
    per_core: Option<Vec<f32>>,
    samples: AtomicU64,
}

impl FixedCollector {
    fn new(cpu: f64, mem: f64, disk: f64) -> Self {
        Self {
            cpu,
            mem,
            disk,
            per_core: None,
            samples: AtomicU64::new(0),
        }
    }

    fn with_cores(cores: Vec<f32>) -> Self {
        Self {
            per_core: Some(cores),
            ..Self::new(30.0, 40.0, 50.0)
        }
    }
}

impl MetricsCollector for FixedCollector {
    fn prime(&self) {}

    fn sample(&self, per_core: bool) -> Result<MetricsSnapshot, CollectionError> {
        self.samples.fetch_add(1, Ordering::SeqCst);
        Ok(MetricsSnapshot {
            timestamp: Utc::now(),
            cpu_pct: self.cpu,
            mem_pct: self.mem,
            disk_pct: self.disk,
            net_sent_kb: 100,
            net_recv_kb: 200,
            per_core: if per_core { self.per_core.clone() } else { None },
        })
    }
}

struct FailingCollector;

impl MetricsCollector for FailingCollector {
    fn prime(&self) {}

    fn sample(&self, _per_core: bool) -> Result<MetricsSnapshot, CollectionError> {
        Err(CollectionError::MetricsUnavailable(
            "simulated outage".into(),
        ))
    }
}

struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    fn new() -> Self {
        Self {
            lines: Mutex::new(vec![]),
        }
    }

    fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("lock").clone()
    }
}

impl SampleSink for MemorySink {
    fn is_empty(&self) -> Result<bool, SinkError> {
        Ok(self.lines.lock().expect("lock").is_empty())
    }

    fn append(&self, line: &str) -> Result<(), SinkError> {
        self.lines.lock().expect("lock").push(line.to_string());
        Ok(())
    }
}

fn fast_config() -> MonitorConfig {
    MonitorConfig {
        interval_secs: 0.01,
        output: OutputMode::Json,
        ..MonitorConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Scoring through the service
// ---------------------------------------------------------------------------

#[test]
fn light_load_scores_90() {
    let collector = FixedCollector::new(10.0, 10.0, 10.0);
    let config = MonitorConfig::default();
    let service = SamplerService::new(&collector, None, &config);
    let mut state = LoopState::new();

    let report = service.run_once(&mut state);
    assert!((report.health.value() - 90.0).abs() < 1e-9);
}

#[test]
fn heavy_load_scores_10() {
    let collector = FixedCollector::new(90.0, 90.0, 90.0);
    let config = MonitorConfig::default();
    let service = SamplerService::new(&collector, None, &config);
    let mut state = LoopState::new();

    let report = service.run_once(&mut state);
    assert!((report.health.value() - 10.0).abs() < 1e-9);
}

#[test]
fn anomalous_negative_usage_clamps_to_100() {
    let collector = FixedCollector::new(-10.0, 0.0, 0.0);
    let config = MonitorConfig::default();
    let service = SamplerService::new(&collector, None, &config);
    let mut state = LoopState::new();

    let report = service.run_once(&mut state);
    assert!((report.health.value() - 100.0).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Full loop runs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn three_tick_run_terminates_by_iteration_limit() {
    let collector = FixedCollector::new(10.0, 10.0, 10.0);
    let sink = MemorySink::new();
    let config = MonitorConfig {
        log: true,
        max_iterations: Some(3),
        ..fast_config()
    };
    let service = SamplerService::new(&collector, Some(&sink), &config);

    let reason = tokio::time::timeout(
        Duration::from_secs(2),
        run_monitor(&service, &config, &ThresholdSet::default()),
    )
    .await
    .expect("loop should stop before the timeout")
    .expect("loop should stop cleanly");

    assert_eq!(reason, StopReason::IterationLimit);
    assert_eq!(
        collector.samples.load(Ordering::SeqCst),
        3,
        "exactly 3 samples"
    );

    let lines = sink.lines();
    assert_eq!(lines.len(), 4, "1 header + 3 data rows");
    assert_eq!(lines[0], CSV_HEADER);
    for row in &lines[1..] {
        assert_eq!(row.split(',').count(), 7);
        assert!(row.contains("90"), "health score 90 should be logged");
    }
}

#[tokio::test]
async fn runtime_cap_terminates_the_loop() {
    let collector = FixedCollector::new(10.0, 10.0, 10.0);
    let config = MonitorConfig {
        max_runtime_secs: Some(0.05),
        ..fast_config()
    };
    let service = SamplerService::new(&collector, None, &config);

    let reason = tokio::time::timeout(
        Duration::from_secs(2),
        run_monitor(&service, &config, &ThresholdSet::default()),
    )
    .await
    .expect("loop should stop before the timeout")
    .expect("loop should stop cleanly");

    assert_eq!(reason, StopReason::RuntimeLimit);
}

#[tokio::test]
async fn metrics_outage_does_not_stop_the_run() {
    let collector = FailingCollector;
    let sink = MemorySink::new();
    let config = MonitorConfig {
        log: true,
        max_iterations: Some(2),
        ..fast_config()
    };
    let service = SamplerService::new(&collector, Some(&sink), &config);

    let reason = tokio::time::timeout(
        Duration::from_secs(2),
        run_monitor(&service, &config, &ThresholdSet::default()),
    )
    .await
    .expect("loop should stop before the timeout")
    .expect("loop should stop cleanly");

    // the monitor fails open: zeroed snapshots, loop reaches its limit
    assert_eq!(reason, StopReason::IterationLimit);
    let lines = sink.lines();
    assert_eq!(lines.len(), 3, "1 header + 2 zeroed data rows");
    assert!(lines[1].contains(",0,0,0,100,0,0"));
}

// ---------------------------------------------------------------------------
// Per-core end to end
// ---------------------------------------------------------------------------

#[test]
fn per_core_readings_reach_the_table() {
    colored::control::set_override(false);

    let collector = FixedCollector::with_cores(vec![20.0, 30.0, 40.0]);
    let config = MonitorConfig {
        per_core: true,
        ..MonitorConfig::default()
    };
    let service = SamplerService::new(&collector, None, &config);
    let mut state = LoopState::new();

    let report = service.run_once(&mut state);
    assert_eq!(report.snapshot.per_core, Some(vec![20.0, 30.0, 40.0]));

    let table = format_sample_table(&report, &ThresholdSet::default());
    assert!(table.contains("Core 0"));
    assert!(table.contains("Core 1"));
    assert!(table.contains("Core 2"));
    assert!(!table.contains("Core 3"));
}
