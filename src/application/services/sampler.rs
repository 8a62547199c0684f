use std::time::Duration;

use crate::application::config::MonitorConfig;
use crate::domain::entities::snapshot::MetricsSnapshot;
use crate::domain::ports::collector::MetricsCollector;
use crate::domain::ports::sink::{log_sample, SampleSink};
use crate::domain::value_objects::health::HealthScore;
use crate::domain::value_objects::trend::TrendSet;

/// State carried across ticks, threaded explicitly through the loop.
///
/// Exactly the prior tick's snapshot and score — nothing else survives a
/// tick boundary. Destroyed when the loop exits.
#[derive(Debug, Default)]
pub struct LoopState {
    pub previous: Option<MetricsSnapshot>,
    pub previous_health: Option<HealthScore>,
    pub iterations: u64,
    /// Sink write failures so far; only the first is surfaced as an error.
    pub sink_errors: u64,
}

impl LoopState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Terminal states of the sampling loop.
///
/// `Running` is implicit — the loop keeps going until one of these is
/// reached. Interrupts transition here from any point of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    IterationLimit,
    RuntimeLimit,
    Interrupted,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IterationLimit => write!(f, "iteration limit reached"),
            Self::RuntimeLimit => write!(f, "runtime limit reached"),
            Self::Interrupted => write!(f, "interrupted by user"),
        }
    }
}

/// Everything one tick produced, handed to the reporters.
#[derive(Debug, Clone)]
pub struct TickReport {
    pub snapshot: MetricsSnapshot,
    pub health: HealthScore,
    /// `None` on the first tick — no previous reading to compare against.
    pub trends: Option<TrendSet>,
}

/// Orchestrates one tick: sample → score → trend, plus optional persistence.
///
/// The loop itself (cadence, stop conditions, interrupt) lives with the
/// presentation runner; this service owns the per-tick semantics and the
/// fail-open policy.
pub struct SamplerService<'a> {
    collector: &'a dyn MetricsCollector,
    sink: Option<&'a dyn SampleSink>,
    config: &'a MonitorConfig,
}

impl<'a> SamplerService<'a> {
    #[must_use]
    pub fn new(
        collector: &'a dyn MetricsCollector,
        sink: Option<&'a dyn SampleSink>,
        config: &'a MonitorConfig,
    ) -> Self {
        Self {
            collector,
            sink,
            config,
        }
    }

    /// Establish the CPU measurement baseline before the first tick.
    pub fn prime(&self) {
        self.collector.prime();
    }

    /// Run one tick: sample, score, classify trends, advance the state.
    ///
    /// Never fails: a metrics-read failure is mapped to a zeroed snapshot
    /// and a logged diagnostic, and the loop keeps running.
    pub fn run_once(&self, state: &mut LoopState) -> TickReport {
        let snapshot = match self.collector.sample(self.config.per_core) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Lecture des métriques échouée : {e}");
                MetricsSnapshot::zeroed()
            }
        };

        let health = HealthScore::compute(snapshot.cpu_pct, snapshot.mem_pct, snapshot.disk_pct);

        let trends = match (state.previous.as_ref(), state.previous_health) {
            (Some(previous), Some(previous_health)) => Some(TrendSet::between(
                &snapshot,
                health,
                previous,
                previous_health,
            )),
            _ => None,
        };

        state.previous = Some(snapshot.clone());
        state.previous_health = Some(health);
        state.iterations += 1;

        TickReport {
            snapshot,
            health,
            trends,
        }
    }

    /// Append the tick to the log sink, if logging is enabled.
    ///
    /// A sink failure is surfaced to the user once, demoted to a debug
    /// diagnostic afterwards, and never stops the loop.
    pub fn persist(&self, report: &TickReport, state: &mut LoopState) {
        let Some(sink) = self.sink else {
            return;
        };
        if let Err(e) = log_sample(sink, &report.snapshot, report.health) {
            if state.sink_errors == 0 {
                tracing::error!("Écriture du journal échouée : {e}");
            } else {
                tracing::debug!("Écriture du journal échouée : {e}");
            }
            state.sink_errors += 1;
        }
    }

    /// Evaluate the stop conditions, in order: iteration limit, then
    /// runtime limit. Called after each completed tick.
    #[must_use]
    pub fn stop_reason(&self, state: &LoopState, elapsed: Duration) -> Option<StopReason> {
        if let Some(max) = self.config.max_iterations {
            if state.iterations >= max {
                return Some(StopReason::IterationLimit);
            }
        }
        if let Some(max_runtime) = self.config.max_runtime_secs {
            if elapsed.as_secs_f64() >= max_runtime {
                return Some(StopReason::RuntimeLimit);
            }
        }
        None
    }
}
