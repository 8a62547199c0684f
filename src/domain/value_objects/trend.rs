use serde::{Deserialize, Serialize};

use crate::domain::entities::snapshot::MetricsSnapshot;
use crate::domain::value_objects::health::HealthScore;

/// Differences smaller than this band are classified as flat, so measurement
/// noise between two ticks does not flip the direction indicator.
pub const FLAT_BAND: f64 = 0.5;

/// Directional classification between two consecutive readings of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Rising,
    Falling,
    Flat,
}

/// Whether a trend direction is good news for the metric it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Favorability {
    Favorable,
    Unfavorable,
    Neutral,
}

impl Trend {
    /// Classifies the direction of `current` relative to `previous`.
    ///
    /// The first tick has no previous reading and classifies as `Flat`.
    #[must_use]
    pub fn classify(current: f64, previous: Option<f64>) -> Self {
        let Some(previous) = previous else {
            return Self::Flat;
        };
        let diff = current - previous;
        if diff.abs() < FLAT_BAND {
            Self::Flat
        } else if diff > 0.0 {
            Self::Rising
        } else {
            Self::Falling
        }
    }

    /// Indicator glyph used by the table renderer.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Rising => "↑",
            Self::Falling => "↓",
            Self::Flat => "→",
        }
    }

    /// Interprets the direction for a metric where higher values are better
    /// (`positive_is_good = true`, the health score) or worse (`false`, the
    /// raw utilization metrics).
    #[must_use]
    pub const fn favorability(self, positive_is_good: bool) -> Favorability {
        match (self, positive_is_good) {
            (Self::Flat, _) => Favorability::Neutral,
            (Self::Rising, true) | (Self::Falling, false) => Favorability::Favorable,
            (Self::Rising, false) | (Self::Falling, true) => Favorability::Unfavorable,
        }
    }
}

/// Trends and raw deltas for one tick relative to the previous one.
///
/// Only exists from the second tick onward; the loop passes `None` on the
/// first tick and the reporters fall back to neutral indicators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendSet {
    pub cpu: Trend,
    pub mem: Trend,
    pub disk: Trend,
    pub health: Trend,
    pub cpu_delta: f64,
    pub mem_delta: f64,
    pub disk_delta: f64,
    pub health_delta: f64,
}

impl TrendSet {
    /// Computes per-metric trends between two consecutive ticks.
    #[must_use]
    pub fn between(
        current: &MetricsSnapshot,
        health: HealthScore,
        previous: &MetricsSnapshot,
        previous_health: HealthScore,
    ) -> Self {
        Self {
            cpu: Trend::classify(current.cpu_pct, Some(previous.cpu_pct)),
            mem: Trend::classify(current.mem_pct, Some(previous.mem_pct)),
            disk: Trend::classify(current.disk_pct, Some(previous.disk_pct)),
            health: Trend::classify(health.value(), Some(previous_health.value())),
            cpu_delta: current.cpu_pct - previous.cpu_pct,
            mem_delta: current.mem_pct - previous.mem_pct,
            disk_delta: current.disk_pct - previous.disk_pct,
            health_delta: health.value() - previous_health.value(),
        }
    }
}
