use serde::{Deserialize, Serialize};

use crate::domain::value_objects::health::HealthScore;
use crate::domain::value_objects::thresholds::ThresholdSet;

/// Display severity of a single reading.
///
/// Pure classification — the rendering layer maps severities to visual
/// style, the domain never touches colors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Normal,
    Warning,
    Critical,
}

impl Severity {
    /// Classifies a utilization reading against its display threshold.
    ///
    /// Utilization flagging is binary: a reading strictly above the
    /// threshold is critical, anything else is normal.
    #[must_use]
    pub fn for_metric(value: f64, threshold: f64) -> Self {
        if value > threshold {
            Self::Critical
        } else {
            Self::Normal
        }
    }

    /// Classifies the health score into its three bands.
    #[must_use]
    pub fn for_health(score: HealthScore, thresholds: &ThresholdSet) -> Self {
        if score.value() > thresholds.health_good_above {
            Self::Normal
        } else if score.value() > thresholds.health_warn_above {
            Self::Warning
        } else {
            Self::Critical
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}
