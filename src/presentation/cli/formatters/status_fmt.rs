use colored::Colorize;

use crate::domain::value_objects::health::HealthScore;
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::domain::value_objects::trend::{Favorability, Trend};

/// Paints a utilization reading red when it exceeds its display threshold.
#[must_use]
pub fn colorize_metric(value: f64, threshold: f64) -> String {
    let text = format!("{value:.1}");
    match Severity::for_metric(value, threshold) {
        Severity::Critical => text.red().bold().to_string(),
        Severity::Warning | Severity::Normal => text,
    }
}

/// Paints the health score by band: green good, yellow warning, red critical.
#[must_use]
pub fn colorize_health(score: HealthScore, thresholds: &ThresholdSet) -> String {
    let text = score.to_string();
    match Severity::for_health(score, thresholds) {
        Severity::Normal => text.green().to_string(),
        Severity::Warning => text.yellow().to_string(),
        Severity::Critical => text.red().bold().to_string(),
    }
}

/// Trend indicator glyph: favorable green, unfavorable red, flat yellow.
///
/// `None` means there is no previous tick to compare against — the arrow is
/// neutral and uncolored.
#[must_use]
pub fn trend_glyph(trend: Option<Trend>, positive_is_good: bool) -> String {
    let Some(trend) = trend else {
        return Trend::Flat.glyph().to_string();
    };
    let glyph = trend.glyph();
    match trend.favorability(positive_is_good) {
        Favorability::Favorable => glyph.green().to_string(),
        Favorability::Unfavorable => glyph.red().to_string(),
        Favorability::Neutral => glyph.yellow().to_string(),
    }
}
