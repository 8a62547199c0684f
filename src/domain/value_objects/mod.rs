pub mod health;
pub mod severity;
pub mod thresholds;
pub mod trend;

pub use health::HealthScore;
pub use severity::Severity;
pub use thresholds::ThresholdSet;
pub use trend::{Trend, TrendSet};
