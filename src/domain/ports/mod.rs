pub mod collector;
pub mod sink;

pub use collector::{CollectionError, MetricsCollector};
pub use sink::{log_sample, SampleSink, SinkError};
