//! Metrics collection and exposition.
//!
//! - [`descriptor`]: the static metric families and the [`Observation`] type
//! - [`translate`]: payload to observation mappings, one per resource
//! - [`SonarrCollector`]: runs one fetch-and-translate cycle per scrape
//! - [`prometheus`]: text format encoder

mod collector;
pub mod descriptor;
pub mod prometheus;
pub mod translate;

pub use collector::SonarrCollector;
pub use descriptor::{MetricDesc, MetricKind, Observation};
pub use translate::Translate;
