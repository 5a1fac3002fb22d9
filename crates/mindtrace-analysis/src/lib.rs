//! # mindtrace-analysis
//!
//! The aggregation and indicator-extraction pipeline: turns raw per-post
//! activity records into daily rollups, mental-health-signal percentages,
//! topic/word frequency rankings, and a composite wellbeing score, then
//! packages everything into chart-ready series.
//!
//! The four leaf components ([`Aggregator`], [`IndicatorExtractor`],
//! [`TopicFrequencyAnalyzer`], [`WellbeingScorer`]) are independent of each
//! other and all read the same validated record batch. [`ChartAssembler`]
//! reshapes their outputs; [`AnalysisPipeline`] wires the whole thing
//! together. Everything here is pure and synchronous.

pub mod aggregate;
pub mod charts;
pub mod indicators;
pub mod pipeline;
pub mod topics;
pub mod wellbeing;

#[cfg(test)]
mod test_util;

pub use aggregate::Aggregator;
pub use charts::ChartAssembler;
pub use indicators::{IndicatorConfig, IndicatorExtractor};
pub use pipeline::{AnalysisOutputs, AnalysisPipeline};
pub use topics::TopicFrequencyAnalyzer;
pub use wellbeing::WellbeingScorer;
