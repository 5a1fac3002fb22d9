//! End-to-end analytical pipeline over one validated record batch.

use std::time::Instant;

use tracing::{debug, instrument};

use mindtrace_core::{
    ActivityRecord, DailyAggregate, IndicatorPercentages, Result, WellbeingSummary, WordFrequency,
};

use crate::{Aggregator, ChartAssembler, IndicatorExtractor, TopicFrequencyAnalyzer, WellbeingScorer};

/// The four analytical outputs computed from one batch. Handed to the chart
/// assembler and, serialized, to the recommendation orchestrator as context.
#[derive(Debug, Clone)]
pub struct AnalysisOutputs {
    pub daily: Vec<DailyAggregate>,
    pub indicators: IndicatorPercentages,
    pub topics: Vec<WordFrequency>,
    pub wellbeing: WellbeingSummary,
}

/// Runs the four independent leaf analyzers over a batch.
///
/// The leaves have no dependencies on each other and all read the same
/// record slice; chart assembly happens afterwards via [`ChartAssembler`].
pub struct AnalysisPipeline {
    aggregator: Aggregator,
    indicators: IndicatorExtractor,
    topics: TopicFrequencyAnalyzer,
    wellbeing: WellbeingScorer,
    pub assembler: ChartAssembler,
}

impl AnalysisPipeline {
    pub fn new(
        indicators: IndicatorExtractor,
        topics: TopicFrequencyAnalyzer,
    ) -> Self {
        Self {
            aggregator: Aggregator::new(),
            indicators,
            topics,
            wellbeing: WellbeingScorer::new(),
            assembler: ChartAssembler::new(),
        }
    }

    #[instrument(skip(self, records), fields(subsystem = "analysis", op = "process", record_count = records.len()))]
    pub fn process(&self, records: &[ActivityRecord]) -> Result<AnalysisOutputs> {
        let start = Instant::now();

        let daily = self.aggregator.aggregate_daily(records)?;
        let indicators = self.indicators.extract(records)?;
        let topics = self.topics.analyze(records);
        let wellbeing = self.wellbeing.score(records)?;

        debug!(
            duration_ms = start.elapsed().as_millis() as u64,
            day_count = daily.len(),
            "Analysis pipeline complete"
        );

        Ok(AnalysisOutputs {
            daily,
            indicators,
            topics,
            wellbeing,
        })
    }
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::new(IndicatorExtractor::default(), TopicFrequencyAnalyzer::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::record_with_text;
    use mindtrace_core::WellbeingStatus;

    #[test]
    fn test_pipeline_produces_all_four_outputs() {
        let records: Vec<_> = (0..5)
            .map(|_| record_with_text("I feel anxious and stressed about the deadline", ""))
            .collect();
        let outputs = AnalysisPipeline::default().process(&records).unwrap();

        assert_eq!(outputs.daily.len(), 1);
        assert_eq!(outputs.indicators.anxiety, 100.0);
        assert_eq!(outputs.indicators.stress, 100.0);
        assert_eq!(outputs.indicators.depression, 0.0);
        // "deadline" and "anxious" are vocabulary tokens, once per record;
        // "stressed" is not a vocabulary word and must not appear.
        assert!(outputs.topics.iter().any(|w| w.word == "deadline" && w.frequency == 5));
        assert!(outputs.topics.iter().any(|w| w.word == "anxious" && w.frequency == 5));
        assert!(!outputs.topics.iter().any(|w| w.word == "stressed"));
        assert_eq!(outputs.wellbeing.status, WellbeingStatus::Good);
    }

    #[test]
    fn test_pipeline_fails_on_empty_batch() {
        assert!(AnalysisPipeline::default().process(&[]).is_err());
    }
}
