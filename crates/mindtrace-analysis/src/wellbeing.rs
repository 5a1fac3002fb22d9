//! Composite wellbeing scoring and status banding.

use tracing::debug;

use mindtrace_core::{ActivityRecord, Error, Result, WellbeingStatus, WellbeingSummary};

/// Computes batch-wide means of the three score fields and derives the
/// status band. Pure and deterministic; fails only on an empty batch, which
/// the request boundary excludes.
#[derive(Debug, Default)]
pub struct WellbeingScorer;

impl WellbeingScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, records: &[ActivityRecord]) -> Result<WellbeingSummary> {
        if records.is_empty() {
            return Err(Error::Processing(
                "cannot score an empty record batch".to_string(),
            ));
        }

        let n = records.len() as f64;
        let wellbeing_score = records.iter().map(|r| r.wellbeing_index).sum::<f64>() / n;
        let sentiment_score = records.iter().map(|r| r.sentiment_score).sum::<f64>() / n;
        let engagement_score = records.iter().map(|r| r.engagement_score).sum::<f64>() / n;
        let status = WellbeingStatus::from_score(wellbeing_score);

        debug!(
            record_count = records.len(),
            wellbeing_score,
            status = %status,
            "Wellbeing scoring complete"
        );

        Ok(WellbeingSummary {
            wellbeing_score,
            sentiment_score,
            engagement_score,
            status,
        })
    }
}
