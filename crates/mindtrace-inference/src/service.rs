//! Full analysis service: pipeline + chart assembly + recommendation
//! orchestration, with the boundary failure discipline.
//!
//! - Validation failures (batch empty or below the minimum) surface to the
//!   caller and are never silently recovered.
//! - Processing failures inside the pipeline are recovered by substituting
//!   the canonical fallback response.
//! - External-generation failures never reach this layer; the orchestrator
//!   recovers them internally.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, instrument, warn};

use mindtrace_analysis::AnalysisPipeline;
use mindtrace_core::defaults::MIN_BATCH_SIZE;
use mindtrace_core::{
    ActivityRecord, AnalysisRequest, AnalysisResponse, Error, GenerationBackend, Result,
};

use crate::{RecommendationOrchestrator, SyntheticDataGenerator};

/// Reject batches too small for a meaningful analysis.
pub fn validate_batch(records: &[ActivityRecord]) -> Result<()> {
    if records.is_empty() {
        return Err(Error::Validation("No data points provided".to_string()));
    }
    if records.len() < MIN_BATCH_SIZE {
        return Err(Error::Validation(format!(
            "At least {} data points required for meaningful analysis",
            MIN_BATCH_SIZE
        )));
    }
    Ok(())
}

/// Composes the analytical pipeline with the recommendation orchestrator
/// behind a shared generation backend.
pub struct AnalysisService {
    pipeline: AnalysisPipeline,
    orchestrator: RecommendationOrchestrator,
    synthetic: SyntheticDataGenerator,
}

impl AnalysisService {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            pipeline: AnalysisPipeline::default(),
            orchestrator: RecommendationOrchestrator::new(backend.clone()),
            synthetic: SyntheticDataGenerator::new(backend),
        }
    }

    /// Analyze one validated batch into the six-series response.
    ///
    /// Processing errors propagate; the caller decides whether to substitute
    /// the canonical fallback (the HTTP boundary does).
    #[instrument(skip(self, records), fields(subsystem = "api", component = "analysis_service", op = "analyze", record_count = records.len()))]
    pub async fn analyze(&self, records: &[ActivityRecord]) -> Result<AnalysisResponse> {
        let outputs = self.pipeline.process(records)?;
        let suggestions = self.orchestrator.recommendations(&outputs).await;

        let assembler = &self.pipeline.assembler;
        Ok(AnalysisResponse {
            emotional_trend: assembler.emotional_trend(&outputs.daily),
            mental_health_categories: assembler.mental_health_categories(&outputs.indicators),
            engagement_vs_mood: assembler.engagement_vs_mood(records),
            topics_discussed: assembler.topics_discussed(&outputs.topics),
            wellbeing_index: assembler.wellbeing_index(&outputs.wellbeing),
            recommendations: assembler.recommendations(&suggestions),
        })
    }

    /// Analyze with boundary recovery: any processing error is logged and
    /// replaced by the canonical fallback response.
    pub async fn analyze_or_fallback(&self, records: &[ActivityRecord]) -> AnalysisResponse {
        match self.analyze(records).await {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    error = %e,
                    fallback = true,
                    "Analysis failed, returning canonical fallback response"
                );
                AnalysisResponse::canonical_fallback()
            }
        }
    }

    /// Analyze several independent datasets sequentially.
    ///
    /// Failures are isolated per dataset: a failing dataset (validation or
    /// processing) yields the canonical fallback in its slot and processing
    /// continues with the next one.
    #[instrument(skip(self, requests), fields(subsystem = "api", component = "analysis_service", op = "analyze_batch", dataset_count = requests.len()))]
    pub async fn analyze_batch(&self, requests: &[AnalysisRequest]) -> Vec<AnalysisResponse> {
        let mut results = Vec::with_capacity(requests.len());
        for (i, request) in requests.iter().enumerate() {
            let result = match validate_batch(&request.data_points) {
                Ok(()) => self.analyze_or_fallback(&request.data_points).await,
                Err(e) => {
                    warn!(
                        dataset = i,
                        error = %e,
                        fallback = true,
                        "Dataset rejected, returning canonical fallback response"
                    );
                    AnalysisResponse::canonical_fallback()
                }
            };
            results.push(result);
        }
        info!(dataset_count = requests.len(), "Batch analysis complete");
        results
    }

    /// Generate synthetic sample records (Flow B), seeding the fallback
    /// randomness from entropy.
    pub async fn generate_sample(
        &self,
        num_posts: usize,
        period_days: i64,
    ) -> Vec<ActivityRecord> {
        let mut rng = StdRng::from_entropy();
        self.synthetic.generate(&mut rng, num_posts, period_days).await
    }
}
