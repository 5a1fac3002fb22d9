//! Personalized recommendation orchestration (with deterministic fallback).
//!
//! One external generation call per request, no retry. The response must
//! parse as a JSON array of at least four strings; it is then truncated to
//! exactly four. Anything else — call failure, malformed JSON, a short list —
//! lands on the fixed fallback list, always in the same order.

use std::sync::Arc;

use tracing::instrument;

use mindtrace_analysis::AnalysisOutputs;
use mindtrace_core::defaults::RECOMMENDATION_COUNT;
use mindtrace_core::{Error, GenerationBackend, Result};

use crate::fallback::best_effort;

/// The deterministic substitute suggestions. Order is part of the contract.
pub const FALLBACK_RECOMMENDATIONS: [&str; 4] = [
    "Try a 10-minute mindfulness meditation before starting your day.",
    "Take a short walk after lunch to reduce mid-day stress.",
    "Limit late-night screen time to improve sleep quality.",
    "Reach out to a friend or colleague for social connection.",
];

const SYSTEM_PROMPT: &str = "You are a mental health AI assistant specializing in social media \
and digital wellness analysis. Based on the provided data about a user's social media posts, \
engagement patterns, and wellbeing metrics, generate 4 personalized, actionable recommendations \
to improve their mental health and digital wellness. Focus on practical suggestions, digital \
wellness and screen time management, mental health improvement strategies, and social \
connection. Keep recommendations concise (1-2 sentences each) and encouraging in tone.";

/// Calls the external generator for personalized suggestions, validating and
/// truncating its output, with the fixed fallback list on any failure.
pub struct RecommendationOrchestrator {
    backend: Arc<dyn GenerationBackend>,
}

impl RecommendationOrchestrator {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Produce exactly four suggestion strings for the analyzed batch.
    ///
    /// Never fails: any external-service error is recovered locally.
    #[instrument(skip(self, outputs), fields(subsystem = "inference", component = "recommend", op = "recommendations", model = %self.backend.model_name()))]
    pub async fn recommendations(&self, outputs: &AnalysisOutputs) -> Vec<String> {
        let context = build_context(outputs);
        let prompt = format!(
            "Please analyze this mental health data and provide 4 personalized \
             recommendations:\n\n{}\n\nReturn only the recommendations as a JSON array of \
             strings, no additional text. Example format: [\"Recommendation 1\", \
             \"Recommendation 2\", \"Recommendation 3\", \"Recommendation 4\"]",
            context
        );

        best_effort(
            "recommendations",
            self.backend.generate_with_system(SYSTEM_PROMPT, &prompt),
            parse_recommendations,
            fallback_recommendations,
        )
        .await
    }
}

/// The deterministic fallback list as owned strings.
pub fn fallback_recommendations() -> Vec<String> {
    FALLBACK_RECOMMENDATIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Accept a JSON array of at least four strings, truncated to exactly four.
fn parse_recommendations(raw: &str) -> Result<Vec<String>> {
    let mut items: Vec<String> = serde_json::from_str(raw.trim())?;
    if items.len() < RECOMMENDATION_COUNT {
        return Err(Error::Generation(format!(
            "expected at least {} recommendations, got {}",
            RECOMMENDATION_COUNT,
            items.len()
        )));
    }
    items.truncate(RECOMMENDATION_COUNT);
    Ok(items)
}

/// Serialize the analytical outputs into a descriptive payload for the
/// generator.
fn build_context(outputs: &AnalysisOutputs) -> String {
    let daily = serde_json::to_string_pretty(&outputs.daily).unwrap_or_default();
    let indicators = serde_json::to_string_pretty(&outputs.indicators).unwrap_or_default();
    let topics = serde_json::to_string_pretty(&outputs.topics).unwrap_or_default();
    let wellbeing = &outputs.wellbeing;

    format!(
        "Mental Health Analysis Context:\n\n\
         Daily Sentiment Trends:\n{daily}\n\n\
         Mental Health Category Distribution:\n{indicators}\n\n\
         Wellbeing Metrics:\n\
         - Overall Wellbeing Score: {:.1}/100\n\
         - Average Sentiment: {:.1}/100\n\
         - Engagement Score: {:.1}/100\n\
         - Status: {}\n\n\
         Top Stress-Related Topics:\n{topics}\n\n\
         Analysis Period: {} days",
        wellbeing.wellbeing_score,
        wellbeing.sentiment_score,
        wellbeing.engagement_score,
        wellbeing.status,
        outputs.daily.len(),
    )
}
