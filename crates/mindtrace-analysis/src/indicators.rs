//! Mental-health indicator extraction.
//!
//! Scans each record's combined caption + hashtag text against per-category
//! trigger keyword sets and reports, per category, the percentage of records
//! that matched at least one trigger.
//!
//! Matching is case-insensitive **substring containment**, not tokenized
//! word matching: "stress" also matches "distressed". The documented output
//! numbers depend on this exact semantic; do not tighten it to word-boundary
//! matching.

use tracing::debug;

use mindtrace_core::{ActivityRecord, Error, IndicatorPercentages, Result};

/// Keyword configuration for the three indicator categories.
///
/// Injected into [`IndicatorExtractor`] so tests can substitute alternate
/// vocabularies. All triggers must be lowercase; input text is lowercased
/// before matching.
#[derive(Debug, Clone)]
pub struct IndicatorConfig {
    pub anxiety: Vec<String>,
    pub stress: Vec<String>,
    pub depression: Vec<String>,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        fn words(list: &[&str]) -> Vec<String> {
            list.iter().map(|w| w.to_string()).collect()
        }
        Self {
            anxiety: words(&[
                "anxiety",
                "worried",
                "nervous",
                "panic",
                "stress",
                "overwhelmed",
            ]),
            stress: words(&[
                "stressed",
                "pressure",
                "deadline",
                "overwhelmed",
                "burnout",
                "exhausted",
            ]),
            depression: words(&[
                "depressed",
                "sad",
                "down",
                "hopeless",
                "empty",
                "worthless",
            ]),
        }
    }
}

/// Computes category prevalence percentages across a record batch.
#[derive(Debug, Clone)]
pub struct IndicatorExtractor {
    config: IndicatorConfig,
}

impl IndicatorExtractor {
    pub fn new(config: IndicatorConfig) -> Self {
        Self { config }
    }

    /// Percentage of records whose combined text contains any trigger for
    /// each category. Categories are evaluated independently; one record can
    /// count toward several.
    pub fn extract(&self, records: &[ActivityRecord]) -> Result<IndicatorPercentages> {
        if records.is_empty() {
            return Err(Error::Processing(
                "cannot extract indicators from an empty record batch".to_string(),
            ));
        }

        let mut anxiety = 0usize;
        let mut stress = 0usize;
        let mut depression = 0usize;

        for record in records {
            let combined = format!(
                "{} {}",
                record.caption_text.to_lowercase(),
                record.hashtags.to_lowercase()
            );
            if contains_any(&combined, &self.config.anxiety) {
                anxiety += 1;
            }
            if contains_any(&combined, &self.config.stress) {
                stress += 1;
            }
            if contains_any(&combined, &self.config.depression) {
                depression += 1;
            }
        }

        let total = records.len() as f64;
        let percentages = IndicatorPercentages {
            anxiety: anxiety as f64 / total * 100.0,
            stress: stress as f64 / total * 100.0,
            depression: depression as f64 / total * 100.0,
        };

        debug!(
            record_count = records.len(),
            anxiety = percentages.anxiety,
            stress = percentages.stress,
            depression = percentages.depression,
            "Indicator extraction complete"
        );

        Ok(percentages)
    }
}

impl Default for IndicatorExtractor {
    fn default() -> Self {
        Self::new(IndicatorConfig::default())
    }
}

fn contains_any(text: &str, triggers: &[String]) -> bool {
    triggers.iter().any(|t| text.contains(t.as_str()))
}
