//! Topic/word frequency analysis over a fixed stress vocabulary.
//!
//! Tokenization is deliberately simple: lowercase the combined caption +
//! hashtag text, replace every character that is not alphanumeric or
//! whitespace with a space, split on whitespace. Counts accumulate across
//! the whole batch, then only vocabulary words that appeared at least once
//! are ranked.

use std::collections::HashMap;

use tracing::debug;

use mindtrace_core::defaults::TOP_WORD_COUNT;
use mindtrace_core::{ActivityRecord, WordFrequency};

/// Default stress-related vocabulary. Order matters: frequency ties are
/// broken by position in this list (stable sort).
pub const DEFAULT_STRESS_VOCABULARY: [&str; 14] = [
    "workload",
    "deadline",
    "sleep",
    "balance",
    "family",
    "exercise",
    "burnout",
    "pressure",
    "stress",
    "tired",
    "overwhelmed",
    "anxious",
    "worried",
    "exhausted",
];

/// Ranks vocabulary words by batch-wide token frequency.
#[derive(Debug, Clone)]
pub struct TopicFrequencyAnalyzer {
    vocabulary: Vec<String>,
}

impl TopicFrequencyAnalyzer {
    /// Create an analyzer with an injected vocabulary (list order is the
    /// tie-break order).
    pub fn new(vocabulary: Vec<String>) -> Self {
        Self { vocabulary }
    }

    /// Top-ranked vocabulary words as (word, frequency) pairs, sorted
    /// descending by frequency with ties preserving vocabulary order,
    /// truncated to at most 7 entries. Words that never appear are dropped,
    /// never padded.
    pub fn analyze(&self, records: &[ActivityRecord]) -> Vec<WordFrequency> {
        let mut counts: HashMap<&str, u64> = HashMap::new();
        for record in records {
            let combined = format!("{} {}", record.caption_text, record.hashtags);
            for token in tokenize(&combined) {
                if let Some(word) = self.vocabulary.iter().find(|w| w.as_str() == token) {
                    *counts.entry(word.as_str()).or_insert(0) += 1;
                }
            }
        }

        // Walk the vocabulary in order so the stable sort below keeps
        // vocabulary position as the tie-break.
        let mut ranked: Vec<WordFrequency> = self
            .vocabulary
            .iter()
            .filter_map(|word| {
                counts.get(word.as_str()).map(|&frequency| WordFrequency {
                    word: word.clone(),
                    frequency,
                })
            })
            .collect();
        ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        ranked.truncate(TOP_WORD_COUNT);

        debug!(
            record_count = records.len(),
            matched_words = ranked.len(),
            "Topic frequency analysis complete"
        );

        ranked
    }
}

impl Default for TopicFrequencyAnalyzer {
    fn default() -> Self {
        Self::new(
            DEFAULT_STRESS_VOCABULARY
                .iter()
                .map(|w| w.to_string())
                .collect(),
        )
    }
}

/// Lowercase, strip punctuation to spaces, split on whitespace.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::record_with_text;

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(
            tokenize("Deadline!! #stress, (tired)"),
            vec!["deadline", "stress", "tired"]
        );
    }

    #[test]
    fn test_counts_across_batch() {
        let records = vec![
            record_with_text("deadline deadline stress", ""),
            record_with_text("another deadline today", "#stress"),
        ];
        let ranked = TopicFrequencyAnalyzer::default().analyze(&records);
        assert_eq!(ranked[0], WordFrequency { word: "deadline".to_string(), frequency: 3 });
        assert_eq!(ranked[1], WordFrequency { word: "stress".to_string(), frequency: 2 });
    }

    #[test]
    fn test_only_vocabulary_words_returned() {
        let records = vec![record_with_text("banana deadline spaghetti", "")];
        let ranked = TopicFrequencyAnalyzer::default().analyze(&records);
        assert_eq!(ranked.len(), 1);
        assert!(DEFAULT_STRESS_VOCABULARY.contains(&ranked[0].word.as_str()));
    }

    #[test]
    fn test_never_more_than_seven() {
        let caption = DEFAULT_STRESS_VOCABULARY.join(" ");
        let records = vec![record_with_text(&caption, "")];
        let ranked = TopicFrequencyAnalyzer::default().analyze(&records);
        assert_eq!(ranked.len(), 7);
    }

    #[test]
    fn test_ties_broken_by_vocabulary_order() {
        // All 14 words appear exactly once; the top 7 must be the first 7
        // vocabulary entries in list order.
        let caption = DEFAULT_STRESS_VOCABULARY.join(" ");
        let records = vec![record_with_text(&caption, "")];
        let ranked = TopicFrequencyAnalyzer::default().analyze(&records);
        let expected: Vec<&str> = DEFAULT_STRESS_VOCABULARY[..7].to_vec();
        let got: Vec<&str> = ranked.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_higher_frequency_outranks_vocabulary_order() {
        let records = vec![record_with_text("exhausted exhausted workload", "")];
        let ranked = TopicFrequencyAnalyzer::default().analyze(&records);
        assert_eq!(ranked[0].word, "exhausted");
        assert_eq!(ranked[0].frequency, 2);
        assert_eq!(ranked[1].word, "workload");
    }

    #[test]
    fn test_fewer_than_seven_never_pads() {
        let records = vec![record_with_text("sleep balance", "")];
        let ranked = TopicFrequencyAnalyzer::default().analyze(&records);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_no_matches_returns_empty() {
        let records = vec![record_with_text("sunny picnic afternoon", "#weekend")];
        let ranked = TopicFrequencyAnalyzer::default().analyze(&records);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_injected_vocabulary() {
        let analyzer = TopicFrequencyAnalyzer::new(vec!["picnic".to_string()]);
        let records = vec![record_with_text("sunny picnic afternoon", "")];
        let ranked = analyzer.analyze(&records);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].word, "picnic");
    }

    #[test]
    fn test_substring_tokens_do_not_count() {
        // Tokenized matching here, unlike indicator extraction: "deadlines"
        // is a different token from "deadline".
        let records = vec![record_with_text("deadlines", "")];
        let ranked = TopicFrequencyAnalyzer::default().analyze(&records);
        assert!(ranked.is_empty());
    }
}
