//! Chart assembly: reshapes the analytical outputs into the fixed set of
//! typed chart series the presentation layer consumes.
//!
//! The kind/title mapping is part of the external contract:
//!
//! | Analytical input | Kind | Title |
//! |---|---|---|
//! | Daily aggregates | line | "Daily Sentiment Over Time" |
//! | Indicator percentages | pie | "Distribution of Anxiety/Stress/Depression Indicators" |
//! | First 5 raw records | scatter | "Engagement vs Mood" |
//! | Word frequencies | word_cloud | "Top Stress-Related Words" |
//! | Wellbeing summary | gauge | "Overall Wellbeing Score" |
//! | (orchestrator output) | text_cards | "Personalized Suggestions" |
//!
//! All floating-point chart values are rounded to one decimal place before
//! packaging.
//!
//! Known limitation: the scatter series is not an aggregate or representative
//! sample. It exposes likes/comments/sentiment of the **first five records in
//! batch order**, and downstream consumers rely on exactly that.

use mindtrace_core::defaults::SCATTER_SAMPLE_SIZE;
use mindtrace_core::{
    ActivityRecord, ChartKind, ChartPoint, ChartSeries, DailyAggregate, GaugeRange,
    IndicatorPercentages, WellbeingSummary, WordFrequency,
};

/// Round to one decimal place, the presentation-layer precision.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Builds the five analytical chart series plus the empty recommendations
/// placeholder.
#[derive(Debug, Default)]
pub struct ChartAssembler;

impl ChartAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Line series of daily mean sentiment.
    pub fn emotional_trend(&self, daily: &[DailyAggregate]) -> ChartSeries {
        let data = daily
            .iter()
            .map(|day| ChartPoint::trend(day.date.to_string(), round1(day.sentiment_score)))
            .collect();
        ChartSeries::new(ChartKind::Line, "Daily Sentiment Over Time", data)
    }

    /// Pie series of indicator category percentages.
    pub fn mental_health_categories(&self, indicators: &IndicatorPercentages) -> ChartSeries {
        let data = vec![
            ChartPoint::category("Anxiety", round1(indicators.anxiety)),
            ChartPoint::category("Stress", round1(indicators.stress)),
            ChartPoint::category("Depression", round1(indicators.depression)),
        ];
        ChartSeries::new(
            ChartKind::Pie,
            "Distribution of Anxiety/Stress/Depression Indicators",
            data,
        )
    }

    /// Scatter series over the first five records in batch order.
    pub fn engagement_vs_mood(&self, records: &[ActivityRecord]) -> ChartSeries {
        let data = records
            .iter()
            .take(SCATTER_SAMPLE_SIZE)
            .map(|r| ChartPoint::scatter(r.likes_count, r.comments_count, round1(r.sentiment_score)))
            .collect();
        ChartSeries::new(ChartKind::Scatter, "Engagement vs Mood", data)
    }

    /// Word-cloud series of the ranked stress vocabulary.
    pub fn topics_discussed(&self, words: &[WordFrequency]) -> ChartSeries {
        let data = words
            .iter()
            .map(|w| ChartPoint::word(w.word.clone(), w.frequency))
            .collect();
        ChartSeries::new(ChartKind::WordCloud, "Top Stress-Related Words", data)
    }

    /// Gauge series for the composite wellbeing score, fixed [0, 100] range.
    pub fn wellbeing_index(&self, summary: &WellbeingSummary) -> ChartSeries {
        ChartSeries::gauge(
            "Overall Wellbeing Score",
            round1(summary.wellbeing_score),
            GaugeRange {
                min: 0.0,
                max: 100.0,
            },
            summary.status.as_str(),
        )
    }

    /// Empty text-cards series; the recommendation orchestrator fills it in.
    pub fn recommendations_placeholder(&self) -> ChartSeries {
        ChartSeries::new(ChartKind::TextCards, "Personalized Suggestions", Vec::new())
    }

    /// Text-cards series from an ordered suggestion list (1-based card ids).
    pub fn recommendations(&self, suggestions: &[String]) -> ChartSeries {
        let data = suggestions
            .iter()
            .enumerate()
            .map(|(i, text)| ChartPoint::card(i as u32 + 1, text.clone()))
            .collect();
        ChartSeries::new(ChartKind::TextCards, "Personalized Suggestions", data)
    }
}
