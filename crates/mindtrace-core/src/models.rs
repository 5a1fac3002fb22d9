//! Data model for the mindtrace analysis pipeline.
//!
//! Three layers of types live here:
//!
//! 1. **Input**: [`ActivityRecord`] (one social-media post/interaction event
//!    with pre-computed sentiment/engagement/wellbeing scores) and
//!    [`AnalysisRequest`].
//! 2. **Derived analytics**: [`DailyAggregate`], [`IndicatorPercentages`],
//!    [`WordFrequency`], [`WellbeingSummary`]. All request-scoped values,
//!    created fresh per analysis and never mutated after construction.
//! 3. **Presentation**: [`ChartSeries`] / [`ChartPoint`] and the six-series
//!    [`AnalysisResponse`] consumed by the UI.
//!
//! Every numeric "score" field is interpreted on a 0–100 scale; the pipeline
//! never re-normalizes input scores.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// INPUT RECORDS
// =============================================================================

/// One social-media post/interaction event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub post_id: String,
    pub user_id: String,
    /// Absolute point in time; the calendar date component drives daily
    /// aggregation.
    pub timestamp: DateTime<Utc>,
    pub day_of_week: String,
    pub time_of_day: String,
    pub caption_text: String,
    pub hashtags: String,
    pub image_context_label: String,
    /// Pre-computed sentiment, 0–100.
    pub sentiment_score: f64,
    pub emotion_primary: String,
    pub emotion_confidence: f64,
    pub topic_cluster: String,
    pub text_length: i64,
    pub likes_count: i64,
    pub comments_count: i64,
    pub shares_count: i64,
    pub saved_count: i64,
    pub average_comment_sentiment: f64,
    /// Pre-computed engagement, 0–100.
    pub engagement_score: f64,
    /// Seconds spent viewing the post.
    pub time_spent_on_post: i64,
    pub comments_read_count: i64,
    pub scrolled_back: bool,
    pub interaction_type: String,
    pub num_sessions_per_day: i64,
    /// Minutes.
    pub avg_session_duration: f64,
    pub night_usage_minutes: i64,
    pub label_mental_state: String,
    pub label_confidence: f64,
    /// Pre-computed wellbeing index, 0–100.
    pub wellbeing_index: f64,
    pub recommendation_flag: bool,
}

fn default_analysis_period_days() -> i64 {
    crate::defaults::ANALYSIS_PERIOD_DAYS
}

/// Request body for a single-dataset analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub data_points: Vec<ActivityRecord>,
    #[serde(default = "default_analysis_period_days")]
    pub analysis_period_days: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_preferences: Option<serde_json::Value>,
}

// =============================================================================
// DERIVED ANALYTICS
// =============================================================================

/// One calendar date's rollup: means over the score fields, sums over the
/// count fields. Ordered ascending by date in pipeline output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub sentiment_score: f64,
    pub engagement_score: f64,
    pub wellbeing_index: f64,
    pub likes_count: i64,
    pub comments_count: i64,
    pub shares_count: i64,
    pub time_spent_on_post: i64,
    pub night_usage_minutes: i64,
}

/// Share of the record batch whose combined text matched each mental-health
/// category's keyword set, as percentages in [0, 100].
///
/// Categories are evaluated independently; a record can count toward zero,
/// one, or all three at once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPercentages {
    pub anxiety: f64,
    pub stress: f64,
    pub depression: f64,
}

/// One ranked vocabulary word with its batch-wide occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub frequency: u64,
}

/// Discrete wellbeing status band derived from the mean wellbeing index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WellbeingStatus {
    Excellent,
    Good,
    Stable,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
}

impl WellbeingStatus {
    /// Map a mean wellbeing index to its status band.
    ///
    /// Threshold ladder, first match wins: ≥80 Excellent, ≥60 Good,
    /// ≥40 Stable, otherwise Needs Attention.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Stable
        } else {
            Self::NeedsAttention
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Stable => "Stable",
            Self::NeedsAttention => "Needs Attention",
        }
    }
}

impl std::fmt::Display for WellbeingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Batch-wide composite: means of the three score fields plus the derived
/// status band. Computed once per batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellbeingSummary {
    pub wellbeing_score: f64,
    pub sentiment_score: f64,
    pub engagement_score: f64,
    pub status: WellbeingStatus,
}

// =============================================================================
// CHART SERIES (presentation layer)
// =============================================================================

/// Chart kind tag. The analytical-output → kind mapping is fixed and part of
/// the external contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Pie,
    Scatter,
    WordCloud,
    Gauge,
    TextCards,
}

/// Generic chart point. Each chart kind populates only the fields relevant
/// to it; the rest stay `None` and are omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotional_tone: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ChartPoint {
    /// Line-chart point: date plus rounded daily mean sentiment.
    pub fn trend(date: impl Into<String>, sentiment_score: f64) -> Self {
        Self {
            date: Some(date.into()),
            sentiment_score: Some(sentiment_score),
            ..Default::default()
        }
    }

    /// Pie-chart point: category name plus percentage share.
    pub fn category(category: impl Into<String>, percentage: f64) -> Self {
        Self {
            category: Some(category.into()),
            percentage: Some(percentage),
            ..Default::default()
        }
    }

    /// Scatter point: per-post likes/comments against sentiment.
    pub fn scatter(likes: i64, comments: i64, emotional_tone: f64) -> Self {
        Self {
            likes: Some(likes),
            comments: Some(comments),
            emotional_tone: Some(emotional_tone),
            ..Default::default()
        }
    }

    /// Word-cloud point: vocabulary word plus occurrence count.
    pub fn word(word: impl Into<String>, frequency: u64) -> Self {
        Self {
            word: Some(word.into()),
            frequency: Some(frequency),
            ..Default::default()
        }
    }

    /// Text-card point: 1-based card id plus suggestion text.
    pub fn card(id: u32, text: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

/// Numeric range displayed by the gauge chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeRange {
    pub min: f64,
    pub max: f64,
}

/// A typed, titled, ordered collection of presentation points.
///
/// `value`, `range`, and `status` are only populated by the gauge kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub chart_type: ChartKind,
    pub title: String,
    pub data: Vec<ChartPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<GaugeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ChartSeries {
    pub fn new(chart_type: ChartKind, title: impl Into<String>, data: Vec<ChartPoint>) -> Self {
        Self {
            chart_type,
            title: title.into(),
            data,
            value: None,
            range: None,
            status: None,
        }
    }

    /// Gauge series carrying a scalar value, a fixed range, and a status band.
    pub fn gauge(
        title: impl Into<String>,
        value: f64,
        range: GaugeRange,
        status: impl Into<String>,
    ) -> Self {
        Self {
            chart_type: ChartKind::Gauge,
            title: title.into(),
            data: Vec::new(),
            value: Some(value),
            range: Some(range),
            status: Some(status.into()),
        }
    }
}

/// Full analysis response: exactly six named chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub emotional_trend: ChartSeries,
    pub mental_health_categories: ChartSeries,
    pub engagement_vs_mood: ChartSeries,
    pub topics_discussed: ChartSeries,
    pub wellbeing_index: ChartSeries,
    pub recommendations: ChartSeries,
}

impl AnalysisResponse {
    /// The canonical fallback response substituted at the request boundary
    /// when analysis fails. Literal values are part of the external contract
    /// and must not drift.
    pub fn canonical_fallback() -> Self {
        Self {
            emotional_trend: ChartSeries::new(
                ChartKind::Line,
                "Daily Sentiment Over Time",
                vec![
                    ChartPoint::trend("2025-01-15", 65.0),
                    ChartPoint::trend("2025-01-16", 72.0),
                    ChartPoint::trend("2025-01-17", 58.0),
                    ChartPoint::trend("2025-01-18", 81.0),
                    ChartPoint::trend("2025-01-19", 69.0),
                    ChartPoint::trend("2025-01-20", 75.0),
                    ChartPoint::trend("2025-01-21", 83.0),
                ],
            ),
            mental_health_categories: ChartSeries::new(
                ChartKind::Pie,
                "Distribution of Anxiety/Stress/Depression Indicators",
                vec![
                    ChartPoint::category("Anxiety", 35.0),
                    ChartPoint::category("Stress", 45.0),
                    ChartPoint::category("Depression", 20.0),
                ],
            ),
            engagement_vs_mood: ChartSeries::new(
                ChartKind::Scatter,
                "Engagement vs Mood",
                vec![
                    ChartPoint::scatter(12, 3, 65.0),
                    ChartPoint::scatter(25, 7, 72.0),
                    ChartPoint::scatter(8, 1, 58.0),
                    ChartPoint::scatter(35, 9, 81.0),
                    ChartPoint::scatter(18, 4, 69.0),
                ],
            ),
            topics_discussed: ChartSeries::new(
                ChartKind::WordCloud,
                "Top Stress-Related Words",
                vec![
                    ChartPoint::word("workload", 42),
                    ChartPoint::word("deadline", 37),
                    ChartPoint::word("sleep", 30),
                    ChartPoint::word("balance", 25),
                    ChartPoint::word("family", 21),
                    ChartPoint::word("exercise", 18),
                    ChartPoint::word("burnout", 14),
                ],
            ),
            wellbeing_index: ChartSeries::gauge(
                "Overall Wellbeing Score",
                76.0,
                GaugeRange {
                    min: 0.0,
                    max: 100.0,
                },
                "Stable",
            ),
            recommendations: ChartSeries::new(
                ChartKind::TextCards,
                "Personalized Suggestions",
                vec![
                    ChartPoint::card(
                        1,
                        "Try a 10-minute mindfulness meditation before starting your day.",
                    ),
                    ChartPoint::card(2, "Take a short walk after lunch to reduce mid-day stress."),
                    ChartPoint::card(3, "Limit late-night screen time to improve sleep quality."),
                    ChartPoint::card(
                        4,
                        "Reach out to a friend or colleague for social connection.",
                    ),
                ],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_threshold_ladder() {
        assert_eq!(WellbeingStatus::from_score(80.0), WellbeingStatus::Excellent);
        assert_eq!(WellbeingStatus::from_score(79.99), WellbeingStatus::Good);
        assert_eq!(WellbeingStatus::from_score(60.0), WellbeingStatus::Good);
        assert_eq!(WellbeingStatus::from_score(59.99), WellbeingStatus::Stable);
        assert_eq!(WellbeingStatus::from_score(40.0), WellbeingStatus::Stable);
        assert_eq!(
            WellbeingStatus::from_score(39.99),
            WellbeingStatus::NeedsAttention
        );
        assert_eq!(WellbeingStatus::from_score(100.0), WellbeingStatus::Excellent);
        assert_eq!(WellbeingStatus::from_score(0.0), WellbeingStatus::NeedsAttention);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(WellbeingStatus::Excellent.to_string(), "Excellent");
        assert_eq!(WellbeingStatus::NeedsAttention.to_string(), "Needs Attention");
    }

    #[test]
    fn test_chart_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&ChartKind::WordCloud).unwrap(),
            "\"word_cloud\""
        );
        assert_eq!(
            serde_json::to_string(&ChartKind::TextCards).unwrap(),
            "\"text_cards\""
        );
        assert_eq!(serde_json::to_string(&ChartKind::Line).unwrap(), "\"line\"");
    }

    #[test]
    fn test_chart_point_omits_unused_fields() {
        let point = ChartPoint::category("Anxiety", 35.0);
        let json = serde_json::to_value(&point).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["category"], "Anxiety");
        assert_eq!(obj["percentage"], 35.0);
    }

    #[test]
    fn test_canonical_fallback_shape() {
        let fallback = AnalysisResponse::canonical_fallback();
        assert_eq!(fallback.emotional_trend.data.len(), 7);
        assert_eq!(fallback.mental_health_categories.data.len(), 3);
        assert_eq!(fallback.engagement_vs_mood.data.len(), 5);
        assert_eq!(fallback.topics_discussed.data.len(), 7);
        assert_eq!(fallback.wellbeing_index.value, Some(76.0));
        assert_eq!(fallback.wellbeing_index.status.as_deref(), Some("Stable"));
        assert_eq!(fallback.recommendations.data.len(), 4);
        assert_eq!(fallback.recommendations.chart_type, ChartKind::TextCards);
    }

    #[test]
    fn test_canonical_fallback_serializes_round_trip() {
        let fallback = AnalysisResponse::canonical_fallback();
        let json = serde_json::to_string(&fallback).unwrap();
        let back: AnalysisResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fallback);
    }

    #[test]
    fn test_activity_record_deserializes_input_schema() {
        let json = serde_json::json!({
            "post_id": "post_001",
            "user_id": "user_123",
            "timestamp": "2025-01-15T10:30:00Z",
            "day_of_week": "Wednesday",
            "time_of_day": "morning",
            "caption_text": "Feeling overwhelmed with work today",
            "hashtags": "#work #stress",
            "image_context_label": "office_desk",
            "sentiment_score": 65.0,
            "emotion_primary": "mixed",
            "emotion_confidence": 0.8,
            "topic_cluster": "work_stress",
            "text_length": 35,
            "likes_count": 12,
            "comments_count": 3,
            "shares_count": 1,
            "saved_count": 2,
            "average_comment_sentiment": 70.0,
            "engagement_score": 75.0,
            "time_spent_on_post": 45,
            "comments_read_count": 3,
            "scrolled_back": false,
            "interaction_type": "post_creation",
            "num_sessions_per_day": 8,
            "avg_session_duration": 12.5,
            "night_usage_minutes": 30,
            "label_mental_state": "stressed",
            "label_confidence": 0.85,
            "wellbeing_index": 68.0,
            "recommendation_flag": true
        });
        let record: ActivityRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.post_id, "post_001");
        assert_eq!(record.timestamp.date_naive().to_string(), "2025-01-15");
        assert_eq!(record.sentiment_score, 65.0);
    }

    #[test]
    fn test_analysis_request_default_period() {
        let json = serde_json::json!({ "data_points": [] });
        let request: AnalysisRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.analysis_period_days, 7);
        assert!(request.user_preferences.is_none());
    }
}
