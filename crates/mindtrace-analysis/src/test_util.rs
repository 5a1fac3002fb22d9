//! Shared test fixtures for the analysis crate.

use mindtrace_core::ActivityRecord;

/// A neutral baseline record; tests override the fields they care about.
pub(crate) fn base_record() -> ActivityRecord {
    ActivityRecord {
        post_id: "post_001".to_string(),
        user_id: "user_123".to_string(),
        timestamp: "2025-01-15T10:30:00Z".parse().unwrap(),
        day_of_week: "Wednesday".to_string(),
        time_of_day: "morning".to_string(),
        caption_text: "Just another day".to_string(),
        hashtags: "#daily".to_string(),
        image_context_label: "home".to_string(),
        sentiment_score: 50.0,
        emotion_primary: "neutral".to_string(),
        emotion_confidence: 0.9,
        topic_cluster: "family_time".to_string(),
        text_length: 16,
        likes_count: 10,
        comments_count: 2,
        shares_count: 1,
        saved_count: 0,
        average_comment_sentiment: 50.0,
        engagement_score: 60.0,
        time_spent_on_post: 30,
        comments_read_count: 1,
        scrolled_back: false,
        interaction_type: "post_creation".to_string(),
        num_sessions_per_day: 5,
        avg_session_duration: 10.0,
        night_usage_minutes: 15,
        label_mental_state: "neutral".to_string(),
        label_confidence: 0.8,
        wellbeing_index: 70.0,
        recommendation_flag: false,
    }
}

/// Record with caption/hashtag text, for indicator and topic tests.
pub(crate) fn record_with_text(caption: &str, hashtags: &str) -> ActivityRecord {
    ActivityRecord {
        caption_text: caption.to_string(),
        hashtags: hashtags.to_string(),
        ..base_record()
    }
}
