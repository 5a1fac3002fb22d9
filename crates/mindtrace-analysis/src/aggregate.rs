//! Daily aggregation of activity records.
//!
//! Records are grouped by the calendar date of their timestamp (timezone-naive
//! truncation) into per-date accumulators, then converted to immutable
//! [`DailyAggregate`] rollups in a final pass. A `BTreeMap` keyed by date
//! gives ascending order for free.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use mindtrace_core::{ActivityRecord, DailyAggregate, Error, Result};

/// Mutable per-date accumulator. Converted to a [`DailyAggregate`] once the
/// whole batch has been scanned.
#[derive(Debug, Default)]
struct DayAccumulator {
    count: u64,
    sentiment_sum: f64,
    engagement_sum: f64,
    wellbeing_sum: f64,
    likes: i64,
    comments: i64,
    shares: i64,
    time_spent: i64,
    night_usage: i64,
}

impl DayAccumulator {
    fn push(&mut self, record: &ActivityRecord) {
        self.count += 1;
        self.sentiment_sum += record.sentiment_score;
        self.engagement_sum += record.engagement_score;
        self.wellbeing_sum += record.wellbeing_index;
        self.likes += record.likes_count;
        self.comments += record.comments_count;
        self.shares += record.shares_count;
        self.time_spent += record.time_spent_on_post;
        self.night_usage += record.night_usage_minutes;
    }

    fn into_aggregate(self, date: NaiveDate) -> DailyAggregate {
        let n = self.count as f64;
        DailyAggregate {
            date,
            sentiment_score: self.sentiment_sum / n,
            engagement_score: self.engagement_sum / n,
            wellbeing_index: self.wellbeing_sum / n,
            likes_count: self.likes,
            comments_count: self.comments,
            shares_count: self.shares,
            time_spent_on_post: self.time_spent,
            night_usage_minutes: self.night_usage,
        }
    }
}

/// Groups records by calendar date and computes per-day mean/sum rollups.
#[derive(Debug, Default)]
pub struct Aggregator;

impl Aggregator {
    pub fn new() -> Self {
        Self
    }

    /// Compute daily aggregates for the batch, sorted ascending by date.
    ///
    /// Means over sentiment/engagement/wellbeing, sums over likes/comments/
    /// shares/time-spent/night-usage. A date with a single record produces a
    /// mean equal to that record's value.
    ///
    /// Errors only on an empty batch (undefined mean); the request boundary
    /// guarantees non-empty input.
    pub fn aggregate_daily(&self, records: &[ActivityRecord]) -> Result<Vec<DailyAggregate>> {
        if records.is_empty() {
            return Err(Error::Processing(
                "cannot aggregate an empty record batch".to_string(),
            ));
        }

        let mut days: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();
        for record in records {
            days.entry(record.timestamp.date_naive())
                .or_default()
                .push(record);
        }

        debug!(
            record_count = records.len(),
            day_count = days.len(),
            "Daily aggregation complete"
        );

        Ok(days
            .into_iter()
            .map(|(date, acc)| acc.into_aggregate(date))
            .collect())
    }
}
