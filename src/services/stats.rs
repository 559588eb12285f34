//! Statistics service
//!
//! The aggregation core is a set of pure functions over the dated subset of
//! the log; records whose date fails to parse are counted separately and
//! excluded from every statistic.

use chrono::{Datelike, Duration, NaiveDate, Utc};
use indexmap::IndexMap;
use std::collections::BTreeMap;

use crate::{
    api::stats::{StatEntry, StatsResponse, TimeSeriesEntry},
    error::AppResult,
    models::equipment::{split_by_date, DatedEquipment, Equipment},
    repository::Repository,
};

/// Occurrence counts for one field, keyed by value.
///
/// Insertion order follows first encounter in the input, which is what makes
/// the most-common tie-break deterministic.
pub fn counts_by<F>(records: &[DatedEquipment], field: F) -> IndexMap<String, i64>
where
    F: Fn(&Equipment) -> &str,
{
    let mut counts = IndexMap::new();
    for d in records {
        *counts.entry(field(&d.record).to_string()).or_insert(0) += 1;
    }
    counts
}

/// Value with the highest count; first-encountered wins ties. None on empty
/// input.
pub fn most_common(counts: &IndexMap<String, i64>) -> Option<String> {
    let mut best: Option<(&String, i64)> = None;
    for (value, &count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value.clone())
}

/// Number of records dated within `[start, end]` inclusive
pub fn count_in_range(records: &[DatedEquipment], start: NaiveDate, end: NaiveDate) -> i64 {
    records
        .iter()
        .filter(|d| d.date >= start && d.date <= end)
        .count() as i64
}

/// Record with the minimum date; ids break ties
pub fn oldest(records: &[DatedEquipment]) -> Option<&DatedEquipment> {
    records.iter().min_by_key(|d| (d.date, d.record.id))
}

/// Record with the maximum date; ids break ties
pub fn newest(records: &[DatedEquipment]) -> Option<&DatedEquipment> {
    records.iter().max_by_key(|d| (d.date, d.record.id))
}

/// Per-month record counts keyed `YYYY-MM`, chronological, months without
/// records omitted
pub fn monthly_series(records: &[DatedEquipment]) -> BTreeMap<String, i64> {
    let mut series = BTreeMap::new();
    for d in records {
        *series.entry(d.date.format("%Y-%m").to_string()).or_insert(0) += 1;
    }
    series
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Compute the full summary over the current log contents
    pub async fn get_stats(&self) -> AppResult<StatsResponse> {
        let records = self.repository.equipment.list_all().await?;
        let (dated, invalid) = split_by_date(records);

        let today = Utc::now().date_naive();
        Ok(Self::summarize(&dated, invalid.len() as i64, today))
    }

    /// Pure summary over an already-split record set, relative to `today`
    fn summarize(dated: &[DatedEquipment], invalid_dates: i64, today: NaiveDate) -> StatsResponse {
        let by_model = counts_by(dated, |r| r.model.as_str());
        let by_location = counts_by(dated, |r| r.location.as_str());

        // Week window starts on the most recent Monday on or before today
        let week_start = today - Duration::days(today.weekday().num_days_from_monday() as i64);
        let added_this_week = count_in_range(dated, week_start, today);
        let added_this_month = dated
            .iter()
            .filter(|d| d.date.year() == today.year() && d.date.month() == today.month())
            .count() as i64;

        StatsResponse {
            total: dated.len() as i64,
            unique_models: by_model.len() as i64,
            unique_locations: by_location.len() as i64,
            most_common_model: most_common(&by_model),
            most_common_location: most_common(&by_location),
            added_this_week,
            added_this_month,
            oldest: oldest(dated).map(|d| d.record.clone()),
            newest: newest(dated).map(|d| d.record.clone()),
            by_model: by_model
                .into_iter()
                .map(|(label, value)| StatEntry { label, value })
                .collect(),
            by_location: by_location
                .into_iter()
                .map(|(label, value)| StatEntry { label, value })
                .collect(),
            monthly: monthly_series(dated)
                .into_iter()
                .map(|(month, value)| TimeSeriesEntry { month, value })
                .collect(),
            invalid_dates,
        }
    }
}
