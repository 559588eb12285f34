//! Record filtering
//!
//! Pure functions over record slices; the store is never touched. Records
//! with unparseable dates are split off before filtering and reported
//! through a separate channel, so they can never match a date filter.

use chrono::NaiveDate;

use crate::models::equipment::{DatedEquipment, Equipment};

/// Filter criteria for a search over the equipment log
#[derive(Debug, Clone)]
pub struct EquipmentFilter {
    /// Range start, inclusive
    pub start: NaiveDate,
    /// Range end, inclusive
    pub end: NaiveDate,
    /// Case-insensitive substring on name; empty matches everything
    pub name: String,
    /// Case-insensitive substring on model; empty matches everything
    pub model: String,
    /// Case-insensitive substring on location; empty matches everything
    pub location: String,
}

fn matches_pattern(haystack: &str, pattern: &str) -> bool {
    pattern.is_empty() || haystack.to_lowercase().contains(&pattern.to_lowercase())
}

/// Return records within the date range that match every text pattern,
/// sorted by date descending. Ties break by id ascending so results are
/// deterministic.
pub fn filter_records(records: &[DatedEquipment], filter: &EquipmentFilter) -> Vec<Equipment> {
    let mut matched: Vec<&DatedEquipment> = records
        .iter()
        .filter(|d| d.date >= filter.start && d.date <= filter.end)
        .filter(|d| matches_pattern(&d.record.name, &filter.name))
        .filter(|d| matches_pattern(&d.record.model, &filter.model))
        .filter(|d| matches_pattern(&d.record.location, &filter.location))
        .collect();
    matched.sort_by(|a, b| b.date.cmp(&a.date).then(a.record.id.cmp(&b.record.id)));
    matched.into_iter().map(|d| d.record.clone()).collect()
}
