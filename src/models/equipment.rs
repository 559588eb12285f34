//! Equipment model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Date format used everywhere a date crosses a text boundary
/// (persistence, export, API payloads).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Equipment record as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i64,
    /// Equipment name / description
    pub name: String,
    /// Model designation
    pub model: String,
    /// Where the equipment lives
    pub location: String,
    /// Acquisition date, ISO-8601 `YYYY-MM-DD` text. Payload validation
    /// rejects unparseable dates, so only rows written outside the API
    /// (legacy data, direct SQL) can fail to parse.
    pub date: String,
}

impl Equipment {
    /// Parse the stored date text. `None` marks the record as invalid for
    /// date-filtered views and aggregation.
    pub fn parse_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

/// Equipment record paired with its successfully parsed date.
///
/// Filter and stats code works on these so the date is parsed exactly once,
/// at the store boundary.
#[derive(Debug, Clone)]
pub struct DatedEquipment {
    pub record: Equipment,
    pub date: NaiveDate,
}

/// Split records into those with a parseable date and those without.
///
/// Invalid-date records are never silently dropped: callers surface them
/// through a separate report channel.
pub fn split_by_date(records: Vec<Equipment>) -> (Vec<DatedEquipment>, Vec<Equipment>) {
    let mut dated = Vec::with_capacity(records.len());
    let mut invalid = Vec::new();
    for record in records {
        match record.parse_date() {
            Some(date) => dated.push(DatedEquipment { record, date }),
            None => invalid.push(record),
        }
    }
    (dated, invalid)
}

/// Payload-level date check: anything that does not parse as `YYYY-MM-DD`
/// is rejected before it can reach the store.
fn validate_date(date: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| ValidationError::new("date must be YYYY-MM-DD"))
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "model must not be empty"))]
    pub model: String,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
    /// Acquisition date, `YYYY-MM-DD`
    #[validate(custom(function = "validate_date"))]
    pub date: String,
}

/// Update equipment request. All four fields are replaced; the id never
/// changes.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipment {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "model must not be empty"))]
    pub model: String,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
    /// Acquisition date, `YYYY-MM-DD`
    #[validate(custom(function = "validate_date"))]
    pub date: String,
}
