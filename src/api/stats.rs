//! Statistics endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::equipment::Equipment};

/// Statistics response
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    /// Number of records with a valid date
    pub total: i64,
    /// Distinct model count
    pub unique_models: i64,
    /// Distinct location count
    pub unique_locations: i64,
    /// Most frequent model, None when the log is empty
    pub most_common_model: Option<String>,
    /// Most frequent location, None when the log is empty
    pub most_common_location: Option<String>,
    /// Records dated in the week starting the most recent Monday
    pub added_this_week: i64,
    /// Records dated in the current calendar month
    pub added_this_month: i64,
    /// Record with the earliest date
    pub oldest: Option<Equipment>,
    /// Record with the latest date
    pub newest: Option<Equipment>,
    /// Record counts per model
    pub by_model: Vec<StatEntry>,
    /// Record counts per location
    pub by_location: Vec<StatEntry>,
    /// Record counts per month, chronological
    pub monthly: Vec<TimeSeriesEntry>,
    /// Records excluded because their date does not parse
    pub invalid_dates: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatEntry {
    /// Label
    pub label: String,
    /// Value
    pub value: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TimeSeriesEntry {
    /// Month, `YYYY-MM`
    pub month: String,
    /// Record count for the month
    pub value: i64,
}

/// Summary statistics over the whole equipment log
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Aggregate statistics", body = StatsResponse)
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
) -> AppResult<Json<StatsResponse>> {
    let stats = state.services.stats.get_stats().await?;
    Ok(Json(stats))
}
