//! Export endpoints
//!
//! Downloads are the filtered view when both date bounds are supplied, the
//! full log in storage order when neither is. A half-specified range is
//! rejected rather than silently ignored.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::{AppError, AppResult},
    models::equipment::Equipment,
    services::filter::EquipmentFilter,
};

/// Optional filter parameters for exports. `start` and `end` must be given
/// together.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ExportQuery {
    /// Range start (inclusive), `YYYY-MM-DD`
    pub start: Option<NaiveDate>,
    /// Range end (inclusive), `YYYY-MM-DD`
    pub end: Option<NaiveDate>,
    /// Substring to match in name
    #[serde(default)]
    pub name: String,
    /// Substring to match in model
    #[serde(default)]
    pub model: String,
    /// Substring to match in location
    #[serde(default)]
    pub location: String,
}

async fn select_records(
    state: &crate::AppState,
    query: ExportQuery,
) -> AppResult<Vec<Equipment>> {
    match (query.start, query.end) {
        (Some(start), Some(end)) => {
            let filter = EquipmentFilter {
                start,
                end,
                name: query.name,
                model: query.model,
                location: query.location,
            };
            state.services.equipment.search(&filter).await
        }
        (None, None) => state.services.equipment.list().await,
        _ => Err(AppError::Validation(
            "start and end must be provided together".to_string(),
        )),
    }
}

/// Download the log as CSV
#[utoipa::path(
    get,
    path = "/export/csv",
    tag = "export",
    params(ExportQuery),
    responses(
        (status = 200, description = "CSV download named equipment_log.csv")
    )
)]
pub async fn export_csv(
    State(state): State<crate::AppState>,
    Query(query): Query<ExportQuery>,
) -> AppResult<impl IntoResponse> {
    let records = select_records(&state, query).await?;
    let bytes = state.services.export.to_csv(&records)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"equipment_log.csv\"",
            ),
        ],
        bytes,
    ))
}

/// Download the log as a tabular PDF
#[utoipa::path(
    get,
    path = "/export/pdf",
    tag = "export",
    params(ExportQuery),
    responses(
        (status = 200, description = "PDF download named equipment_log.pdf")
    )
)]
pub async fn export_pdf(
    State(state): State<crate::AppState>,
    Query(query): Query<ExportQuery>,
) -> AppResult<impl IntoResponse> {
    let records = select_records(&state, query).await?;
    let bytes = state.services.export.to_pdf(&records)?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"equipment_log.pdf\"",
            ),
        ],
        bytes,
    ))
}
