//! Equipment API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment},
    services::filter::EquipmentFilter,
};

/// List all equipment
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    responses(
        (status = 200, description = "Equipment list", body = Vec<Equipment>)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Equipment>>> {
    let equipment = state.services.equipment.list().await?;
    Ok(Json(equipment))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.get_by_id(id).await?;
    Ok(Json(equipment))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = Equipment),
        (status = 400, description = "A required field is empty")
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    let equipment = state.services.equipment.create(&data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Update equipment, replacing all four fields
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment),
        (status = 400, description = "A required field is empty"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateEquipment>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.update(id, &data).await?;
    Ok(Json(equipment))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.equipment.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Search parameters: inclusive date range plus optional case-insensitive
/// substring patterns
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Range start (inclusive), `YYYY-MM-DD`
    pub start: NaiveDate,
    /// Range end (inclusive), `YYYY-MM-DD`
    pub end: NaiveDate,
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

impl From<SearchQuery> for EquipmentFilter {
    fn from(q: SearchQuery) -> Self {
        EquipmentFilter {
            start: q.start,
            end: q.end,
            name: q.name,
            model: q.model,
            location: q.location,
        }
    }
}

/// Search equipment by date range and text patterns, newest first
#[utoipa::path(
    get,
    path = "/equipment/search",
    tag = "equipment",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching equipment, newest first", body = Vec<Equipment>)
    )
)]
pub async fn search_equipment(
    State(state): State<crate::AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Equipment>>> {
    let equipment = state.services.equipment.search(&query.into()).await?;
    Ok(Json(equipment))
}

/// List records whose stored date does not parse
#[utoipa::path(
    get,
    path = "/equipment/invalid",
    tag = "equipment",
    responses(
        (status = 200, description = "Records excluded from date views", body = Vec<Equipment>)
    )
)]
pub async fn list_invalid_equipment(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Equipment>>> {
    let equipment = state.services.equipment.list_invalid().await?;
    Ok(Json(equipment))
}
