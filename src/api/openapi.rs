//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, export, health, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Equipment Log API",
        version = "0.1.0",
        description = "Equipment inventory tracking REST API",
        license(name = "MIT")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        equipment::search_equipment,
        equipment::list_invalid_equipment,
        // Stats
        stats::get_stats,
        // Export
        export::export_csv,
        export::export_pdf,
    ),
    components(
        schemas(
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            health::HealthResponse,
            stats::StatsResponse,
            stats::StatEntry,
            stats::TimeSeriesEntry,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "equipment", description = "Equipment log CRUD and search"),
        (name = "stats", description = "Aggregate statistics"),
        (name = "export", description = "CSV and PDF downloads")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
