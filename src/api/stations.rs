use axum::{extract::State, http::StatusCode, Json};
use sqlx::SqlitePool;

use crate::api::{internal_error, ErrorResponse};
use crate::db;

/// List every weather station code in the catalog
#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = 200, description = "Array of station codes", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "climate"
)]
pub async fn stations(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<String>>, (StatusCode, Json<ErrorResponse>)> {
    let codes = db::station_codes(&pool).await.map_err(internal_error)?;

    Ok(Json(codes))
}
