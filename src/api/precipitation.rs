use axum::{extract::State, http::StatusCode, Json};
use sqlx::SqlitePool;
use std::collections::HashMap;

use crate::api::{internal_error, one_year_ago, ErrorResponse};
use crate::db;

/// Precipitation readings for the last 12 months, keyed by observation date
#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = 200, description = "Mapping from observation date to precipitation value; null when no reading was recorded"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "climate"
)]
pub async fn precipitation(
    State(pool): State<SqlitePool>,
) -> Result<Json<HashMap<String, Option<f64>>>, (StatusCode, Json<ErrorResponse>)> {
    let cutoff = one_year_ago();

    let rows = db::precipitation_since(&pool, &cutoff)
        .await
        .map_err(internal_error)?;

    // Keyed by date, so a duplicate date keeps the last value fetched
    let by_date: HashMap<String, Option<f64>> =
        rows.into_iter().map(|row| (row.date, row.prcp)).collect();

    Ok(Json(by_date))
}
