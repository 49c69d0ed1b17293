use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use crate::api::{internal_error, ErrorResponse};
use crate::db::{self, TemperatureStats};

/// Temperature statistics from a start date onward
///
/// The date segment is compared as a string against the stored ISO-8601
/// dates; an unparsable segment yields an empty range rather than an error.
#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
        ("start" = String, Path, description = "Start date (inclusive), ISO-8601")
    ),
    responses(
        (status = 200, description = "Min/avg/max temperature from the start date onward; all null when no rows match", body = TemperatureStats),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "climate"
)]
pub async fn temperature_start(
    State(pool): State<SqlitePool>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureStats>, (StatusCode, Json<ErrorResponse>)> {
    let stats = db::temperature_stats(&pool, &start, None)
        .await
        .map_err(internal_error)?;

    Ok(Json(stats))
}

/// Temperature statistics over an inclusive date range
#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
        ("start" = String, Path, description = "Start date (inclusive), ISO-8601"),
        ("end" = String, Path, description = "End date (inclusive), ISO-8601")
    ),
    responses(
        (status = 200, description = "Min/avg/max temperature over the range; all null when no rows match", body = TemperatureStats),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "climate"
)]
pub async fn temperature_range(
    State(pool): State<SqlitePool>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureStats>, (StatusCode, Json<ErrorResponse>)> {
    let stats = db::temperature_stats(&pool, &start, Some(&end))
        .await
        .map_err(internal_error)?;

    Ok(Json(stats))
}
