use axum::{extract::State, http::StatusCode, Json};
use sqlx::SqlitePool;

use crate::api::{internal_error, one_year_ago, ErrorResponse};
use crate::db;

/// Temperature observations for the last 12 months
///
/// Returns readings from every station. The route is deliberately not
/// restricted to the most-active station (see DESIGN.md).
#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = 200, description = "Flat array of temperature observations across all stations"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "climate"
)]
pub async fn tobs(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Option<f64>>>, (StatusCode, Json<ErrorResponse>)> {
    let cutoff = one_year_ago();

    let readings = db::temperatures_since(&pool, &cutoff)
        .await
        .map_err(internal_error)?;

    Ok(Json(readings))
}
