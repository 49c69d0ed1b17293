pub mod error;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;

pub use error::{internal_error, ErrorResponse};

use axum::response::Html;
use axum::Router;
use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(tags(
    (name = "climate", description = "Historical climate observation queries")
))]
pub struct ApiDoc;

/// Cutoff for the "last 12 months" routes: current date minus 365 days,
/// formatted to match the ISO-8601 dates stored in the measurement table.
pub(crate) fn one_year_ago() -> String {
    (Utc::now().date_naive() - Duration::days(365))
        .format("%Y-%m-%d")
        .to_string()
}

/// Landing page listing the available routes
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "HTML-flavored listing of available routes", body = String, content_type = "text/html")
    ),
    tag = "climate"
)]
pub async fn welcome() -> Html<&'static str> {
    Html(
        "Welcome to the Climate App!<br/>\
         Available Routes:<br/>\
         /api/v1.0/precipitation<br/>\
         /api/v1.0/stations<br/>\
         /api/v1.0/tobs<br/>\
         /api/v1.0/&lt;start&gt;<br/>\
         /api/v1.0/&lt;start&gt;/&lt;end&gt;",
    )
}

pub fn router(pool: SqlitePool) -> Router {
    // Static segments win over the {start} capture, so /api/v1.0/stations
    // and friends never shadow the date-range routes.
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(welcome))
        .routes(routes!(precipitation::precipitation))
        .routes(routes!(stations::stations))
        .routes(routes!(tobs::tobs))
        .routes(routes!(temperature::temperature_start))
        .routes(routes!(temperature::temperature_range))
        .with_state(pool)
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
