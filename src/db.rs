use serde::Serialize;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{FromRow, SqlitePool};
use utoipa::ToSchema;

/// Tables and columns this service reads. The database is loaded externally;
/// anything beyond these columns is ignored.
const REQUIRED_TABLES: &[(&str, &[&str])] = &[
    ("station", &["station"]),
    ("measurement", &["station", "date", "prcp", "tobs"]),
];

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("database is missing required table '{0}'")]
    MissingTable(&'static str),
    #[error("table '{table}' is missing required column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
}

/// Opens a read-only pool over the pre-populated database. A missing file is
/// a startup failure rather than an empty database.
pub async fn connect(database_path: &str) -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .read_only(true);

    Ok(SqlitePool::connect_with(options).await?)
}

/// Checks the live database against the statically declared schema, so a
/// mismatched or mis-loaded file fails at startup instead of per request.
pub async fn verify_schema(pool: &SqlitePool) -> Result<(), DbError> {
    for &(table, columns) in REQUIRED_TABLES {
        let found: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?)")
            .bind(table)
            .fetch_all(pool)
            .await?;

        if found.is_empty() {
            return Err(DbError::MissingTable(table));
        }

        for &column in columns {
            if !found.iter().any(|name| name == column) {
                return Err(DbError::MissingColumn { table, column });
            }
        }
    }

    Ok(())
}

#[derive(Debug, FromRow)]
pub struct PrecipitationRow {
    pub date: String,
    pub prcp: Option<f64>,
}

/// Min/avg/max of temperature observations over a date range. All fields are
/// null when no rows match; the aggregates must not default to zero.
#[derive(Debug, Serialize, ToSchema, FromRow)]
pub struct TemperatureStats {
    #[serde(rename = "Minimum Temperature")]
    pub min: Option<f64>,
    #[serde(rename = "Average Temperature")]
    pub avg: Option<f64>,
    #[serde(rename = "Maximum Temperature")]
    pub max: Option<f64>,
}

/// All measurement rows with date >= cutoff, in storage order. Rows with a
/// null precipitation reading are included as-is.
pub async fn precipitation_since(
    pool: &SqlitePool,
    cutoff: &str,
) -> Result<Vec<PrecipitationRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT date, prcp
        FROM measurement
        WHERE date >= ?
        "#,
    )
    .bind(cutoff)
    .fetch_all(pool)
    .await
}

/// Every station code in the catalog. Codes are unique by construction, so
/// no deduplication happens here.
pub async fn station_codes(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT station
        FROM station
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Temperature reading of every measurement row with date >= cutoff,
/// regardless of station.
pub async fn temperatures_since(
    pool: &SqlitePool,
    cutoff: &str,
) -> Result<Vec<Option<f64>>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT tobs
        FROM measurement
        WHERE date >= ?
        "#,
    )
    .bind(cutoff)
    .fetch_all(pool)
    .await
}

/// Aggregate temperature stats for date >= start, optionally bounded by
/// date <= end. Dates compare lexicographically, which matches chronological
/// order for the ISO-8601 strings the database stores.
pub async fn temperature_stats(
    pool: &SqlitePool,
    start: &str,
    end: Option<&str>,
) -> Result<TemperatureStats, sqlx::Error> {
    match end {
        Some(end) => {
            sqlx::query_as(
                r#"
                SELECT MIN(tobs) AS min, AVG(tobs) AS avg, MAX(tobs) AS max
                FROM measurement
                WHERE date >= ? AND date <= ?
                "#,
            )
            .bind(start)
            .bind(end)
            .fetch_one(pool)
            .await
        }
        None => {
            sqlx::query_as(
                r#"
                SELECT MIN(tobs) AS min, AVG(tobs) AS avg, MAX(tobs) AS max
                FROM measurement
                WHERE date >= ?
                "#,
            )
            .bind(start)
            .fetch_one(pool)
            .await
        }
    }
}
