//! The sighting repository service.
//!
//! This module owns the connection pool and translates the three read intents
//! (full list, single detail, nearest-N) into parameterized queries against
//! the `sightings` table. The store is read-only from this service's side;
//! rows are populated by an external data-entry process.
//!
//! De-duplication contract:
//! 1.  The full list collapses rows on (latitude, longitude, year, month, day).
//! 2.  The nearest-N query collapses on (latitude, longitude) only — the date
//!     components are deliberately ignored there, matching the shipped map
//!     behavior.
//! Both pick the minimum sighting id as the group representative so repeated
//! queries return the same rows.

use crate::domain::geo::{self, CoordinateGroup};
use crate::domain::sighting::{NearestSighting, Sighting, SightingSummary};
use crate::error::RepositoryError;
use crate::infra::config;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::future::Future;
use std::time::Duration;

const SIGHTING_COLUMNS: &str = "sighting_id, specimen_number, country, state, locality, \
     latitude, longitude, source, accuracy, drainage_name, huc8_number, \
     year, month, day, status, comments, record_type";

/// The main service that manages database interaction for sighting reads.
pub struct SightingService {
    pool: PgPool,
    query_timeout: Duration,
}

impl SightingService {
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Creates a new instance of the SightingService and connects to the
    /// database. The pool lives for the lifetime of the process; individual
    /// operations never open or tear down their own connections.
    pub async fn new() -> Result<Self, anyhow::Error> {
        dotenv::dotenv().ok();
        let database_url = config::database_url();

        let pool = PgPoolOptions::new()
            .max_connections(config::max_db_connections())
            .connect(&database_url)
            .await?;

        // The sightings table (always needed; rows come from an external loader).
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS sightings (
                sighting_id SERIAL PRIMARY KEY,
                specimen_number TEXT,
                country TEXT,
                state TEXT,
                locality TEXT,
                latitude DOUBLE PRECISION NOT NULL,
                longitude DOUBLE PRECISION NOT NULL,
                source TEXT,
                accuracy TEXT,
                drainage_name TEXT,
                huc8_number TEXT,
                year INTEGER,
                month INTEGER,
                day INTEGER,
                status TEXT,
                comments TEXT,
                record_type TEXT
            )",
        )
        .execute(&pool)
        .await?;

        tracing::info!(
            max_connections = config::max_db_connections(),
            "connected to sightings store"
        );

        Ok(Self {
            pool,
            query_timeout: config::query_timeout(),
        })
    }

    /// Wraps an existing pool (tests, embedding).
    pub fn with_pool(pool: PgPool) -> Self {
        Self {
            pool,
            query_timeout: config::query_timeout(),
        }
    }

    /// One marker per distinct (latitude, longitude, year, month, day) group.
    /// Output ordering is store-determined; callers must not rely on it.
    pub async fn list_sightings(&self) -> Result<Vec<SightingSummary>, RepositoryError> {
        self.bounded(
            sqlx::query_as::<_, SightingSummary>(
                "SELECT MIN(sighting_id) AS sighting_id, latitude, longitude
                 FROM sightings
                 GROUP BY latitude, longitude, year, month, day",
            )
            .fetch_all(&self.pool),
        )
        .await
    }

    /// Full field set for one sighting, or `NotFound`.
    pub async fn get_sighting(&self, id: i32) -> Result<Sighting, RepositoryError> {
        let sql = format!(
            "SELECT {SIGHTING_COLUMNS} FROM sightings WHERE sighting_id = $1 LIMIT 1"
        );
        let row = self
            .bounded(
                sqlx::query_as::<_, Sighting>(&sql)
                    .bind(id)
                    .fetch_optional(&self.pool),
            )
            .await?;
        row.ok_or(RepositoryError::NotFound(id))
    }

    /// The `limit` coordinate groups closest to (`ref_lat`, `ref_lon`),
    /// ascending by great-circle distance in nautical miles.
    ///
    /// Grouping runs in SQL; the distance ranking runs here so the clamping,
    /// rounding and tie-break rules live in one testable place.
    pub async fn find_closest_sightings(
        &self,
        limit: i64,
        ref_lat: f64,
        ref_lon: f64,
    ) -> Result<Vec<NearestSighting>, RepositoryError> {
        validate_nearest_params(limit, ref_lat, ref_lon)?;

        let groups = self
            .bounded(
                sqlx::query_as::<_, CoordinateGroup>(
                    "SELECT MIN(sighting_id) AS sighting_id, latitude, longitude
                     FROM sightings
                     GROUP BY latitude, longitude",
                )
                .fetch_all(&self.pool),
            )
            .await?;

        Ok(geo::rank_by_distance(groups, ref_lat, ref_lon, limit as usize))
    }

    /// Runs a driver future under the bounded query timeout.
    async fn bounded<T, F>(&self, fut: F) -> Result<T, RepositoryError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.query_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(RepositoryError::from_sqlx(err)),
            Err(_) => Err(RepositoryError::QueryFailure(format!(
                "query timed out after {:?}",
                self.query_timeout
            ))),
        }
    }
}

/// Validates nearest-N inputs before any query is constructed.
pub fn validate_nearest_params(
    limit: i64,
    ref_lat: f64,
    ref_lon: f64,
) -> Result<(), RepositoryError> {
    if limit <= 0 {
        return Err(RepositoryError::InvalidInput(format!(
            "limit must be positive, got {limit}"
        )));
    }
    if !(-90.0..=90.0).contains(&ref_lat) {
        return Err(RepositoryError::InvalidInput(format!(
            "latitude out of range [-90, 90]: {ref_lat}"
        )));
    }
    if !(-180.0..=180.0).contains(&ref_lon) {
        return Err(RepositoryError::InvalidInput(format!(
            "longitude out of range [-180, 180]: {ref_lon}"
        )));
    }
    Ok(())
}
