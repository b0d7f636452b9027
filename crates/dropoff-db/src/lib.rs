//! Center repository: Postgres-backed or static, selected at startup.

mod postgres;
mod static_store;

pub use postgres::CenterRow;
pub use static_store::StaticCenters;

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;

use dropoff_core::{AppConfig, Category, Center};

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_MIN_CONNECTIONS: u32 = 1;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 10;

// Path relative to crates/dropoff-db/Cargo.toml; resolves to <workspace-root>/migrations/
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

#[derive(Debug, Clone, Copy)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_connections: DEFAULT_MIN_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

impl PoolConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            max_connections: config.db_max_connections,
            min_connections: config.db_min_connections,
            acquire_timeout_secs: config.db_acquire_timeout_secs,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Connect to a Postgres pool using explicit URL and config.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the connection cannot be established.
pub async fn connect_pool(database_url: &str, config: PoolConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(database_url)
        .await
}

/// Run all pending migrations against the pool.
///
/// # Errors
///
/// Returns [`sqlx::migrate::MigrateError`] if any migration fails.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Candidate source for the search pipeline and detail/category lookups.
///
/// One strategy is selected at startup and injected into the handlers; the
/// store is never an ambient singleton. `Static` serves the seed dataset
/// when no database is configured or the configured one is unreachable.
#[derive(Debug, Clone)]
pub enum CenterStore {
    Postgres(PgPool),
    Static(StaticCenters),
}

impl CenterStore {
    /// Select a store from configuration: Postgres when a database URL is
    /// present and reachable, the static seed dataset otherwise.
    pub async fn from_config(config: &AppConfig) -> Self {
        match &config.database_url {
            Some(url) => {
                match connect_pool(url, PoolConfig::from_app_config(config)).await {
                    Ok(pool) => Self::Postgres(pool),
                    Err(e) => {
                        tracing::warn!(
                            error = %e,
                            "database unreachable, serving the static dataset"
                        );
                        Self::Static(StaticCenters::from_path_or_builtin(&config.centers_path))
                    }
                }
            }
            None => {
                tracing::info!("DATABASE_URL not set, serving the static dataset");
                Self::Static(StaticCenters::from_path_or_builtin(&config.centers_path))
            }
        }
    }

    /// List active centers, at most `take` of them.
    ///
    /// A non-empty `categories` slice is pushed down as an any-of name
    /// predicate. Rows come back in id order so downstream stable sorts
    /// have a deterministic tie-break.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Sqlx`] if the Postgres query fails; the static
    /// store never errors.
    pub async fn list_active(
        &self,
        categories: &[String],
        take: i64,
    ) -> Result<Vec<Center>, StoreError> {
        match self {
            Self::Postgres(pool) => {
                Ok(postgres::list_active_centers(pool, categories, take).await?)
            }
            Self::Static(data) => Ok(data.list_active(categories, take)),
        }
    }

    /// Fetch one active center by id; `Ok(None)` when absent or inactive.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Sqlx`] if the Postgres query fails.
    pub async fn get_center(&self, id: i64) -> Result<Option<Center>, StoreError> {
        match self {
            Self::Postgres(pool) => Ok(postgres::get_center(pool, id).await?),
            Self::Static(data) => Ok(data.get_center(id)),
        }
    }

    /// All categories ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Sqlx`] if the Postgres query fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        match self {
            Self::Postgres(pool) => Ok(postgres::list_categories(pool).await?),
            Self::Static(data) => Ok(data.list_categories()),
        }
    }

    /// Liveness probe: `SELECT 1` for Postgres, always healthy for static.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Sqlx`] if the probe query fails.
    pub async fn health(&self) -> Result<(), StoreError> {
        match self {
            Self::Postgres(pool) => {
                sqlx::query_scalar::<_, i64>("SELECT 1")
                    .fetch_one(pool)
                    .await?;
                Ok(())
            }
            Self::Static(_) => Ok(()),
        }
    }

    /// Whether this store is backed by Postgres.
    #[must_use]
    pub fn is_postgres(&self) -> bool {
        matches!(self, Self::Postgres(_))
    }
}
