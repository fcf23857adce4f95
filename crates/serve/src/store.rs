//! Postgres-backed response cache
//!
//! Two tables, one per prompt: `places_cache` keys a JSONB place list by
//! versioned location, `place_details` keys free text by the pair of
//! versioned location and place name. Entries are never updated; a prompt
//! version bump changes the key and every stale entry is simply never
//! read again.
//!
//! Concurrent misses for the same key both call their producer. Inserts
//! use `ON CONFLICT DO NOTHING`, so the second writer's insert is an
//! atomic no-op rather than a duplicate row or a constraint error.

use sqlx::postgres::PgPool;
use std::future::Future;
use wayfare_core::{PlaceSummary, Result, WayfareError};

/// A cache-aside result with its origin flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cached<T> {
    pub value: T,
    pub from_cache: bool,
}

/// Persistent cache for generated place lists and details
#[derive(Debug, Clone)]
pub struct PlaceStore {
    pool: PgPool,
}

impl PlaceStore {
    /// Connect to the database eagerly
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await.map_err(db_error)?;
        Ok(Self { pool })
    }

    /// Create a store from an existing pool (for testing)
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create both cache tables if they do not exist. Called once at
    /// startup; failure here is fatal to the process.
    pub async fn ensure_tables(&self) -> Result<()> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS places_cache (
                location TEXT PRIMARY KEY,
                places JSONB
            )"#,
        )
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS place_details (
                id SERIAL PRIMARY KEY,
                location TEXT,
                name TEXT,
                details TEXT,
                UNIQUE(location, name)
            )"#,
        )
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        tracing::info!("Cache tables ready");
        Ok(())
    }

    /// Probe database connectivity, returning the server's clock
    pub async fn ping(&self) -> Result<chrono::DateTime<chrono::Utc>> {
        sqlx::query_scalar("SELECT NOW()")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)
    }

    /// Look up a cached place list by versioned key
    pub async fn cached_places(&self, key: &str) -> Result<Option<Vec<PlaceSummary>>> {
        let row: Option<serde_json::Value> =
            sqlx::query_scalar("SELECT places FROM places_cache WHERE location = $1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        match row {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Persist a place list under its versioned key. A concurrent writer
    /// that got there first wins; this insert then does nothing.
    pub async fn insert_places(&self, key: &str, places: &[PlaceSummary]) -> Result<()> {
        let value = serde_json::to_value(places)?;

        sqlx::query(
            "INSERT INTO places_cache (location, places) VALUES ($1, $2) \
             ON CONFLICT (location) DO NOTHING",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    /// Look up cached details for a place by versioned key and name
    pub async fn cached_details(&self, key: &str, name: &str) -> Result<Option<String>> {
        sqlx::query_scalar("SELECT details FROM place_details WHERE location = $1 AND name = $2")
            .bind(key)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)
    }

    /// Persist place details under the composite key
    pub async fn insert_details(&self, key: &str, name: &str, details: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO place_details (location, name, details) VALUES ($1, $2, $3) \
             ON CONFLICT (location, name) DO NOTHING",
        )
        .bind(key)
        .bind(name)
        .bind(details)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    /// Cache-aside lookup for a place list: return the cached value, else
    /// call the producer, persist its result, and return it with the
    /// origin flag. Nothing is persisted when the producer fails.
    pub async fn places_cache_aside<F, Fut>(
        &self,
        key: &str,
        produce: F,
    ) -> Result<Cached<Vec<PlaceSummary>>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<PlaceSummary>>>,
    {
        if let Some(places) = self.cached_places(key).await? {
            tracing::info!("Cache hit for {}", key);
            return Ok(Cached {
                value: places,
                from_cache: true,
            });
        }

        tracing::info!("Cache miss for {}, generating", key);
        let places = produce().await?;
        self.insert_places(key, &places).await?;

        Ok(Cached {
            value: places,
            from_cache: false,
        })
    }

    /// Cache-aside lookup for place details, keyed by versioned location
    /// and place name
    pub async fn details_cache_aside<F, Fut>(
        &self,
        key: &str,
        name: &str,
        produce: F,
    ) -> Result<Cached<String>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        if let Some(details) = self.cached_details(key, name).await? {
            tracing::info!("Cache hit for {} / {}", key, name);
            return Ok(Cached {
                value: details,
                from_cache: true,
            });
        }

        tracing::info!("Cache miss for {} / {}, generating", key, name);
        let details = produce().await?;
        self.insert_details(key, name, &details).await?;

        Ok(Cached {
            value: details,
            from_cache: false,
        })
    }
}

fn db_error(e: sqlx::Error) -> WayfareError {
    WayfareError::database(e.to_string())
}
