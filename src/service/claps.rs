//! Clap counter: read with graceful degradation, increment by upsert.
//!
//! The increment reads the current value and then writes `current + 1`. Two concurrent
//! increments can read the same value, in which case one of them is lost (last writer wins).

use crate::error::AppError;
use crate::schema::CLAP_ID;
use async_trait::async_trait;
use serde::Serialize;
use sqlx::AnyPool;
use std::sync::Arc;

/// Storage for counter rows keyed by id.
#[async_trait]
pub trait ClapStore: Send + Sync {
    /// Current count for `id`, or `None` when the row does not exist.
    async fn fetch(&self, id: i64) -> Result<Option<i64>, AppError>;
    /// Insert the row or overwrite its count.
    async fn upsert(&self, id: i64, count: i64) -> Result<(), AppError>;
}

/// `claps` table over an sqlx pool.
#[derive(Clone)]
pub struct SqlClapStore {
    pool: AnyPool,
}

impl SqlClapStore {
    pub fn new(pool: AnyPool) -> Self {
        SqlClapStore { pool }
    }
}

#[async_trait]
impl ClapStore for SqlClapStore {
    async fn fetch(&self, id: i64) -> Result<Option<i64>, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT count FROM claps WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(count)
    }

    async fn upsert(&self, id: i64, count: i64) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO claps (id, count) VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE SET count = excluded.count",
        )
        .bind(id)
        .bind(count)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

/// Result of reading the counter as seen by the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "count", rename_all = "lowercase")]
pub enum ClapCount {
    Known(i64),
    Unavailable,
}

impl ClapCount {
    pub fn value(self) -> Option<i64> {
        match self {
            ClapCount::Known(n) => Some(n),
            ClapCount::Unavailable => None,
        }
    }
}

#[derive(Clone)]
pub struct ClapCounter {
    store: Arc<dyn ClapStore>,
}

impl ClapCounter {
    pub fn new(store: Arc<dyn ClapStore>) -> Self {
        ClapCounter { store }
    }

    pub fn from_pool(pool: AnyPool) -> Self {
        Self::new(Arc::new(SqlClapStore::new(pool)))
    }

    /// Current count. A missing row reads as zero; store failures are logged and
    /// reported as `Unavailable` instead of an error.
    pub async fn current(&self) -> ClapCount {
        match self.store.fetch(CLAP_ID).await {
            Ok(count) => ClapCount::Known(count.unwrap_or(0)),
            Err(e) => {
                tracing::error!(error = %e, "failed to read clap count");
                ClapCount::Unavailable
            }
        }
    }

    /// Add one clap. Returns the new count, or `None` without writing when the current
    /// count cannot be read. Write failures are returned.
    pub async fn increment(&self) -> Result<Option<i64>, AppError> {
        let current = match self.current().await {
            ClapCount::Known(n) => n,
            ClapCount::Unavailable => return Ok(None),
        };
        let next = current + 1;
        self.store.upsert(CLAP_ID, next).await?;
        tracing::info!(count = next, "clap recorded");
        Ok(Some(next))
    }
}
