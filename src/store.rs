//! Pool setup and table DDL. One pool type (`AnyPool`) covers SQLite files and network PostgreSQL.

use crate::config::DbSettings;
use crate::error::AppError;
use crate::schema::TABLES;
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

/// Open a pool for the configured database. SQLite files are created when missing.
pub async fn connect(settings: &DbSettings) -> Result<AnyPool, AppError> {
    sqlx::any::install_default_drivers();
    let url = settings.connect_url();
    // every connection to `sqlite::memory:` is its own database
    // and is dropped with it, so that single connection is never retired
    let memory = url == "sqlite::memory:";
    let max_connections = if memory { 1 } else { settings.max_connections };
    let mut options = AnyPoolOptions::new().max_connections(max_connections);
    if memory {
        options = options.idle_timeout(None).max_lifetime(None);
    }
    let pool = options.connect(&url).await?;
    tracing::info!(
        backend = if settings.is_file() { "sqlite" } else { "postgres" },
        max_connections,
        "database pool ready"
    );
    Ok(pool)
}

/// Create every starter table if it does not exist yet.
pub async fn ensure_tables(pool: &AnyPool) -> Result<(), AppError> {
    for table in TABLES {
        sqlx::query(&table.create_sql()).execute(pool).await?;
        tracing::debug!(table = table.name, "table ensured");
    }
    Ok(())
}
