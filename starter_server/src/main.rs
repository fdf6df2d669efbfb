//! Starter server: reads settings from the environment (and `.env`), opens the database,
//! ensures the tables exist and serves the counter page with the docs and health routes.
//!
//! Run from repo root: `cargo run -p starter-server`

use prezel_starter::{app, connect, ensure_tables, AppState, MigrationConfig, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("prezel_starter=info,starter_server=info,tower_http=info")
            }),
        )
        .init();

    // missing database configuration is fatal
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    let migrations = MigrationConfig::from_settings(&settings.db);
    tracing::debug!(config = %migrations.redacted().to_json()?, "schema migration config");

    let pool = connect(&settings.db).await?;
    ensure_tables(&pool).await?;
    let state = AppState::new(pool);

    let listener = TcpListener::bind(settings.server.addr()).await?;
    tracing::info!("starter listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
