//! prezel starter: an axum page backed by an SQL clap counter, plus the server-side
//! pieces of the documentation site.

pub mod cache;
pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod schema;
pub mod service;
pub mod state;
pub mod store;
pub mod views;

pub use cache::PageCache;
pub use config::{MigrationConfig, Settings};
pub use error::{AppError, ConfigError};
pub use openapi::ApiDoc;
pub use routes::{app, common_routes_with_ready, docs_routes, starter_routes};
pub use service::{ClapCount, ClapCounter, ClapStore, SqlClapStore};
pub use state::AppState;
pub use store::{connect, ensure_tables};
