//! Declarative schema-migration configuration: where generated migration files go,
//! which file holds the schema definition, and how a migration tool reaches the database.
//! No migration engine lives here.

use crate::config::settings::{DbLocation, DbSettings};
use crate::schema;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_OUT_DIR: &str = "./migrations";
pub const DEFAULT_SCHEMA_FILE: &str = "./src/schema.rs";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Sqlite,
    Postgresql,
}

const REDACTED: &str = "<redacted>";

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbCredentials {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl fmt::Debug for DbCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbCredentials")
            .field("url", &self.url)
            .field("auth_token", &self.auth_token.as_ref().map(|_| REDACTED))
            .finish()
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationConfig {
    pub dialect: Dialect,
    pub out: PathBuf,
    pub schema: PathBuf,
    pub db_credentials: DbCredentials,
}

impl MigrationConfig {
    /// Build the config for the configured database with default paths.
    /// File databases are addressed as `file:<path>`; network URLs keep the raw URL and token.
    pub fn from_settings(db: &DbSettings) -> Self {
        let (dialect, db_credentials) = match &db.location {
            DbLocation::File { path, .. } => (
                Dialect::Sqlite,
                DbCredentials {
                    url: format!("file:{}", path),
                    auth_token: None,
                },
            ),
            DbLocation::Network(_) => (
                Dialect::Postgresql,
                DbCredentials {
                    url: db.raw_url.clone(),
                    auth_token: db.auth_token.clone(),
                },
            ),
        };
        MigrationConfig {
            dialect,
            out: PathBuf::from(DEFAULT_OUT_DIR),
            schema: PathBuf::from(DEFAULT_SCHEMA_FILE),
            db_credentials,
        }
    }

    /// Copy safe to log: the auth token is masked.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.db_credentials.auth_token.is_some() {
            copy.db_credentials.auth_token = Some(REDACTED.to_string());
        }
        copy
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// DDL a migration tool would emit for the current table definitions.
    pub fn schema_sql(&self) -> String {
        schema::schema_sql()
    }
}
