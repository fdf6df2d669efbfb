//! Runtime settings read from the environment (after `.env` is loaded with dotenvy).

use crate::error::ConfigError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use url::Url;

pub const PREZEL_DB_URL: &str = "PREZEL_DB_URL";
pub const DATABASE_URL: &str = "DATABASE_URL";
pub const PREZEL_DB_AUTH_TOKEN: &str = "PREZEL_DB_AUTH_TOKEN";
pub const DB_MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_PORT: u16 = 3000;

/// Where the database lives. File databases are SQLite; network databases go over PostgreSQL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DbLocation {
    /// Path to a SQLite file, or `:memory:`, plus any query options given with it.
    File { path: String, options: Option<String> },
    /// Network URL, credentials already applied.
    Network(Url),
}

#[derive(Clone, Debug)]
pub struct DbSettings {
    /// URL exactly as configured, before normalisation.
    pub raw_url: String,
    pub location: DbLocation,
    pub auth_token: Option<String>,
    pub max_connections: u32,
}

impl DbSettings {
    /// Connection URL understood by the sqlx `any` driver.
    pub fn connect_url(&self) -> String {
        match &self.location {
            DbLocation::File { path, .. } if path == ":memory:" => "sqlite::memory:".into(),
            DbLocation::File { path, options: Some(options) } => format!("sqlite://{}?{}", path, options),
            DbLocation::File { path, options: None } => format!("sqlite://{}?mode=rwc", path),
            DbLocation::Network(url) => url.to_string(),
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self.location, DbLocation::File { .. })
    }
}

#[derive(Clone, Debug)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerSettings {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub db: DbSettings,
    pub server: ServerSettings,
}

impl Settings {
    /// Load `.env` (when present) into the process environment, then read settings.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
        }
        Self::from_env()
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`, so callers (and tests) control the source.
    /// `PREZEL_DB_URL` wins over `DATABASE_URL`; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let raw_url = get(PREZEL_DB_URL)
            .or_else(|| get(DATABASE_URL))
            .ok_or(ConfigError::MissingEnv("PREZEL_DB_URL, DATABASE_URL"))?;
        let auth_token = get(PREZEL_DB_AUTH_TOKEN);
        let location = parse_location(&raw_url, auth_token.as_deref())?;

        let max_connections = match get(DB_MAX_CONNECTIONS) {
            Some(v) => v
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: DB_MAX_CONNECTIONS,
                    value: v,
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let mut server = ServerSettings::default();
        if let Some(host) = get("HOST") {
            server.host = host
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name: "HOST", value: host })?;
        }
        if let Some(port) = get("PORT") {
            server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name: "PORT", value: port })?;
        }

        Ok(Settings {
            db: DbSettings {
                raw_url,
                location,
                auth_token,
                max_connections,
            },
            server,
        })
    }
}

/// Classify a configured URL. Bare paths and `file:` / `sqlite:` URLs are SQLite files;
/// `postgres://` and `postgresql://` are network databases and take the auth token as password.
pub fn parse_location(raw: &str, auth_token: Option<&str>) -> Result<DbLocation, ConfigError> {
    if let Some(rest) = raw.strip_prefix("file:").or_else(|| raw.strip_prefix("sqlite:")) {
        let rest = rest.trim_start_matches("//");
        let (path, options) = match rest.split_once('?') {
            Some((path, query)) if !query.is_empty() => (path, Some(query.to_string())),
            Some((path, _)) => (path, None),
            None => (rest, None),
        };
        if path.is_empty() {
            return Err(ConfigError::UnsupportedUrl(raw.to_string()));
        }
        return Ok(DbLocation::File {
            path: path.to_string(),
            options,
        });
    }

    if !raw.contains("://") {
        return Ok(DbLocation::File {
            path: raw.to_string(),
            options: None,
        });
    }

    let mut url = Url::parse(raw).map_err(|_| ConfigError::UnsupportedUrl(raw.to_string()))?;
    match url.scheme() {
        "postgres" | "postgresql" => {
            if let Some(token) = auth_token {
                url.set_password(Some(token))
                    .map_err(|_| ConfigError::UnsupportedUrl(raw.to_string()))?;
            }
            Ok(DbLocation::Network(url))
        }
        _ => Err(ConfigError::UnsupportedUrl(raw.to_string())),
    }
}
