//! Database configuration - connection options and schema namespace
//!
//! Loaded from environment variables:
//! - `DATABASE_URL`: full connection string, takes precedence when set
//! - `POSTGRES_HOST`, `POSTGRES_PORT`, `POSTGRES_DB`, `POSTGRES_USER`,
//!   `POSTGRES_PASSWORD`: discrete parts used when `DATABASE_URL` is absent
//! - `DEBUG_MODE`: anything but `false` forces the host to `localhost`
//! - `PODIUM_DB_SCHEMA`: schema holding the tables (default: competition_schema)

use std::str::FromStr;

use once_cell::sync::Lazy;
use podium_core::ValidationError;
use regex::Regex;
use sqlx::postgres::PgConnectOptions;

/// Default schema namespace
pub const DEFAULT_SCHEMA: &str = "competition_schema";

/// Default maximum connections for the pool
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Lowercase SQL identifier, at most 63 bytes (Postgres NAMEDATALEN - 1)
static SCHEMA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z_][a-z0-9_]{0,62}$").expect("invalid schema regex"));

/// Validated schema name.
///
/// The only value ever interpolated into SQL text, so it is restricted to a
/// plain lowercase identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaName(String);

impl SchemaName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::missing("schema"));
        }

        if !SCHEMA_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "schema",
                reason: "must be a lowercase identifier of at most 63 characters",
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SchemaName {
    fn default() -> Self {
        Self(DEFAULT_SCHEMA.to_owned())
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },

    #[error("invalid database url: {0}")]
    InvalidUrl(#[source] sqlx::Error),

    #[error("invalid schema: {0}")]
    Schema(#[from] ValidationError),
}

/// Everything needed to open the pool
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connect: PgConnectOptions,
    pub schema: SchemaName,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Config from an explicit connection string.
    pub fn from_url(url: &str, schema: SchemaName) -> Result<Self, ConfigError> {
        let connect = PgConnectOptions::from_str(url).map_err(ConfigError::InvalidUrl)?;
        Ok(Self {
            connect,
            schema,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        })
    }

    /// Config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Config from an arbitrary variable lookup (for testing).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let schema = match lookup("PODIUM_DB_SCHEMA") {
            Some(s) => SchemaName::new(&s)?,
            None => SchemaName::default(),
        };

        if let Some(url) = lookup("DATABASE_URL") {
            return Self::from_url(&url, schema);
        }

        let host = match lookup("DEBUG_MODE").as_deref() {
            Some("false") => lookup("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_owned()),
            _ => "localhost".to_owned(),
        };

        let mut connect = PgConnectOptions::new().host(&host);

        if let Some(port) = lookup("POSTGRES_PORT") {
            let port = port.parse::<u16>().map_err(|e| ConfigError::InvalidVar {
                name: "POSTGRES_PORT",
                reason: e.to_string(),
            })?;
            connect = connect.port(port);
        }
        if let Some(db) = lookup("POSTGRES_DB") {
            connect = connect.database(&db);
        }
        if let Some(user) = lookup("POSTGRES_USER") {
            connect = connect.username(&user);
        }
        if let Some(password) = lookup("POSTGRES_PASSWORD") {
            connect = connect.password(&password);
        }

        Ok(Self {
            connect,
            schema,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        })
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }

    /// Connection options with `search_path` pinned to the schema.
    pub fn connect_options(&self) -> PgConnectOptions {
        self.connect
            .clone()
            .options([("search_path", self.schema.as_str())])
    }
}
