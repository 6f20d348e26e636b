//! `podium serve`: run the HTTP API over Postgres

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;
use podium_server::config::{DEFAULT_MAX_CONNECTIONS, DEFAULT_SCHEMA};
use podium_server::{DatabaseConfig, SchemaName, ServerConfig};

const DEFAULT_PORT: u16 = 5000;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, env = "PODIUM_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to bind to [default: 5000, or FLASK_PORT when set]
    #[arg(long, short = 'p', env = "PODIUM_PORT")]
    pub port: Option<u16>,

    /// Postgres connection string; when unset, POSTGRES_* variables are used
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Schema holding the competition tables
    #[arg(long, env = "PODIUM_DB_SCHEMA", default_value = DEFAULT_SCHEMA)]
    pub schema: String,

    /// Upper bound on pooled connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Do not create missing schema objects at startup
    #[arg(long)]
    pub skip_schema_init: bool,
}

impl ServeArgs {
    fn bind_addr(&self) -> Result<SocketAddr> {
        let port = match self.port {
            Some(port) => port,
            None => match std::env::var("FLASK_PORT") {
                Ok(raw) => raw
                    .parse()
                    .with_context(|| format!("FLASK_PORT is not a valid port: {raw}"))?,
                Err(_) => DEFAULT_PORT,
            },
        };
        Ok(SocketAddr::new(self.host, port))
    }

    fn database(&self) -> Result<DatabaseConfig> {
        let schema = SchemaName::new(&self.schema).context("invalid --schema")?;

        let config = match &self.database_url {
            Some(url) => DatabaseConfig::from_url(url, schema).context("invalid --database-url")?,
            None => DatabaseConfig {
                schema,
                ..DatabaseConfig::from_env().context("invalid POSTGRES_* configuration")?
            },
        };

        Ok(config.with_max_connections(self.max_connections))
    }
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database = args.database()?;
    let server = ServerConfig {
        bind_addr: args.bind_addr()?,
        cors_permissive: args.cors_permissive,
    };

    tracing::info!(
        schema = database.schema.as_str(),
        max_connections = database.max_connections,
        "Starting podium server on {}",
        server.bind_addr
    );

    let pool = podium_server::connect(&database, !args.skip_schema_init)
        .await
        .context("Failed to prepare database")?;

    let served = podium_server::run_server(pool.clone(), server).await;
    pool.close().await;

    served.context("Server error")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServeArgs {
        let mut argv = vec!["serve"];
        argv.extend_from_slice(args);
        ServeArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn explicit_flags() {
        let args = parse(&[
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--schema",
            "events",
            "--max-connections",
            "12",
        ]);

        assert_eq!(args.bind_addr().unwrap(), "0.0.0.0:8080".parse().unwrap());
        assert_eq!(args.schema, "events");
        assert_eq!(args.max_connections, 12);
    }

    #[test]
    fn url_config_keeps_schema_and_pool_size() {
        let args = parse(&[
            "--database-url",
            "postgres://podium@db.internal/podium",
            "--schema",
            "events",
            "--max-connections",
            "0",
        ]);

        let database = args.database().unwrap();
        assert_eq!(database.schema.as_str(), "events");
        assert_eq!(database.max_connections, 1);
        assert_eq!(database.connect.get_host(), "db.internal");
    }

    #[test]
    fn invalid_schema_is_rejected() {
        let args = parse(&[
            "--database-url",
            "postgres://podium@localhost/podium",
            "--schema",
            "Drop Table",
        ]);
        assert!(args.database().is_err());
    }
}
