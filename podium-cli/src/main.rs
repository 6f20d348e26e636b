//! podium CLI - competitions, sports and stages over HTTP
//!
//! Subcommands:
//! - `serve`: run the JSON API backed by Postgres

use anyhow::Result;
use clap::{Parser, Subcommand};

mod serve;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "podium",
    author,
    version,
    about = "Competition, sport and stage catalogue served over HTTP",
    long_about = "Manage competitions, sports, the sports each competition runs and the \
                  stages of every pairing. Read endpoints return nested views built from \
                  a single joined query."
)]
struct Cli {
    /// Debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Populate the environment before clap reads its env fallbacks
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    let result = match cli.command {
        Commands::Serve(args) => serve::run_serve(args).await,
    };

    tracing_setup::shutdown_otel();
    result
}
