//! Mocknest CLI - Configurable HTTP Mock Server
//!
//! Serves three static endpoints (status, usercheck, usercount) whose
//! responses are fixed at startup from CLI flags.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use mocknest::api::start_api_server;
use mocknest::config::MockConfig;

/// Mocknest - static HTTP responses for client integration testing
#[derive(Debug, Parser)]
#[command(name = "mocknest")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// User count returned by /v1/usercount
    #[arg(short = 'c', long = "howmany", default_value_t = 1000)]
    howmany: i64,

    /// Server status returned by /v1/status (e.g. up or down)
    #[arg(short = 'l', long = "myserverstatus", default_value = "up")]
    myserverstatus: String,

    /// User id that /v1/usercheck recognizes
    #[arg(short = 'u', long = "usercheck", default_value = "gigel")]
    usercheck: String,

    /// Value returned when the recognized user id is checked
    #[arg(short = 'r', long = "userresponse", default_value = "true")]
    userresponse: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs as JSON
    #[arg(long)]
    json: bool,
}

fn setup_logging(verbose: bool, json: bool) {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.json);

    let config = MockConfig {
        port: cli.port,
        server_status: cli.myserverstatus,
        user_count: cli.howmany,
        check_username: cli.usercheck,
        check_response: cli.userresponse,
    };

    tracing::info!(
        port = config.port,
        server_status = %config.server_status,
        user_count = config.user_count,
        check_username = %config.check_username,
        check_response = %config.check_response,
        "Starting mocknest"
    );

    start_api_server(config)
        .await
        .context("Mock API server failed")
}
