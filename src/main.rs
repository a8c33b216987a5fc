//! People service entry point.

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use people_service::api::{create_router, AppState};
use people_service::config::Config;
use people_service::metrics;
use people_service::people::PersonStore;
use people_service::utils::shutdown_signal;

/// In-memory people record HTTP API.
#[derive(Parser, Debug)]
#[command(name = "people-service")]
#[command(about = "HTTP+JSON service exposing an in-memory people collection")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT from the environment).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Run {
        /// HTTP server port (overrides PORT from the environment).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Probe a running server with one-shot HTTP GETs.
    Probe {
        /// Base URL of the server to probe.
        #[arg(long, default_value = "http://127.0.0.1:8080")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("people_service=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::Probe { url }) => cmd_probe(&url).await,
        Some(Command::Run { port }) => cmd_run(port).await,
        None => cmd_run(args.port).await,
    }
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("PEOPLE SERVICE - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    // Show configuration summary
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Port: {}", config.port);
    println!("  Log Level: {}", config.rust_log);
    println!("  Verbose: {}", config.verbose);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Probe a running server's endpoints with one-shot GETs.
async fn cmd_probe(url: &str) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("PEOPLE SERVICE - PROBE");
    println!("======================================================================");
    println!("Target: {}", url);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .user_agent("people-service-probe/1.0")
        .build()?;

    print!("\n1. GET /status ... ");
    let response = client.get(format!("{url}/status")).send().await?;
    println!("{}", response.status());
    println!("   {}", response.text().await?);

    print!("\n2. GET /people ... ");
    let response = client.get(format!("{url}/people")).send().await?;
    println!("{}", response.status());
    let people: serde_json::Value = response.json().await?;
    println!(
        "   {} record(s)",
        people.as_array().map(|a| a.len()).unwrap_or(0)
    );
    println!("   {}", people);

    println!("\n======================================================================");
    println!("PROBE COMPLETE");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server.
async fn cmd_run(port_override: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.port = port;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    // Initialize metrics
    let metrics_handle = metrics::init_metrics();

    // Seed the store with the demo records
    let store = PersonStore::seeded();
    info!("Seeded store with {} records", store.len().await);

    let state = match metrics_handle {
        Some(handle) => AppState::with_metrics(store, handle),
        None => AppState::new(store),
    };

    // Start HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    let router = create_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
