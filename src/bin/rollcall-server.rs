// ABOUTME: Server binary for the Rollcall classroom administration backend
// ABOUTME: Loads configuration, initializes storage, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Rollcall Server Binary
//!
//! This binary starts the Rollcall HTTP API with configuration drawn from
//! the environment and an optional command-line port override.

use anyhow::Result;
use clap::Parser;
use rollcall::{
    config::environment::ServerConfig,
    context::ServerResources,
    database_plugins::{factory::Database, DatabaseProvider},
    logging,
    server::RollcallServer,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "rollcall-server")]
#[command(about = "Rollcall - administrative backend for a classroom notification service")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (sqlite:<path> or memory://)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Containerized environments sometimes pass unexpected arguments; fall
    // back to defaults rather than refusing to start.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration");
            Args {
                http_port: None,
                database_url: None,
            }
        }
    };

    // Initialize production logging
    logging::init_from_env()?;

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url =
            rollcall::config::environment::DatabaseUrl::parse_url(&database_url)?;
    }

    info!("Starting Rollcall server");
    info!("Configuration: {}", config.summary());

    // Initialize the database
    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!(
        "Database initialized successfully: {}",
        database.backend_info()
    );

    // Assemble shared resources and the server
    let config = Arc::new(config);
    let resources = Arc::new(ServerResources::new(database, config.clone()));
    let server = RollcallServer::new(resources);

    display_available_endpoints(&config);

    if let Err(e) = server.run(config.http_port).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints with their port
fn display_available_endpoints(config: &ServerConfig) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("Roster:");
    info!("   Register Students:  POST http://{host}:{port}/api/register");
    info!("   Common Students:    GET  http://{host}:{port}/api/commonstudents?teachers=a,b");
    info!("   Suspend Student:    POST http://{host}:{port}/api/suspend");
    info!("Notifications:");
    info!("   Resolve Recipients: POST http://{host}:{port}/api/retrievefornotifications");
    info!("Monitoring:");
    info!("   Health Check:       GET  http://{host}:{port}/health");
    info!("   Readiness Check:    GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
