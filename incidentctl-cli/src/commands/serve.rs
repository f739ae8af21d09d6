//! HTTP server command
//!
//! Connects the pool, optionally creates the Incidents table, and runs the
//! API until Ctrl+C/SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use incidentctl_server::db::{create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
use incidentctl_server::{run_server, CorsMode, IncidentRepo, ServerConfig, Session};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "INCIDENTCTL_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Database URL (postgres://... or sqlite://...)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "INCIDENTCTL_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Create the Incidents table if it does not exist
    #[arg(long)]
    pub init_schema: bool,

    /// Restrict CORS to localhost origins instead of allowing every origin
    #[arg(long)]
    pub cors_localhost: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    tracing::info!(bind = %args.bind, max_connections = args.max_connections, "Starting incidentctl server");

    let pool = create_pool_with_options(&database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    if args.init_schema {
        let mut session = Session::acquire(&pool)
            .await
            .context("Failed to acquire connection for schema setup")?;
        IncidentRepo::new(&mut session)
            .ensure_table()
            .await
            .context("Failed to create Incidents table")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors: if args.cors_localhost {
            CorsMode::Localhost
        } else {
            CorsMode::Permissive
        },
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
