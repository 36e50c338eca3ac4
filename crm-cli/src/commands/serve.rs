//! HTTP server command
//!
//! Runs the CRM HTTP API against Postgres, or against an in-memory store
//! with `--in-memory` for demos and manual testing.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use crm_server::db::{create_pool_with_options, migrations, MemoryStore};
use crm_server::{run_server, AppState, Clock, ServerConfig, SystemClock};

use crate::config::{CrmConfig, MISSING_DATABASE_URL};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default from config: 127.0.0.1:3030)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// IANA timezone used for attendance windows (e.g. Asia/Tashkent)
    #[arg(long)]
    pub timezone: Option<String>,

    /// Keep all data in memory instead of Postgres (database URL is ignored)
    #[arg(long)]
    pub in_memory: bool,

    /// Skip running migrations at startup
    #[arg(long)]
    pub no_migrate: bool,
}

pub fn build_clock(timezone: Option<&str>) -> Result<Arc<dyn Clock>> {
    match timezone {
        Some(name) => {
            let clock = SystemClock::from_tz_name(name).map_err(anyhow::Error::msg)?;
            tracing::info!(timezone = name, "attendance windows use configured timezone");
            Ok(Arc::new(clock))
        }
        None => Ok(Arc::new(SystemClock::local())),
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = CrmConfig::load()?;

    let server_config = ServerConfig {
        bind_addr: args.bind.unwrap_or(config.server.bind),
        cors_permissive: args.cors_permissive || config.server.cors_permissive,
    };
    let clock = build_clock(args.timezone.as_deref().or(config.server.timezone.as_deref()))?;

    let state = if args.in_memory {
        tracing::warn!("Using in-memory store; data is lost on shutdown");
        AppState::in_memory(Arc::new(MemoryStore::new()), clock)
    } else {
        let database_url = args
            .database_url
            .or(config.database.url)
            .context(MISSING_DATABASE_URL)?;

        let pool = create_pool_with_options(&database_url, config.database.max_connections)
            .await
            .context("Failed to create database pool")?;

        if !args.no_migrate {
            migrations::run(&pool)
                .await
                .context("Failed to run migrations")?;
        }

        AppState::postgres(pool, clock)
    };

    tracing::info!("Starting crm server on {}", server_config.bind_addr);

    run_server(state, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
