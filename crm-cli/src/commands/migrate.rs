//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use crm_server::db::{create_pool, migrations};

use crate::config::{CrmConfig, MISSING_DATABASE_URL};

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = match args.database_url {
        Some(url) => url,
        None => CrmConfig::load()?
            .database
            .url
            .context(MISSING_DATABASE_URL)?,
    };

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    println!("Migrations applied");
    Ok(())
}
