//! Configuration file handling
//!
//! Precedence, lowest first: built-in defaults, `~/.crm/config.toml`
//! (or `$CRM_CONFIG`), environment variables, command-line flags.

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crm_server::db::pool::DEFAULT_MAX_CONNECTIONS;

pub const MISSING_DATABASE_URL: &str =
    "DATABASE_URL not set. Use --database-url, DATABASE_URL, or ~/.crm/config.toml";

/// Effective configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrmConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
    pub cors_permissive: bool,
    /// IANA timezone for attendance windows; server-local time when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3030)),
            cors_permissive: false,
            timezone: None,
        }
    }
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl CrmConfig {
    /// Config file path: `$CRM_CONFIG` or `~/.crm/config.toml`
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var("CRM_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".crm/config.toml")
    }

    /// Load file (if present) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env()?;
        Ok(config)
    }

    /// Parse a config file; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid TOML in config file: {}", path.display()))
    }

    /// Apply `DATABASE_URL`, `CRM_BIND` and `CRM_TIMEZONE`.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(
            env::var("DATABASE_URL").ok(),
            env::var("CRM_BIND").ok(),
            env::var("CRM_TIMEZONE").ok(),
        )
    }

    fn apply_overrides(
        &mut self,
        database_url: Option<String>,
        bind: Option<String>,
        timezone: Option<String>,
    ) -> Result<()> {
        if let Some(url) = database_url.filter(|u| !u.is_empty()) {
            self.database.url = Some(url);
        }
        if let Some(bind) = bind.filter(|b| !b.is_empty()) {
            self.server.bind = bind
                .parse()
                .with_context(|| format!("CRM_BIND is not a socket address: {}", bind))?;
        }
        if let Some(tz) = timezone.filter(|t| !t.is_empty()) {
            self.server.timezone = Some(tz);
        }
        Ok(())
    }

    /// Write this config as TOML, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
    }
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a default config file
    Init(InitArgs),
    /// Print the effective configuration (file + environment)
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Path => {
            println!("{}", CrmConfig::config_path().display());
            Ok(())
        }
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let path = CrmConfig::config_path();
    if path.exists() && !args.force {
        anyhow::bail!(
            "Config already exists at {}\n\nUse --force to overwrite",
            path.display()
        );
    }

    CrmConfig::default().write_to(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn run_show() -> Result<()> {
    let mut shown = CrmConfig::load()?;
    if shown.database.url.is_some() {
        shown.database.url = Some("<set>".into());
    }
    print!("{}", toml::to_string_pretty(&shown).context("Failed to serialize config")?);
    Ok(())
}
