///! CLI surface: argument types and one module per subcommand

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use neowatch_core::{load_approaches, load_neos, NeoDatabase};

use crate::config::AppConfig;

pub mod fetch;
pub mod inspect;
pub mod query;
pub mod search;

#[derive(Debug, Parser)]
#[command(name = "neowatch", version, about = "Explore near-Earth object close approaches")]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = "neowatch.toml")]
    pub config: PathBuf,

    /// Override the NEO catalog CSV path
    #[arg(long, global = true, value_name = "FILE")]
    pub neo_csv: Option<PathBuf>,

    /// Override the close-approach JSON path
    #[arg(long, global = true, value_name = "FILE")]
    pub cad_json: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Filter close approaches and print or export the matches
    Query(query::QueryArgs),
    /// Look up one NEO by designation or name
    Inspect(inspect::InspectArgs),
    /// Fuzzy-search the catalog by designation or name
    Search(search::SearchArgs),
    /// Download a fresh close-approach dataset
    Fetch(fetch::FetchArgs),
}

impl Cli {
    /// Read the config file and fold the global flag overrides into it.
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load_or_default(&self.config)
            .context(format!("Failed to load config: {}", self.config.display()))?;

        if let Some(path) = &self.neo_csv {
            config.neo_csv_path = path.clone();
        }
        if let Some(path) = &self.cad_json {
            config.cad_json_path = path.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }

        Ok(config)
    }
}

/// Load both datasets and build the linked database.
///
/// The database is built fresh per invocation and handed to the command;
/// nothing is held in global state.
pub async fn build_database(config: &AppConfig) -> Result<NeoDatabase> {
    let neos = load_neos(&config.neo_csv_path)
        .await
        .context("Failed to load the NEO catalog")?;
    let approaches = load_approaches(&config.cad_json_path)
        .await
        .context("Failed to load the close-approach dataset")?;

    let db = NeoDatabase::new(neos, approaches);
    tracing::info!("Database ready: {}", db.stats());
    Ok(db)
}
