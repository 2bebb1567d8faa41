///! Fetch command - download the close-approach dataset

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use neowatch_core::extract::download_cad_json;

use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Write the dataset here instead of the configured path
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub async fn execute(args: FetchArgs, config: &AppConfig) -> Result<()> {
    let path = args.output.unwrap_or_else(|| config.cad_json_path.clone());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    download_cad_json(&path)
        .await
        .context("Failed to download the close-approach dataset")?;

    println!("Close-approach dataset written to {}", path.display());
    Ok(())
}
