///! Search command - fuzzy catalog lookup

use anyhow::Result;
use clap::Args;
use neowatch_core::database::{search_neos, DEFAULT_THRESHOLD};

use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Designation or name to look for
    pub query: String,

    /// Similarity threshold for fuzzy matching (0.0 to 1.0)
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,
}

pub async fn execute(args: SearchArgs, config: &AppConfig) -> Result<()> {
    let db = super::build_database(config).await?;

    let hits = search_neos(&args.query, &db, args.threshold);
    if hits.is_empty() {
        println!("No NEO matches '{}'.", args.query);
        return Ok(());
    }

    for neo in hits {
        println!("{neo}");
    }

    Ok(())
}
