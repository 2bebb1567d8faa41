use anyhow::Result;
use clap::Parser;

use neowatch_cli::commands::{self, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    let _logging_guard = neowatch_cli::logging::init_logging("logs", "neowatch", &config.log_level);

    tracing::debug!("Neowatch starting with config: {:?}", config);

    match cli.command {
        Commands::Query(args) => commands::query::execute(args, &config).await,
        Commands::Inspect(args) => commands::inspect::execute(args, &config).await,
        Commands::Search(args) => commands::search::execute(args, &config).await,
        Commands::Fetch(args) => commands::fetch::execute(args, &config).await,
    }
}
