///! Inspect command - look up one NEO

use anyhow::{bail, Result};
use clap::Args;

use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Primary designation of the NEO, e.g. "433"
    #[arg(long, conflicts_with = "name")]
    pub pdes: Option<String>,

    /// IAU name of the NEO (exact, case-sensitive), e.g. "Eros"
    #[arg(long)]
    pub name: Option<String>,

    /// Also list every known close approach of the NEO
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

pub async fn execute(args: InspectArgs, config: &AppConfig) -> Result<()> {
    let db = super::build_database(config).await?;

    let neo = match (&args.pdes, &args.name) {
        (Some(pdes), None) => db.get_neo_by_designation(pdes),
        (None, Some(name)) => db.get_neo_by_name(name),
        _ => bail!("Provide exactly one of --pdes or --name"),
    };

    // A lookup miss is an answer, not an error.
    let Some(neo) = neo else {
        println!("No matching NEO found.");
        return Ok(());
    };

    println!("{neo}");
    if args.verbose {
        for approach in db.approaches_of(neo) {
            println!("- {}", db.describe_approach(approach));
        }
    }

    Ok(())
}
