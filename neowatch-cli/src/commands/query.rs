///! Query command - filter close approaches

use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Args;
use neowatch_core::database::{
    Bound, DateFilter, DiameterFilter, DistanceFilter, FilterSet, HazardousFilter, VelocityFilter,
};
use neowatch_core::{ApproachSummary, CloseApproach};

use crate::config::AppConfig;
use crate::write;

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Only approaches on this date (YYYY-MM-DD)
    #[arg(long, conflicts_with_all = ["start_date", "end_date"])]
    pub date: Option<NaiveDate>,

    /// Only approaches on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Only approaches on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Only approaches at least this far from Earth, in au
    #[arg(long, value_name = "AU")]
    pub min_distance: Option<f64>,

    /// Only approaches at most this far from Earth, in au
    #[arg(long, value_name = "AU")]
    pub max_distance: Option<f64>,

    /// Only approaches at least this fast, in km/s
    #[arg(long, value_name = "KM_S")]
    pub min_velocity: Option<f64>,

    /// Only approaches at most this fast, in km/s
    #[arg(long, value_name = "KM_S")]
    pub max_velocity: Option<f64>,

    /// Only NEOs at least this large, in km (excludes unmeasured objects)
    #[arg(long, value_name = "KM")]
    pub min_diameter: Option<f64>,

    /// Only NEOs at most this large, in km (excludes unmeasured objects)
    #[arg(long, value_name = "KM")]
    pub max_diameter: Option<f64>,

    /// Only potentially hazardous objects
    #[arg(long, conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only objects not flagged as potentially hazardous
    #[arg(long)]
    pub not_hazardous: bool,

    /// Maximum number of results; 0 means no limit
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// Write results to this file (.csv or .json) instead of stdout
    #[arg(long, value_name = "FILE")]
    pub outfile: Option<PathBuf>,
}

pub async fn execute(args: QueryArgs, config: &AppConfig) -> Result<()> {
    let filters = build_filters(&args)?;
    let db = super::build_database(config).await?;

    let results: Vec<&CloseApproach> = if args.limit == 0 {
        db.query(&filters).collect()
    } else {
        db.query(&filters).take(args.limit).collect()
    };

    match &args.outfile {
        Some(path) => {
            let summaries: Vec<ApproachSummary> =
                results.iter().map(|a| a.summary(db.neo_of(a))).collect();
            match path.extension().and_then(|e| e.to_str()) {
                Some("csv") => write::write_to_csv(&summaries, path)?,
                Some("json") => write::write_to_json(&summaries, path)?,
                _ => bail!("Unsupported output format; use a .csv or .json file"),
            }
        }
        None => {
            if results.is_empty() {
                println!("No close approaches match the query.");
            }
            for approach in &results {
                println!("{}", db.describe_approach(approach));
            }
        }
    }

    Ok(())
}

/// Translate the flag set into an ordered filter list.
///
/// Order matches the flag documentation: date bounds first, then distance,
/// velocity, diameter, and the hazardous flag.
fn build_filters(args: &QueryArgs) -> Result<FilterSet> {
    if let (Some(start), Some(end)) = (args.start_date, args.end_date) {
        if start > end {
            bail!("--start-date {start} is after --end-date {end}");
        }
    }
    for (min, max, flag) in [
        (args.min_distance, args.max_distance, "distance"),
        (args.min_velocity, args.max_velocity, "velocity"),
        (args.min_diameter, args.max_diameter, "diameter"),
    ] {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                bail!("--min-{flag} {min} is greater than --max-{flag} {max}");
            }
        }
    }

    let mut filters = FilterSet::new();

    if let Some(date) = args.date {
        filters.push(DateFilter::new(Bound::Exactly, date));
    }
    if let Some(start) = args.start_date {
        filters.push(DateFilter::new(Bound::AtLeast, start));
    }
    if let Some(end) = args.end_date {
        filters.push(DateFilter::new(Bound::AtMost, end));
    }
    if let Some(value) = args.min_distance {
        filters.push(DistanceFilter::new(Bound::AtLeast, value));
    }
    if let Some(value) = args.max_distance {
        filters.push(DistanceFilter::new(Bound::AtMost, value));
    }
    if let Some(value) = args.min_velocity {
        filters.push(VelocityFilter::new(Bound::AtLeast, value));
    }
    if let Some(value) = args.max_velocity {
        filters.push(VelocityFilter::new(Bound::AtMost, value));
    }
    if let Some(value) = args.min_diameter {
        filters.push(DiameterFilter::new(Bound::AtLeast, value));
    }
    if let Some(value) = args.max_diameter {
        filters.push(DiameterFilter::new(Bound::AtMost, value));
    }
    if args.hazardous {
        filters.push(HazardousFilter::new(true));
    }
    if args.not_hazardous {
        filters.push(HazardousFilter::new(false));
    }

    Ok(filters)
}
