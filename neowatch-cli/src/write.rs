///! Query result writers
///!
///! Both writers produce a valid file for an empty result set: the CSV
///! keeps its header row, the JSON is an empty array.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use neowatch_core::ApproachSummary;

/// Column order matches the field order of [`ApproachSummary`].
const CSV_HEADER: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

pub fn write_to_csv(results: &[ApproachSummary], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .context(format!("Failed to create CSV file: {}", path.display()))?;

    writer.write_record(CSV_HEADER)?;
    for record in results {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} results to {}", results.len(), path.display());
    Ok(())
}

pub fn write_to_json(results: &[ApproachSummary], path: &Path) -> Result<()> {
    let file = File::create(path)
        .context(format!("Failed to create JSON file: {}", path.display()))?;
    serde_json::to_writer_pretty(file, results)?;

    tracing::info!("Wrote {} results to {}", results.len(), path.display());
    Ok(())
}
