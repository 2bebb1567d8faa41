///! Close-approach dataset fetcher
///!
///! Fetches a fresh copy of the close-approach dataset from the JPL SSD API.
///! The NEO catalog CSV is a one-off export with no stable download URL and
///! is expected to ship alongside the binary.

use std::path::Path;

use crate::error::{Error, Result};

const CAD_API_URL: &str = "https://ssd-api.jpl.nasa.gov/cad.api";

/// Download the close-approach dataset and write it to `output_path`.
pub async fn download_cad_json(output_path: impl AsRef<Path>) -> Result<()> {
    tracing::info!("Downloading close-approach dataset from JPL SSD...");

    let response = reqwest::get(CAD_API_URL).await?;
    if !response.status().is_success() {
        return Err(Error::HttpStatus(response.status()));
    }

    let content = response.text().await?;

    let output_path = output_path.as_ref();
    tokio::fs::write(output_path, content)
        .await
        .map_err(|e| Error::write(output_path, e))?;

    tracing::info!(
        "Downloaded close-approach dataset to: {}",
        output_path.display()
    );

    Ok(())
}
