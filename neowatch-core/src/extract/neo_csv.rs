///! NEO catalog loader - CSV parser
///!
///! Reads the JPL small-body catalog export. The file carries dozens of
///! columns; only the four the database needs are deserialized, the rest
///! are ignored by header name.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::NearEarthObject;

/// One catalog row, keyed by the source's column names.
#[derive(Debug, Deserialize)]
struct NeoCsvRow {
    pdes: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    pha: String,
    #[serde(default)]
    diameter: String,
}

/// Load near-Earth objects from a catalog CSV file.
pub async fn load_neos(path: impl AsRef<Path>) -> Result<Vec<NearEarthObject>> {
    let path = path.as_ref();
    tracing::info!("Loading NEO catalog from: {}", path.display());

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::read(path, e))?;
    let neos = parse_neos_csv(&content)?;

    tracing::info!("Loaded {} near-Earth objects", neos.len());
    Ok(neos)
}

/// Parse catalog CSV content, preserving row order.
pub fn parse_neos_csv(content: &str) -> Result<Vec<NearEarthObject>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut neos = Vec::new();
    for (i, result) in reader.deserialize::<NeoCsvRow>().enumerate() {
        let row = result?;
        if row.pdes.trim().is_empty() {
            return Err(Error::malformed_record(i + 1, "empty primary designation"));
        }

        // Empty name and unparseable diameter normalize to the record types'
        // unknown values; 'pha' is anything-but-Y = false, per the source.
        let name = (!row.name.is_empty()).then_some(row.name);
        let diameter = row.diameter.trim().parse::<f64>().ok();
        let hazardous = row.pha == "Y";

        neos.push(NearEarthObject::new(row.pdes, name, diameter, hazardous));
    }

    tracing::debug!("Parsed {} catalog rows", neos.len());
    Ok(neos)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
pdes,name,pha,diameter,albedo
433,Eros,N,16.84,0.25
2019 SC8,,,,
1566,Icarus,Y,1.0,
2102,Tantalus,N,,0.3
";

    #[test]
    fn test_parse_round_trip() {
        let neos = parse_neos_csv(SAMPLE_CSV).unwrap();
        assert_eq!(neos.len(), 4);

        let eros = &neos[0];
        assert_eq!(eros.designation, "433");
        assert_eq!(eros.name.as_deref(), Some("Eros"));
        assert!(!eros.hazardous);
        assert!((eros.diameter - 16.84).abs() < 1e-9);
    }

    #[test]
    fn test_parse_preserves_row_order() {
        let neos = parse_neos_csv(SAMPLE_CSV).unwrap();
        let designations: Vec<_> = neos.iter().map(|n| n.designation.as_str()).collect();
        assert_eq!(designations, ["433", "2019 SC8", "1566", "2102"]);
    }

    #[test]
    fn test_empty_fields_normalize() {
        let neos = parse_neos_csv(SAMPLE_CSV).unwrap();

        let unnamed = &neos[1];
        assert_eq!(unnamed.name, None);
        assert!(!unnamed.is_diameter_known());
        assert!(!unnamed.hazardous);

        let tantalus = &neos[3];
        assert_eq!(tantalus.name.as_deref(), Some("Tantalus"));
        assert!(!tantalus.is_diameter_known());
    }

    #[test]
    fn test_pha_flag() {
        let neos = parse_neos_csv(SAMPLE_CSV).unwrap();
        assert!(neos[2].hazardous);
        assert!(!neos[0].hazardous);
        assert!(!neos[1].hazardous);
    }

    #[test]
    fn test_unparseable_diameter_is_unknown() {
        let neos = parse_neos_csv("pdes,name,pha,diameter\n433,Eros,N,big\n").unwrap();
        assert!(!neos[0].is_diameter_known());
    }

    #[test]
    fn test_empty_designation_is_an_error() {
        let err = parse_neos_csv("pdes,name,pha,diameter\n,Eros,N,16.84\n").unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { row: 1, .. }));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let neos = parse_neos_csv("spkid,pdes,name,pha,diameter,moid\n2000433,433,Eros,N,16.84,0.15\n").unwrap();
        assert_eq!(neos[0].designation, "433");
    }

    #[tokio::test]
    async fn test_load_neos_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("neos.csv");
        tokio::fs::write(&path, SAMPLE_CSV).await.unwrap();

        let neos = load_neos(&path).await.unwrap();
        assert_eq!(neos.len(), 4);
    }

    #[tokio::test]
    async fn test_load_neos_missing_file() {
        let err = load_neos("does/not/exist.csv").await.unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
