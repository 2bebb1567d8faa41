///! Close-approach loader - SSD API JSON parser
///!
///! The dataset is column-oriented: a `fields` array names the columns and
///! each `data` entry is one row of cells. Columns are located by name, not
///! position, so field reordering upstream doesn't break the load.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::helpers::cd_to_datetime;
use crate::model::CloseApproach;

#[derive(Debug, Deserialize)]
struct CadDocument {
    fields: Vec<String>,
    #[serde(default)]
    data: Vec<Vec<Value>>,
}

/// Load close approaches from an SSD close-approach JSON file.
pub async fn load_approaches(path: impl AsRef<Path>) -> Result<Vec<CloseApproach>> {
    let path = path.as_ref();
    tracing::info!("Loading close-approach dataset from: {}", path.display());

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::read(path, e))?;
    let approaches = parse_approaches_json(&content)?;

    tracing::info!("Loaded {} close approaches", approaches.len());
    Ok(approaches)
}

/// Parse close-approach JSON content, preserving row order.
pub fn parse_approaches_json(content: &str) -> Result<Vec<CloseApproach>> {
    let doc: CadDocument = serde_json::from_str(content)?;

    let des_idx = field_index(&doc.fields, "des")?;
    let cd_idx = field_index(&doc.fields, "cd")?;
    let dist_idx = field_index(&doc.fields, "dist")?;
    let v_rel_idx = field_index(&doc.fields, "v_rel")?;

    let mut approaches = Vec::with_capacity(doc.data.len());
    for (i, row) in doc.data.iter().enumerate() {
        let row_no = i + 1;

        let designation = string_cell(row, des_idx, "des", row_no)?;
        let cd = string_cell(row, cd_idx, "cd", row_no)?;
        let time = cd_to_datetime(&cd)?;
        let distance = float_cell(row, dist_idx, "dist", row_no)?;
        let velocity = float_cell(row, v_rel_idx, "v_rel", row_no)?;

        approaches.push(CloseApproach::new(designation, time, distance, velocity));
    }

    tracing::debug!("Parsed {} close-approach rows", approaches.len());
    Ok(approaches)
}

fn field_index(fields: &[String], name: &'static str) -> Result<usize> {
    fields
        .iter()
        .position(|f| f == name)
        .ok_or(Error::MissingField(name))
}

fn string_cell(row: &[Value], idx: usize, field: &str, row_no: usize) -> Result<String> {
    row.get(idx)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::malformed_record(row_no, format!("missing '{field}' value")))
}

/// The SSD API writes numbers as strings; accept a bare number too.
fn float_cell(row: &[Value], idx: usize, field: &str, row_no: usize) -> Result<f64> {
    let cell = row
        .get(idx)
        .ok_or_else(|| Error::malformed_record(row_no, format!("missing '{field}' value")))?;

    match cell {
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| {
            Error::malformed_record(row_no, format!("unparseable '{field}' value {s:?}"))
        }),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| Error::malformed_record(row_no, format!("unparseable '{field}' value"))),
        other => Err(Error::malformed_record(
            row_no,
            format!("unparseable '{field}' value {other}"),
        )),
    }
}
