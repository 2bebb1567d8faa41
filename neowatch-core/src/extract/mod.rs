///! Dataset loaders
///!
///! Each loader splits into an async file read and a synchronous parse so
///! the parsing stays unit-testable without a runtime. Loaders surface
///! malformed records as errors; data gaps the record types can normalize
///! (missing name, missing diameter) are not errors.

// ============ NEO Catalog (CSV) ============
mod neo_csv;
pub use neo_csv::{load_neos, parse_neos_csv};

// ============ Close Approaches (JSON) ============
mod cad_json;
pub use cad_json::{load_approaches, parse_approaches_json};

// ============ Dataset Fetcher ============
mod download;
pub use download::download_cad_json;
