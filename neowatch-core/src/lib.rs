///! Neowatch core - in-memory database of near-Earth objects and their
///! close approaches to Earth.
///!
///! ## Architecture
///! - `model`: record types built from the JPL small-body catalog (CSV) and
///!   the SSD close-approach dataset (JSON)
///! - `database`: the linked, indexed store and its query engine
///! - `extract`: dataset loaders and the close-approach fetcher
///!
///! The database is built once from the two loaded collections and is
///! read-only afterwards.

// ============ Record Types ============
pub mod model;
pub use model::{ApproachSummary, CloseApproach, NearEarthObject};

// ============ Database and Query Engine ============
pub mod database;
pub use database::{DatabaseStats, NeoDatabase};

// ============ Dataset Loaders ============
pub mod extract;
pub use extract::{load_approaches, load_neos};

// ============ Shared Helpers ============
pub mod error;
pub mod helpers;
pub use error::{Error, Result};
