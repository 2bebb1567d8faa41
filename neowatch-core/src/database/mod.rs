///! Linked, indexed store of NEOs and close approaches
///!
///! ## Main Components
///! - `NeoDatabase`: owns both record collections, links them once at
///!   construction, and answers all lookups afterwards
///! - `filters`: predicate objects the query engine composes with AND
///! - `search`: fuzzy designation/name lookup on top of the exact indexes

// ============ Database Core ============
mod neo_db;
pub use neo_db::{DatabaseStats, NeoDatabase};

// ============ Query Predicates ============
mod filters;
pub use filters::{
    Bound, DateFilter, DiameterFilter, DistanceFilter, FilterSet, HazardousFilter, Predicate,
    VelocityFilter,
};

// ============ Fuzzy Search ============
mod search;
pub use search::{normalize_string, search_neos, DEFAULT_THRESHOLD};
