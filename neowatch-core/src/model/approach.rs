///! Close-approach record type and its export summary

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::neo::NearEarthObject;
use crate::helpers::datetime_to_str;

/// One recorded pass of a near-Earth object by Earth.
///
/// `designation` is a foreign key into the NEO catalog; the source data does
/// not guarantee it resolves. The `neo` back-reference is an arena index set
/// once by the database linker and `None` for orphan records.
#[derive(Debug, Clone)]
pub struct CloseApproach {
    /// Primary designation of the referenced NEO
    pub designation: String,

    /// Time of closest approach, UTC, no zone marker in the source
    pub time: NaiveDateTime,

    /// Nominal approach distance in astronomical units
    pub distance: f64,

    /// Relative approach velocity in km/s
    pub velocity: f64,

    /// Position of the owning NEO in the database arena; `None` when the
    /// designation matched nothing in the loaded catalog
    pub neo: Option<usize>,
}

impl CloseApproach {
    /// Build an approach from one dataset row. The timestamp must already be
    /// parsed; see [`crate::helpers::cd_to_datetime`].
    pub fn new(
        designation: impl Into<String>,
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
    ) -> Self {
        Self {
            designation: designation.into(),
            time,
            distance,
            velocity,
            neo: None,
        }
    }

    /// Flat export record for this approach.
    ///
    /// `neo` is the resolved catalog entry when one exists; orphan approaches
    /// export with empty NEO attributes.
    pub fn summary(&self, neo: Option<&NearEarthObject>) -> ApproachSummary {
        ApproachSummary {
            datetime_utc: datetime_to_str(&self.time),
            distance_au: self.distance,
            velocity_km_s: self.velocity,
            designation: self.designation.clone(),
            name: neo.and_then(|n| n.name.clone()),
            diameter_km: neo.filter(|n| n.is_diameter_known()).map(|n| n.diameter),
            potentially_hazardous: neo.map(|n| n.hazardous),
        }
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            datetime_to_str(&self.time),
            self.designation,
            self.distance,
            self.velocity
        )
    }
}

/// Machine-readable close-approach record for CSV/JSON export.
///
/// Field order is the column order of the CSV writer. Unknowns serialize as
/// empty cells in CSV and null in JSON.
#[derive(Debug, Clone, Serialize)]
pub struct ApproachSummary {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
    pub designation: String,
    pub name: Option<String>,
    pub diameter_km: Option<f64>,
    pub potentially_hazardous: Option<bool>,
}
