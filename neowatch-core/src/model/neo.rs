///! Near-Earth object record type

use std::fmt;

/// A near-Earth object from the JPL small-body catalog.
///
/// The primary designation is the unique key of the catalog. Many objects
/// carry no IAU name, and most have no measured diameter; both gaps are
/// normal data, not errors.
#[derive(Debug, Clone)]
pub struct NearEarthObject {
    /// Primary designation, e.g. "433" or "2019 SC8"
    pub designation: String,

    /// IAU name, e.g. "Eros"; `None` when the catalog has no name
    pub name: Option<String>,

    /// Diameter in kilometers; NaN when no measurement exists
    pub diameter: f64,

    /// Whether the catalog flags the object as potentially hazardous
    pub hazardous: bool,

    /// Positions of this object's close approaches in the database arena,
    /// in dataset order. Filled during linking, fixed afterwards.
    pub approaches: Vec<usize>,
}

impl NearEarthObject {
    /// Build an object from one catalog row.
    ///
    /// An empty `name` normalizes to `None` and a missing `diameter` to NaN,
    /// so lookups and filters see one canonical shape for "unknown".
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: Option<f64>,
        hazardous: bool,
    ) -> Self {
        Self {
            designation: designation.into(),
            name: name.filter(|n| !n.is_empty()),
            diameter: diameter.unwrap_or(f64::NAN),
            hazardous,
            approaches: Vec::new(),
        }
    }

    /// Whether a diameter measurement exists.
    ///
    /// The unknown sentinel is NaN, so this is the only valid test; equality
    /// against the field never detects it.
    pub fn is_diameter_known(&self) -> bool {
        !self.diameter.is_nan()
    }

    /// Designation plus name when one exists, e.g. "433 (Eros)".
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hazard = if self.hazardous {
            "is potentially hazardous"
        } else {
            "is not potentially hazardous"
        };

        if self.is_diameter_known() {
            write!(
                f,
                "NEO {} has a diameter of {:.3} km and {}.",
                self.fullname(),
                self.diameter,
                hazard
            )
        } else {
            write!(f, "NEO {} has an unknown diameter and {}.", self.fullname(), hazard)
        }
    }
}
