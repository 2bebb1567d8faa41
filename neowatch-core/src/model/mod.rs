///! Record types for the two source datasets
///!
///! A `NearEarthObject` comes from one row of the small-body catalog, a
///! `CloseApproach` from one row of the close-approach dataset. Both are
///! plain data holders; the cross-references between them are established
///! once by the database linker.

mod approach;
mod neo;

pub use approach::{ApproachSummary, CloseApproach};
pub use neo::NearEarthObject;
