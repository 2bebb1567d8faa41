///! The cross-referenced NEO / close-approach database

use std::collections::HashMap;
use std::fmt;

use super::filters::FilterSet;
use crate::model::{CloseApproach, NearEarthObject};

/// In-memory database of NEOs and their close approaches.
///
/// Both collections live in `Vec` arenas owned here; records refer to each
/// other by arena position, never by a second ownership relation. Linking
/// runs once in [`NeoDatabase::new`] and the structure is read-only from
/// then on, so the indexes stay valid for the database's whole lifetime.
#[derive(Debug)]
pub struct NeoDatabase {
    /// NEO arena, in catalog order
    neos: Vec<NearEarthObject>,

    /// Approach arena, in dataset order
    approaches: Vec<CloseApproach>,

    /// Primary-designation index. On duplicate designations the later
    /// catalog row wins, matching plain map-insertion semantics.
    by_designation: HashMap<String, usize>,

    /// IAU-name index; unnamed objects are absent
    by_name: HashMap<String, usize>,
}

impl NeoDatabase {
    /// Take ownership of both loaded collections, link every approach to its
    /// NEO, and build the lookup indexes.
    pub fn new(neos: Vec<NearEarthObject>, approaches: Vec<CloseApproach>) -> Self {
        let mut db = Self {
            neos,
            approaches,
            by_designation: HashMap::new(),
            by_name: HashMap::new(),
        };
        db.link();
        db
    }

    /// Resolve each approach's designation against the catalog, exactly once.
    ///
    /// An approach whose designation matches nothing stays in the arena as an
    /// orphan: `neo` remains `None` and no NEO lists it. Tolerated, logged,
    /// never an error.
    fn link(&mut self) {
        self.by_designation = self
            .neos
            .iter()
            .enumerate()
            .map(|(idx, neo)| (neo.designation.clone(), idx))
            .collect();

        let mut orphans = 0usize;
        for i in 0..self.approaches.len() {
            let neo_idx = self.by_designation.get(&self.approaches[i].designation).copied();
            match neo_idx {
                Some(neo_idx) => {
                    self.approaches[i].neo = Some(neo_idx);
                    self.neos[neo_idx].approaches.push(i);
                }
                None => orphans += 1,
            }
        }

        let mut by_name = HashMap::new();
        for (idx, neo) in self.neos.iter().enumerate() {
            if let Some(name) = &neo.name {
                by_name.insert(name.clone(), idx);
            }
        }
        self.by_name = by_name;

        if orphans > 0 {
            tracing::warn!(
                "{} close approaches reference designations missing from the catalog",
                orphans
            );
        }
        tracing::info!(
            "Linked {} close approaches to {} NEOs",
            self.approaches.len() - orphans,
            self.neos.len()
        );
    }

    /// Find a NEO by primary designation. O(1); `None` on a miss.
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation.get(designation).map(|&idx| &self.neos[idx])
    }

    /// Find a NEO by IAU name. O(1); `None` on a miss.
    ///
    /// Exact and case-sensitive; fuzzy lookup is [`super::search_neos`].
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name.get(name).map(|&idx| &self.neos[idx])
    }

    /// All NEOs, in catalog order.
    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    /// All close approaches, in dataset order, orphans included.
    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    /// Resolve an approach's back-reference; `None` for orphans.
    pub fn neo_of(&self, approach: &CloseApproach) -> Option<&NearEarthObject> {
        approach.neo.map(|idx| &self.neos[idx])
    }

    /// Iterate a NEO's close approaches in dataset order.
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = &'a CloseApproach> + 'a {
        neo.approaches.iter().map(move |&idx| &self.approaches[idx])
    }

    /// Stream the approaches matching every filter, in dataset order.
    ///
    /// Evaluation is lazy, one approach at a time, with the filters applied
    /// in their given order and short-circuited on the first miss. The
    /// returned iterator is consumed by use; call `query` again to re-iterate.
    pub fn query<'a>(
        &'a self,
        filters: &'a FilterSet,
    ) -> impl Iterator<Item = &'a CloseApproach> + 'a {
        self.approaches
            .iter()
            .filter(move |approach| filters.matches(approach, self.neo_of(approach)))
    }

    /// Counts for startup logging.
    pub fn stats(&self) -> DatabaseStats {
        DatabaseStats {
            total_neos: self.neos.len(),
            named_neos: self.by_name.len(),
            total_approaches: self.approaches.len(),
            orphan_approaches: self.approaches.iter().filter(|a| a.neo.is_none()).count(),
        }
    }

    /// Display form of an approach with the NEO name substituted in when the
    /// back-reference resolves.
    pub fn describe_approach(&self, approach: &CloseApproach) -> String {
        match self.neo_of(approach) {
            Some(neo) => format!(
                "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
                crate::helpers::datetime_to_str(&approach.time),
                neo.fullname(),
                approach.distance,
                approach.velocity
            ),
            None => approach.to_string(),
        }
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DatabaseStats {
    pub total_neos: usize,
    pub named_neos: usize,
    pub total_approaches: usize,
    pub orphan_approaches: usize,
}

impl fmt::Display for DatabaseStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NEOs: {} ({} named), close approaches: {} ({} orphaned)",
            self.total_neos, self.named_neos, self.total_approaches, self.orphan_approaches
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::filters::{Bound, DistanceFilter};
    use super::*;
    use crate::helpers::cd_to_datetime;

    fn neo(designation: &str, name: Option<&str>) -> NearEarthObject {
        NearEarthObject::new(designation, name.map(String::from), None, false)
    }

    fn approach(designation: &str, cd: &str, distance: f64) -> CloseApproach {
        CloseApproach::new(designation, cd_to_datetime(cd).unwrap(), distance, 5.0)
    }

    fn sample_db() -> NeoDatabase {
        let neos = vec![
            neo("433", Some("Eros")),
            neo("1865", Some("Cerberus")),
            neo("2019 SC8", None),
        ];
        let approaches = vec![
            approach("433", "1900-Jan-01 00:11", 0.0296),
            approach("1865", "1901-Feb-02 12:30", 0.5),
            approach("433", "1907-Mar-03 06:00", 0.009),
            approach("99999", "1910-Apr-04 18:45", 0.2),
        ];
        NeoDatabase::new(neos, approaches)
    }

    #[test]
    fn test_get_neo_by_designation() {
        let db = sample_db();
        for designation in ["433", "1865", "2019 SC8"] {
            let found = db.get_neo_by_designation(designation).unwrap();
            assert_eq!(found.designation, designation);
        }
        assert!(db.get_neo_by_designation("nonexistent").is_none());
    }

    #[test]
    fn test_get_neo_by_name_is_exact_and_case_sensitive() {
        let db = sample_db();
        assert_eq!(db.get_neo_by_name("Eros").unwrap().designation, "433");
        assert!(db.get_neo_by_name("eros").is_none());
        assert!(db.get_neo_by_name("").is_none());
        assert!(db.get_neo_by_name("Halley").is_none());
    }

    #[test]
    fn test_unnamed_neo_not_in_name_index() {
        let db = sample_db();
        assert_eq!(db.stats().named_neos, 2);
    }

    #[test]
    fn test_linking_is_bidirectional() {
        let db = sample_db();
        let eros = db.get_neo_by_designation("433").unwrap();
        let linked: Vec<_> = db.approaches_of(eros).collect();

        assert_eq!(linked.len(), 2);
        assert!(linked.iter().all(|a| a.designation == "433"));
        // dataset order preserved within the NEO
        assert!(linked[0].time < linked[1].time);

        for a in linked {
            assert_eq!(db.neo_of(a).unwrap().designation, "433");
        }
    }

    #[test]
    fn test_each_approach_owned_at_most_once() {
        let db = sample_db();
        let owned: usize = db.neos().iter().map(|n| n.approaches.len()).sum();
        let resolvable = db.approaches().iter().filter(|a| a.neo.is_some()).count();
        assert_eq!(owned, resolvable);
    }

    #[test]
    fn test_orphan_approach_is_kept_but_unowned() {
        let db = sample_db();
        let orphan = &db.approaches()[3];

        assert_eq!(orphan.designation, "99999");
        assert!(orphan.neo.is_none());
        assert!(db.neo_of(orphan).is_none());
        assert!(db.neos().iter().all(|n| db.approaches_of(n).all(|a| a.designation != "99999")));
        assert_eq!(db.stats().orphan_approaches, 1);
    }

    #[test]
    fn test_duplicate_designation_last_wins() {
        let neos = vec![
            NearEarthObject::new("433", Some("First".to_string()), Some(1.0), false),
            NearEarthObject::new("433", Some("Second".to_string()), Some(2.0), true),
        ];
        let approaches = vec![approach("433", "1900-Jan-01 00:11", 0.1)];
        let db = NeoDatabase::new(neos, approaches);

        let found = db.get_neo_by_designation("433").unwrap();
        assert_eq!(found.name.as_deref(), Some("Second"));
        // the approach linked against the surviving entry
        assert_eq!(db.neo_of(&db.approaches()[0]).unwrap().name.as_deref(), Some("Second"));
        // the shadowed entry owns nothing
        assert!(db.neos()[0].approaches.is_empty());
    }

    #[test]
    fn test_query_without_filters_yields_all_in_order() {
        let db = sample_db();
        let empty_filters = FilterSet::new();
        let all: Vec<_> = db.query(&empty_filters).collect();

        assert_eq!(all.len(), 4);
        assert_eq!(all[0].designation, "433");
        assert_eq!(all[1].designation, "1865");
        assert_eq!(all[2].designation, "433");
        assert_eq!(all[3].designation, "99999");
    }

    #[test]
    fn test_query_preserves_order_under_filter() {
        let db = sample_db();
        let mut filters = FilterSet::new();
        filters.push(DistanceFilter::new(Bound::AtMost, 0.2));

        let hits: Vec<_> = db.query(&filters).collect();
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|a| a.distance <= 0.2));
        assert_eq!(hits[0].distance, 0.0296);
        assert_eq!(hits[1].distance, 0.009);
        assert_eq!(hits[2].distance, 0.2);
    }

    #[test]
    fn test_query_twice_yields_identical_sequences() {
        let db = sample_db();
        let mut filters = FilterSet::new();
        filters.push(DistanceFilter::new(Bound::AtMost, 0.2));

        let first: Vec<_> = db.query(&filters).map(|a| a.distance).collect();
        let second: Vec<_> = db.query(&filters).map(|a| a.distance).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_describe_approach() {
        let db = sample_db();
        let described = db.describe_approach(&db.approaches()[0]);
        assert!(described.contains("'433 (Eros)'"));

        let orphan = db.describe_approach(&db.approaches()[3]);
        assert!(orphan.contains("'99999'"));
    }
}
