///! Query predicates over close approaches
///!
///! Each filter is a small predicate object; the query engine holds them in
///! an ordered list and ANDs them together lazily, one approach at a time.
///! Filters on NEO attributes (diameter, hazardous) receive the resolved
///! catalog entry and never match orphan approaches.

use std::fmt;

use chrono::NaiveDate;

use crate::model::{CloseApproach, NearEarthObject};

/// A testable condition over one close approach.
pub trait Predicate: fmt::Debug {
    /// Whether the approach passes. `neo` is the resolved back-reference,
    /// `None` for orphans.
    fn matches(&self, approach: &CloseApproach, neo: Option<&NearEarthObject>) -> bool;
}

/// Direction of a threshold comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    AtMost,
    Exactly,
    AtLeast,
}

impl Bound {
    fn test<T: PartialOrd>(self, value: T, threshold: T) -> bool {
        match self {
            Self::AtMost => value <= threshold,
            Self::Exactly => value == threshold,
            Self::AtLeast => value >= threshold,
        }
    }
}

/// Compares the calendar date of the approach (time of day ignored).
#[derive(Debug, Clone, Copy)]
pub struct DateFilter {
    bound: Bound,
    value: NaiveDate,
}

impl DateFilter {
    pub fn new(bound: Bound, value: NaiveDate) -> Self {
        Self { bound, value }
    }
}

impl Predicate for DateFilter {
    fn matches(&self, approach: &CloseApproach, _neo: Option<&NearEarthObject>) -> bool {
        self.bound.test(approach.time.date(), self.value)
    }
}

/// Compares the approach distance in astronomical units.
#[derive(Debug, Clone, Copy)]
pub struct DistanceFilter {
    bound: Bound,
    value: f64,
}

impl DistanceFilter {
    pub fn new(bound: Bound, value: f64) -> Self {
        Self { bound, value }
    }
}

impl Predicate for DistanceFilter {
    fn matches(&self, approach: &CloseApproach, _neo: Option<&NearEarthObject>) -> bool {
        self.bound.test(approach.distance, self.value)
    }
}

/// Compares the relative velocity in km/s.
#[derive(Debug, Clone, Copy)]
pub struct VelocityFilter {
    bound: Bound,
    value: f64,
}

impl VelocityFilter {
    pub fn new(bound: Bound, value: f64) -> Self {
        Self { bound, value }
    }
}

impl Predicate for VelocityFilter {
    fn matches(&self, approach: &CloseApproach, _neo: Option<&NearEarthObject>) -> bool {
        self.bound.test(approach.velocity, self.value)
    }
}

/// Compares the NEO's diameter in kilometers.
///
/// An unknown diameter is NaN, and NaN fails every comparison, so approaches
/// of unmeasured objects never match a diameter filter. Orphans never match.
#[derive(Debug, Clone, Copy)]
pub struct DiameterFilter {
    bound: Bound,
    value: f64,
}

impl DiameterFilter {
    pub fn new(bound: Bound, value: f64) -> Self {
        Self { bound, value }
    }
}

impl Predicate for DiameterFilter {
    fn matches(&self, _approach: &CloseApproach, neo: Option<&NearEarthObject>) -> bool {
        match neo {
            Some(neo) => self.bound.test(neo.diameter, self.value),
            None => false,
        }
    }
}

/// Matches the NEO's hazardous flag. Orphans never match.
#[derive(Debug, Clone, Copy)]
pub struct HazardousFilter {
    value: bool,
}

impl HazardousFilter {
    pub fn new(value: bool) -> Self {
        Self { value }
    }
}

impl Predicate for HazardousFilter {
    fn matches(&self, _approach: &CloseApproach, neo: Option<&NearEarthObject>) -> bool {
        neo.map(|n| n.hazardous == self.value).unwrap_or(false)
    }
}

/// Ordered conjunction of predicates.
///
/// An empty set matches everything. Evaluation follows insertion order and
/// stops at the first failing predicate.
#[derive(Debug, Default)]
pub struct FilterSet {
    filters: Vec<Box<dyn Predicate>>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate; later predicates are tested after earlier ones.
    pub fn push(&mut self, filter: impl Predicate + 'static) {
        self.filters.push(Box::new(filter));
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Whether the approach passes every predicate.
    pub fn matches(&self, approach: &CloseApproach, neo: Option<&NearEarthObject>) -> bool {
        self.filters.iter().all(|f| f.matches(approach, neo))
    }
}
