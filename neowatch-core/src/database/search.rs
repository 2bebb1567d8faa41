///! Fuzzy designation/name lookup
///!
///! The exact indexes on [`super::NeoDatabase`] are case-sensitive; this is
///! the forgiving front door for interactive use.

use strsim::jaro_winkler;

use super::neo_db::NeoDatabase;
use crate::model::NearEarthObject;

/// Default similarity threshold for fuzzy matching
pub const DEFAULT_THRESHOLD: f64 = 0.85;

/// Search the catalog for objects matching the query.
///
/// # Search Priority
/// 1. Exact match on normalized designation
/// 2. Exact match on normalized name
/// 3. Fuzzy match (Jaro-Winkler similarity >= threshold), best first
pub fn search_neos<'a>(
    query: &str,
    db: &'a NeoDatabase,
    threshold: f64,
) -> Vec<&'a NearEarthObject> {
    let hard_matches = hard_match(query, db);
    if !hard_matches.is_empty() {
        return hard_matches;
    }

    fuzzy_match(query, db, threshold)
        .into_iter()
        .map(|(_, neo)| neo)
        .collect()
}

/// Exact match on normalized designation or name.
fn hard_match<'a>(query: &str, db: &'a NeoDatabase) -> Vec<&'a NearEarthObject> {
    let normalized_query = normalize_string(query);
    let mut results = Vec::new();

    for neo in db.neos() {
        if normalize_string(&neo.designation) == normalized_query {
            results.push(neo);
            continue;
        }

        if let Some(name) = &neo.name {
            if normalize_string(name) == normalized_query {
                results.push(neo);
            }
        }
    }

    results
}

/// Fuzzy match using Jaro-Winkler similarity, sorted by score descending.
fn fuzzy_match<'a>(
    query: &str,
    db: &'a NeoDatabase,
    threshold: f64,
) -> Vec<(f64, &'a NearEarthObject)> {
    let query_lower = query.to_lowercase();
    let mut matches: Vec<(f64, &NearEarthObject)> = Vec::new();

    for neo in db.neos() {
        let mut best_score = jaro_winkler(&query_lower, &neo.designation.to_lowercase());

        if let Some(name) = &neo.name {
            let score = jaro_winkler(&query_lower, &name.to_lowercase());
            best_score = best_score.max(score);
        }

        if best_score >= threshold {
            matches.push((best_score, neo));
        }
    }

    matches.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    matches
}

/// Normalize a string for matching (lowercase, strip punctuation and whitespace).
pub fn normalize_string(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation() && !c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CloseApproach;

    fn sample_db() -> NeoDatabase {
        let neos = vec![
            NearEarthObject::new("433", Some("Eros".to_string()), Some(16.84), false),
            NearEarthObject::new("1865", Some("Cerberus".to_string()), None, false),
            NearEarthObject::new("2019 SC8", None, None, false),
        ];
        NeoDatabase::new(neos, Vec::<CloseApproach>::new())
    }

    #[test]
    fn test_exact_designation_match() {
        let db = sample_db();
        let results = search_neos("433", &db, DEFAULT_THRESHOLD);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].designation, "433");
    }

    #[test]
    fn test_exact_name_match_ignores_case() {
        let db = sample_db();
        let results = search_neos("eros", &db, DEFAULT_THRESHOLD);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].designation, "433");
    }

    #[test]
    fn test_normalization_strips_punctuation() {
        let db = sample_db();
        let results = search_neos("2019sc8", &db, DEFAULT_THRESHOLD);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].designation, "2019 SC8");
    }

    #[test]
    fn test_fuzzy_match() {
        let db = sample_db();
        let results = search_neos("Cerberos", &db, 0.80);
        assert!(!results.is_empty());
        assert_eq!(results[0].designation, "1865");
    }

    #[test]
    fn test_no_match_below_threshold() {
        let db = sample_db();
        assert!(search_neos("Halley", &db, DEFAULT_THRESHOLD).is_empty());
    }

    #[test]
    fn test_normalize_string() {
        assert_eq!(normalize_string("2019 SC8"), "2019sc8");
        assert_eq!(normalize_string("  Eros  "), "eros");
        assert_eq!(normalize_string("1994-PC1"), "1994pc1");
    }
}
