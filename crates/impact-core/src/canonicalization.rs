//! Incremental canonicalization of normalized names
//!
//! Names are processed in a single forward pass, highest-weight first. Each
//! normalized name is scored against the canonical choices seen so far and
//! either merged into the best one or promoted to a new choice. The result is
//! order-dependent by contract: callers feed entries pre-sorted by descending
//! weight so the most prominent spelling of an institution becomes its
//! representative. This module never sorts.

use std::collections::HashMap;

use crate::similarity::{best_match, FuzzyScorer, NameScorer};

/// Minimum similarity score (0-100) for merging a name into an existing
/// choice.
pub const DEFAULT_THRESHOLD: u32 = 90;

/// Accumulator for the forward pass: the insertion-ordered list of canonical
/// choices discovered so far, plus the merge threshold and scorer.
///
/// The choice list grows monotonically; existing entries are never removed or
/// rewritten.
#[derive(Debug)]
pub struct Canonicalizer<S: NameScorer = FuzzyScorer> {
    choices: Vec<String>,
    threshold: u32,
    scorer: S,
}

impl Canonicalizer<FuzzyScorer> {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(threshold: u32) -> Self {
        Self::with_scorer(FuzzyScorer, threshold)
    }
}

impl Default for Canonicalizer<FuzzyScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: NameScorer> Canonicalizer<S> {
    pub fn with_scorer(scorer: S, threshold: u32) -> Self {
        Self {
            choices: Vec::new(),
            threshold,
            scorer,
        }
    }

    /// Process one normalized name and return its canonical key.
    ///
    /// If the best-scoring existing choice reaches the threshold, that choice
    /// is returned; otherwise the name itself becomes a new choice. Ties
    /// between equally-scoring choices resolve to the earliest-inserted one.
    pub fn assign(&mut self, normalized: &str) -> String {
        if let Some(found) = best_match(&self.scorer, normalized, &self.choices) {
            if found.score >= self.threshold {
                let canonical = self.choices[found.index].clone();
                tracing::debug!(
                    "merged '{}' into '{}' (score {})",
                    normalized,
                    canonical,
                    found.score
                );
                return canonical;
            }
        }
        tracing::debug!("promoted '{}' to a new choice", normalized);
        self.choices.push(normalized.to_string());
        normalized.to_string()
    }

    /// Canonical choices discovered so far, in insertion order.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

/// Map every raw name to a canonical key in one forward pass over
/// `(raw, normalized)` pairs.
///
/// The pairs must already be ordered by descending weight; the mapping is a
/// pure function of that order. Every value in the returned map is a member
/// of the choice set. Empty input yields an empty map.
///
/// Each name is scored against every choice so far, O(n·m) scorer calls and
/// quadratic in the worst case; fine for inputs in the low hundreds.
pub fn canonicalize(pairs: &[(String, String)], threshold: u32) -> HashMap<String, String> {
    let mut canonicalizer = Canonicalizer::with_threshold(threshold);
    let mut mapping = HashMap::with_capacity(pairs.len());
    for (raw, normalized) in pairs {
        let canonical = canonicalizer.assign(normalized);
        mapping.insert(raw.clone(), canonical);
    }
    mapping
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(names: &[(&str, &str)]) -> Vec<(String, String)> {
        names
            .iter()
            .map(|(raw, norm)| (raw.to_string(), norm.to_string()))
            .collect()
    }

    #[test]
    fn first_name_becomes_a_choice() {
        let mut canonicalizer = Canonicalizer::new();
        assert_eq!(canonicalizer.assign("pennsylvania"), "pennsylvania");
        assert_eq!(canonicalizer.choices(), ["pennsylvania"]);
    }

    #[test]
    fn close_name_merges_into_existing_choice() {
        let mut canonicalizer = Canonicalizer::new();
        canonicalizer.assign("pennsylvania");
        assert_eq!(canonicalizer.assign("univ pennsylvania"), "pennsylvania");
        assert_eq!(canonicalizer.choices().len(), 1);
    }

    #[test]
    fn distant_name_becomes_a_new_choice() {
        let mut canonicalizer = Canonicalizer::new();
        canonicalizer.assign("pennsylvania");
        assert_eq!(canonicalizer.assign("stanford"), "stanford");
        assert_eq!(canonicalizer.choices(), ["pennsylvania", "stanford"]);
    }

    #[test]
    fn empty_names_collapse_into_one_choice() {
        let mut canonicalizer = Canonicalizer::new();
        assert_eq!(canonicalizer.assign(""), "");
        assert_eq!(canonicalizer.assign(""), "");
        assert_eq!(canonicalizer.choices().len(), 1);
    }

    #[test]
    fn mapping_covers_every_raw_name() {
        let input = pairs(&[
            ("University of Pennsylvania", "pennsylvania"),
            ("Univ of Pennsylvania Hospital", "univ pennsylvania"),
            ("Stanford University", "stanford"),
        ]);
        let mapping = canonicalize(&input, DEFAULT_THRESHOLD);
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping["University of Pennsylvania"], "pennsylvania");
        assert_eq!(mapping["Univ of Pennsylvania Hospital"], "pennsylvania");
        assert_eq!(mapping["Stanford University"], "stanford");
    }

    #[test]
    fn result_depends_on_input_order() {
        let forward = pairs(&[
            ("University of Pennsylvania", "pennsylvania"),
            ("Univ of Pennsylvania Hospital", "univ pennsylvania"),
        ]);
        let reversed = pairs(&[
            ("Univ of Pennsylvania Hospital", "univ pennsylvania"),
            ("University of Pennsylvania", "pennsylvania"),
        ]);
        let forward_map = canonicalize(&forward, DEFAULT_THRESHOLD);
        let reversed_map = canonicalize(&reversed, DEFAULT_THRESHOLD);
        assert_eq!(forward_map["University of Pennsylvania"], "pennsylvania");
        assert_eq!(reversed_map["University of Pennsylvania"], "univ pennsylvania");
    }

    #[test]
    fn empty_input_yields_empty_mapping() {
        assert!(canonicalize(&[], DEFAULT_THRESHOLD).is_empty());
    }

    #[test]
    fn higher_threshold_splits_groups() {
        let input = pairs(&[
            ("A", "alpha beta"),
            ("B", "alpha ceta"),
        ]);
        // "alpha beta" vs "alpha ceta" scores 90: merged at the default
        // threshold, split at 95
        let merged = canonicalize(&input, 90);
        assert_eq!(merged["B"], "alpha beta");
        let split = canonicalize(&input, 95);
        assert_eq!(split["B"], "alpha ceta");
    }
}
