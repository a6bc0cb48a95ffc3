//! Fuzzy similarity scoring for name matching
//!
//! Scores are integers on a 0-100 scale. Matching is insensitive to word
//! order: names are tokenized, and both a sorted-token and a set-based ratio
//! are computed, so "pennsylvania state" and "state pennsylvania" score 100.

use std::collections::BTreeSet;

use strsim::normalized_levenshtein;

/// Plain edit-distance similarity between two strings, 0-100.
pub fn ratio(a: &str, b: &str) -> u32 {
    (normalized_levenshtein(a, b) * 100.0).round() as u32
}

/// Similarity after sorting the tokens of both strings alphabetically.
///
/// # Examples
/// ```
/// use impact_core::similarity::token_sort_ratio;
/// assert_eq!(token_sort_ratio("pennsylvania state", "state pennsylvania"), 100);
/// ```
pub fn token_sort_ratio(a: &str, b: &str) -> u32 {
    let mut tokens_a = tokenize(a);
    tokens_a.sort();
    let mut tokens_b = tokenize(b);
    tokens_b.sort();
    ratio(&tokens_a.join(" "), &tokens_b.join(" "))
}

/// Similarity over token sets: the sorted intersection is compared against
/// each side's intersection-plus-remainder string, and the best of the three
/// pairwise ratios wins. A name whose tokens are a subset of another's scores
/// 100, which is what lets "pennsylvania" match "univ pennsylvania".
///
/// When the token sets are disjoint the intersection comparisons degenerate
/// (an empty string against anything), so only the remainder-vs-remainder
/// ratio is used.
pub fn token_set_ratio(a: &str, b: &str) -> u32 {
    let set_a: BTreeSet<String> = tokenize(a).into_iter().collect();
    let set_b: BTreeSet<String> = tokenize(b).into_iter().collect();

    let sect = join_sorted(set_a.intersection(&set_b));
    let rest_a = join_sorted(set_a.difference(&set_b));
    let rest_b = join_sorted(set_b.difference(&set_a));

    let combined_a = concat_trimmed(&sect, &rest_a);
    let combined_b = concat_trimmed(&sect, &rest_b);

    if sect.is_empty() {
        return ratio(&combined_a, &combined_b);
    }

    ratio(&sect, &combined_a)
        .max(ratio(&sect, &combined_b))
        .max(ratio(&combined_a, &combined_b))
}

/// Lowercase, replace non-alphanumeric characters with spaces, split on
/// whitespace.
fn tokenize(s: &str) -> Vec<String> {
    s.to_lowercase()
        .replace(|c: char| !c.is_alphanumeric() && !c.is_whitespace(), " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn join_sorted<'a>(tokens: impl Iterator<Item = &'a String>) -> String {
    tokens.cloned().collect::<Vec<_>>().join(" ")
}

fn concat_trimmed(head: &str, tail: &str) -> String {
    format!("{head} {tail}").trim().to_string()
}

/// Scoring seam for the canonicalizer.
pub trait NameScorer {
    /// Similarity between a query and one candidate, 0-100.
    fn score(&self, query: &str, candidate: &str) -> u32;
}

/// Default scorer: the better of the token-sort and token-set ratios.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyScorer;

impl NameScorer for FuzzyScorer {
    fn score(&self, query: &str, candidate: &str) -> u32 {
        token_sort_ratio(query, candidate).max(token_set_ratio(query, candidate))
    }
}

/// Best-scoring candidate for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMatch {
    /// Index into the candidate list
    pub index: usize,
    /// Similarity score, 0-100
    pub score: u32,
}

/// Scan candidates in order and return the best match, or `None` if the list
/// is empty. The running best is only replaced by a strictly greater score,
/// so equal-scoring candidates resolve to the earliest one.
pub fn best_match<S: NameScorer>(scorer: &S, query: &str, candidates: &[String]) -> Option<BestMatch> {
    let mut best: Option<BestMatch> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let score = scorer.score(query, candidate);
        if best.map_or(true, |b| score > b.score) {
            best = Some(BestMatch { index, score });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_identical() {
        assert_eq!(ratio("pennsylvania", "pennsylvania"), 100);
        assert_eq!(ratio("", ""), 100);
    }

    #[test]
    fn token_sort_ignores_word_order() {
        assert_eq!(token_sort_ratio("univ pennsylvania", "pennsylvania univ"), 100);
    }

    #[test]
    fn token_sort_on_subset_stays_partial() {
        // "pennsylvania" vs "pennsylvania univ": 5 edits over 17 chars
        assert_eq!(token_sort_ratio("pennsylvania", "univ pennsylvania"), 71);
    }

    #[test]
    fn token_set_scores_subset_as_full_match() {
        assert_eq!(token_set_ratio("pennsylvania", "univ pennsylvania"), 100);
    }

    #[test]
    fn token_set_disjoint_stays_low() {
        assert!(token_set_ratio("stanford", "pennsylvania") < 50);
    }

    #[test]
    fn punctuation_is_ignored() {
        assert_eq!(token_sort_ratio("univ. pennsylvania", "pennsylvania univ"), 100);
    }

    #[test]
    fn empty_query_does_not_match_nonempty_candidate() {
        let scorer = FuzzyScorer;
        assert_eq!(scorer.score("", "pennsylvania"), 0);
        assert_eq!(scorer.score("", ""), 100);
    }

    #[test]
    fn best_match_empty_candidates() {
        assert_eq!(best_match(&FuzzyScorer, "anything", &[]), None);
    }

    #[test]
    fn best_match_prefers_earliest_on_ties() {
        let candidates = vec!["pennsylvania".to_string(), "pennsylvania".to_string()];
        let found = best_match(&FuzzyScorer, "pennsylvania", &candidates).unwrap();
        assert_eq!(found.index, 0);
        assert_eq!(found.score, 100);
    }

    #[test]
    fn best_match_picks_highest_score() {
        let candidates = vec!["stanford".to_string(), "univ pennsylvania".to_string()];
        let found = best_match(&FuzzyScorer, "pennsylvania", &candidates).unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.score, 100);
    }
}
