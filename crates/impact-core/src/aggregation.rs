//! Count aggregation and representative assignment
//!
//! Once every raw name has a canonical key, counts are consolidated in two
//! linear passes: sum per canonical key, then hand each key's total to the
//! first raw name (in input order) that maps to it. The total count is
//! conserved: the output sums to exactly the input sum.

use std::collections::{HashMap, HashSet};

use crate::canonicalization::canonicalize;
use crate::ingest::NameCount;
use crate::normalization::normalize_name;

/// Sum entry counts per canonical key.
///
/// `mapping` is expected to cover every entry name, as produced by
/// [`canonicalize`] over the same entries; entries without a mapping are
/// ignored.
pub fn canonical_counts(
    entries: &[NameCount],
    mapping: &HashMap<String, String>,
) -> HashMap<String, u64> {
    let mut totals: HashMap<String, u64> = HashMap::new();
    for entry in entries {
        if let Some(canonical) = mapping.get(&entry.name) {
            *totals.entry(canonical.clone()).or_insert(0) += entry.count;
        }
    }
    totals
}

/// Assign each canonical key's total to one representative raw name.
///
/// Entries are scanned in input order; the first raw name mapping to an
/// unclaimed key receives that key's total under its original spelling, and
/// later members of the group are skipped. Exactly one representative per
/// distinct canonical key.
pub fn assign_representatives(
    entries: &[NameCount],
    mapping: &HashMap<String, String>,
    totals: &HashMap<String, u64>,
) -> Vec<NameCount> {
    let mut claimed: HashSet<&str> = HashSet::new();
    let mut representatives = Vec::new();
    for entry in entries {
        let canonical = match mapping.get(&entry.name) {
            Some(canonical) => canonical,
            None => continue,
        };
        if claimed.insert(canonical.as_str()) {
            let total = totals.get(canonical.as_str()).copied().unwrap_or(0);
            representatives.push(NameCount::new(entry.name.clone(), total));
        }
    }
    representatives
}

/// Consolidate counts across name variants: normalize every name,
/// canonicalize in one forward pass, then aggregate per group.
///
/// Entries must be pre-sorted by descending count; the grouping is a pure
/// function of that order. The returned representatives appear in
/// first-occurrence input order.
pub fn consolidate(entries: &[NameCount], threshold: u32) -> Vec<NameCount> {
    let pairs: Vec<(String, String)> = entries
        .iter()
        .map(|entry| (entry.name.clone(), normalize_name(&entry.name)))
        .collect();
    let mapping = canonicalize(&pairs, threshold);
    let totals = canonical_counts(entries, &mapping);
    let representatives = assign_representatives(entries, &mapping, &totals);
    tracing::info!(
        "consolidated {} names into {} groups",
        entries.len(),
        representatives.len()
    );
    representatives
}
