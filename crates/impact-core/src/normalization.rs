//! Name normalization for canonicalization comparison

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Institutional boilerplate and connector phrases. Plain substrings, not
    // word-boundary anchored: "medicine" strips mid-word and "of" matches
    // inside words like "professor". The matching threshold was tuned against
    // exactly this behavior, so anchoring the pattern would change groupings.
    static ref NOISE_PATTERN: Regex = Regex::new(
        r"( +at +)|( *of *)|(university)|(hospital)|(medical center)|(institution)|(school)|(medicine)"
    )
    .unwrap();
}

/// Normalize an organization name for fuzzy comparison.
///
/// - Converts to lowercase
/// - Replaces each noise occurrence with a single space
/// - Trims leading/trailing whitespace
///
/// Interior whitespace left behind by the replacements is not collapsed.
/// Total over all inputs; a name consisting entirely of noise words
/// normalizes to the empty string.
///
/// # Examples
/// ```
/// use impact_core::normalization::normalize_name;
/// assert_eq!(normalize_name("University of Pennsylvania"), "pennsylvania");
/// assert_eq!(normalize_name("School of Medicine"), "");
/// ```
pub fn normalize_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    NOISE_PATTERN.replace_all(&lowered, " ").trim().to_string()
}
