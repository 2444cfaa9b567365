//! Wizard recommendation engine.
//!
//! Applies the collected preferences as independent AND-ed filters, then
//! orders the survivors from least to most selective admission difficulty.

use crate::model::{University, WizardPreferences};

/// Synonym expansions for academic interests: a program counts as a match
/// for the interest when its name contains the interest itself or any of
/// these substrings (all comparisons case-insensitive).
const INTEREST_SYNONYMS: &[(&str, &[&str])] = &[
    ("stem", &["science", "technology", "engineering", "math"]),
    ("health sciences", &["medicine", "health", "nursing"]),
];

/// Returns the records matching every set preference, sorted ascending by
/// difficulty rank. Ties keep the filter-step order (stable sort). An empty
/// result is a valid value, not an error.
#[must_use]
pub fn recommend<'a>(
    records: &'a [University],
    preferences: &WizardPreferences,
) -> Vec<&'a University> {
    let mut result: Vec<&University> = records
        .iter()
        .filter(|uni| {
            preferences
                .region()
                .is_none_or(|region| uni.region() == region)
        })
        .filter(|uni| preferences.kind().is_none_or(|kind| uni.kind() == kind))
        .filter(|uni| {
            preferences
                .max_fees()
                .is_none_or(|max_fees| uni.avg_fees() <= max_fees)
        })
        .filter(|uni| {
            preferences
                .difficulty()
                .is_none_or(|difficulty| uni.difficulty() == difficulty)
        })
        .filter(|uni| {
            preferences.academic_interest().is_none_or(|interest| {
                uni.programs()
                    .iter()
                    .any(|program| interest_matches(program.name(), interest))
            })
        })
        .collect();

    result.sort_by_key(|uni| uni.difficulty().rank());
    result
}

/// True when `program_name` matches `interest` directly or through the
/// interest's synonym expansions. Case-insensitive.
#[must_use]
pub fn interest_matches(program_name: &str, interest: &str) -> bool {
    let program = program_name.to_lowercase();
    let interest = interest.trim().to_lowercase();

    if program.contains(&interest) {
        return true;
    }

    INTEREST_SYNONYMS
        .iter()
        .filter(|(label, _)| *label == interest)
        .flat_map(|(_, substrings)| substrings.iter())
        .any(|substring| program.contains(substring))
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
