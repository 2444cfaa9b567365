//! Dataset-wide counting for the insights view.
//!
//! These run client-side over the loaded dataset; the backend exposes the
//! same breakdowns as `/insights/*` endpoints for callers that prefer a
//! server round-trip.

use crate::model::{Difficulty, University, UniversityType};

/// Universities per region, in first-seen dataset order.
#[must_use]
pub fn region_counts(records: &[University]) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    for uni in records {
        match counts.iter_mut().find(|(region, _)| region == uni.region()) {
            Some((_, count)) => *count += 1,
            None => counts.push((uni.region().to_owned(), 1)),
        }
    }
    counts
}

/// Universities per institution type. Both types are always present so the
/// bars keep a fixed shape even when one count is zero.
#[must_use]
pub fn type_counts(records: &[University]) -> Vec<(String, u64)> {
    UniversityType::ALL
        .into_iter()
        .map(|kind| {
            let count = records.iter().filter(|uni| uni.kind() == kind).count() as u64;
            (kind.label().to_owned(), count)
        })
        .collect()
}

/// Universities per difficulty level, in rank order, zero-count levels
/// included.
#[must_use]
pub fn difficulty_counts(records: &[University]) -> Vec<(String, u64)> {
    Difficulty::ALL
        .into_iter()
        .map(|level| {
            let count = records
                .iter()
                .filter(|uni| uni.difficulty() == level)
                .count() as u64;
            (level.label().to_owned(), count)
        })
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
