//! Explore-page filter/sort engine.
//!
//! A pure mapping from (records, criteria) to an ordered subset: no side
//! effects, identical output for identical input.

use std::fmt;
use std::str::FromStr;

use crate::model::{University, UniversityType};

/// Default fee ceiling for the explore view (TZS per year). Matches the
/// slider maximum, so the default criteria keep every record.
pub const DEFAULT_MAX_FEES: u64 = 10_000_000;

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    FeesAsc,
    FeesDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::FeesAsc,
        SortKey::FeesDesc,
    ];

    /// The label shown in the sort dropdown.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
            SortKey::FeesAsc => "Fees (Low-High)",
            SortKey::FeesDesc => "Fees (High-Low)",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortKeyError(String);

impl fmt::Display for ParseSortKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort key: {}", self.0)
    }
}

impl std::error::Error for ParseSortKeyError {}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.label() == s)
            .ok_or_else(|| ParseSortKeyError(s.to_string()))
    }
}

/// Filter criteria for the explore view.
///
/// The UI's sentinel options ("All Regions", "All Types") are translated to
/// `None` before reaching the engine; blank text imposes no constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct ExploreCriteria {
    pub text: String,
    pub region: Option<String>,
    pub kind: Option<UniversityType>,
    pub max_fees: u64,
    pub sort: SortKey,
}

impl Default for ExploreCriteria {
    fn default() -> Self {
        Self {
            text: String::new(),
            region: None,
            kind: None,
            max_fees: DEFAULT_MAX_FEES,
            sort: SortKey::default(),
        }
    }
}

impl ExploreCriteria {
    /// True when every predicate is at its no-constraint default (sort aside).
    #[must_use]
    pub fn is_default_filter(&self) -> bool {
        self.text.trim().is_empty()
            && self.region.is_none()
            && self.kind.is_none()
            && self.max_fees >= DEFAULT_MAX_FEES
    }
}

/// Returns the records satisfying every active predicate, ordered by the
/// criteria's sort key. The sort is stable: ties preserve the input order.
#[must_use]
pub fn filter_universities<'a>(
    records: &'a [University],
    criteria: &ExploreCriteria,
) -> Vec<&'a University> {
    let needle = criteria.text.trim().to_lowercase();

    let mut result: Vec<&University> = records
        .iter()
        .filter(|uni| needle.is_empty() || matches_text(uni, &needle))
        .filter(|uni| {
            criteria
                .region
                .as_deref()
                .is_none_or(|region| uni.region() == region)
        })
        .filter(|uni| criteria.kind.is_none_or(|kind| uni.kind() == kind))
        .filter(|uni| uni.avg_fees() <= criteria.max_fees)
        .collect();

    match criteria.sort {
        SortKey::NameAsc => result.sort_by(|a, b| name_key(a).cmp(&name_key(b))),
        SortKey::NameDesc => result.sort_by(|a, b| name_key(b).cmp(&name_key(a))),
        SortKey::FeesAsc => result.sort_by(|a, b| a.avg_fees().cmp(&b.avg_fees())),
        SortKey::FeesDesc => result.sort_by(|a, b| b.avg_fees().cmp(&a.avg_fees())),
    }

    result
}

/// Region labels in first-seen dataset order, for the filter dropdown.
#[must_use]
pub fn distinct_regions(records: &[University]) -> Vec<String> {
    let mut regions: Vec<String> = Vec::new();
    for uni in records {
        if !regions.iter().any(|region| region == uni.region()) {
            regions.push(uni.region().to_owned());
        }
    }
    regions
}

fn matches_text(uni: &University, needle: &str) -> bool {
    uni.name().to_lowercase().contains(needle)
        || uni
            .programs()
            .iter()
            .any(|program| program.name().to_lowercase().contains(needle))
}

fn name_key(uni: &University) -> String {
    uni.name().to_lowercase()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
