use std::collections::HashMap;
use std::sync::Arc;

use api::UniversityGateway;
use scout_core::insights;
use scout_core::model::{Difficulty, University, UniversityType};

use crate::error::InsightsError;

/// The three dataset breakdowns rendered by the insights view, each as
/// ordered `(label, count)` pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InsightsReport {
    pub regions: Vec<(String, u64)>,
    pub types: Vec<(String, u64)>,
    pub difficulty: Vec<(String, u64)>,
}

impl InsightsReport {
    /// Normalize the backend's unordered maps: regions by descending count
    /// (name as tiebreak), types and difficulty in their fixed orders with
    /// zero-count entries included.
    #[must_use]
    pub fn from_maps(
        regions: HashMap<String, u64>,
        types: HashMap<String, u64>,
        difficulty: HashMap<String, u64>,
    ) -> Self {
        let mut regions: Vec<(String, u64)> = regions.into_iter().collect();
        regions.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let types = UniversityType::ALL
            .into_iter()
            .map(|kind| {
                let count = types.get(kind.label()).copied().unwrap_or(0);
                (kind.label().to_owned(), count)
            })
            .collect();

        let difficulty = Difficulty::ALL
            .into_iter()
            .map(|level| {
                let count = difficulty.get(level.label()).copied().unwrap_or(0);
                (level.label().to_owned(), count)
            })
            .collect();

        Self {
            regions,
            types,
            difficulty,
        }
    }
}

/// Aggregated breakdowns, computed locally or fetched from the backend.
pub struct InsightsService {
    gateway: Arc<dyn UniversityGateway>,
}

impl InsightsService {
    #[must_use]
    pub fn new(gateway: Arc<dyn UniversityGateway>) -> Self {
        Self { gateway }
    }

    /// Count the loaded dataset client-side.
    #[must_use]
    pub fn local(records: &[University]) -> InsightsReport {
        InsightsReport {
            regions: insights::region_counts(records),
            types: insights::type_counts(records),
            difficulty: insights::difficulty_counts(records),
        }
    }

    /// Fetch all three breakdowns from the backend, concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first `InsightsError` if any request fails; the report is
    /// all-or-nothing.
    pub async fn fetch(&self) -> Result<InsightsReport, InsightsError> {
        let (regions, types, difficulty) = tokio::try_join!(
            self.gateway.region_insights(),
            self.gateway.type_insights(),
            self.gateway.difficulty_insights(),
        )?;
        Ok(InsightsReport::from_maps(regions, types, difficulty))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
