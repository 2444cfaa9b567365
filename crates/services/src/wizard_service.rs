use std::sync::Arc;

use tracing::info;

use api::UniversityGateway;
use scout_core::model::{University, WizardPreferences};
use scout_core::recommend;

use crate::error::WizardError;

/// Wizard recommendations with a dual computation path: the core engine over
/// the in-memory dataset, or the backend's `/wizard/recommendations`
/// endpoint. Callers choose a path; there is no fallback between them.
pub struct WizardService {
    gateway: Arc<dyn UniversityGateway>,
}

impl WizardService {
    #[must_use]
    pub fn new(gateway: Arc<dyn UniversityGateway>) -> Self {
        Self { gateway }
    }

    /// Rank the loaded dataset against the preferences, client-side.
    #[must_use]
    pub fn recommend_local(
        &self,
        records: &[University],
        preferences: &WizardPreferences,
    ) -> Vec<University> {
        recommend::recommend(records, preferences)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Delegate the same computation to the backend.
    ///
    /// # Errors
    ///
    /// Returns `WizardError` when the gateway call fails.
    pub async fn recommend_backend(
        &self,
        preferences: &WizardPreferences,
    ) -> Result<Vec<University>, WizardError> {
        let results = self.gateway.recommendations(preferences).await?;
        info!(count = results.len(), "backend returned recommendations");
        Ok(results)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use api::InMemoryGateway;
    use scout_core::model::{Difficulty, Program, UniversityId, UniversityType};

    fn uni(id: u64, difficulty: Difficulty, program: &str) -> University {
        University::new(
            UniversityId::new(id),
            format!("University {id}"),
            None,
            "Arusha",
            None,
            UniversityType::Public,
            2_000_000,
            difficulty,
            None,
            None,
            vec![Program::new(program, 3, difficulty, None).unwrap()],
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn local_path_ranks_by_difficulty() {
        let service = WizardService::new(Arc::new(InMemoryGateway::new()));
        let records = vec![
            uni(1, Difficulty::VeryHigh, "Medicine"),
            uni(2, Difficulty::Low, "Nursing"),
        ];
        let mut prefs = WizardPreferences::new();
        prefs.choose_interest("Health Sciences");

        let results = service.recommend_local(&records, &prefs);
        let ids: Vec<u64> = results.iter().map(|uni| uni.id().value()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn backend_path_delegates_to_the_gateway() {
        let gateway = InMemoryGateway::with_records(vec![
            uni(1, Difficulty::High, "Engineering"),
            uni(2, Difficulty::Low, "Fine Arts"),
        ]);
        let service = WizardService::new(Arc::new(gateway.clone()));
        let mut prefs = WizardPreferences::new();
        prefs.choose_interest("STEM");

        let results = service.recommend_backend(&prefs).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id(), UniversityId::new(1));
        assert_eq!(gateway.calls(), vec!["recommendations"]);
    }

    #[tokio::test]
    async fn backend_failure_propagates_without_fallback() {
        let gateway = InMemoryGateway::with_records(vec![uni(1, Difficulty::Low, "Law")]);
        gateway.fail_next_call();
        let service = WizardService::new(Arc::new(gateway));

        let err = service
            .recommend_backend(&WizardPreferences::new())
            .await
            .unwrap_err();
        assert!(matches!(err, WizardError::Gateway(_)));
    }
}
