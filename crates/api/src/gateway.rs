use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use scout_core::model::{University, UniversityId, WizardPreferences};
use scout_core::{insights, recommend};

/// Errors surfaced by gateway adapters.
///
/// Transport failures, timeouts, and non-2xx statuses all collapse into
/// `Network`; callers cannot (and must not) distinguish them. Exactly one
/// attempt is made per call; nothing here retries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GatewayError {
    #[error("network request failed: {0}")]
    Network(String),

    #[error("university {0} not found")]
    NotFound(UniversityId),

    #[error("malformed payload: {0}")]
    Validation(String),
}

/// Gateway contract for the university backend.
#[async_trait]
pub trait UniversityGateway: Send + Sync {
    /// Fetch the full university list.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Network` on transport failure, timeout, or a
    /// non-2xx response.
    async fn fetch_all(&self) -> Result<Vec<University>, GatewayError>;

    /// Fetch a single university by id.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::NotFound` when the backend answers 404, other
    /// `GatewayError` variants as for `fetch_all`.
    async fn fetch_one(&self, id: UniversityId) -> Result<University, GatewayError>;

    /// Universities-per-region breakdown from the backend.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` as for `fetch_all`.
    async fn region_insights(&self) -> Result<HashMap<String, u64>, GatewayError>;

    /// Universities-per-type breakdown from the backend.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` as for `fetch_all`.
    async fn type_insights(&self) -> Result<HashMap<String, u64>, GatewayError>;

    /// Universities-per-difficulty breakdown from the backend.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` as for `fetch_all`.
    async fn difficulty_insights(&self) -> Result<HashMap<String, u64>, GatewayError>;

    /// Server-side wizard recommendations for the given preferences.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` as for `fetch_all`.
    async fn recommendations(
        &self,
        preferences: &WizardPreferences,
    ) -> Result<Vec<University>, GatewayError>;

    /// Ask the backend to re-scrape its sources. Resolves only once the
    /// backend acknowledges completion; callers re-fetch afterwards.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` as for `fetch_all`.
    async fn trigger_refresh(&self) -> Result<(), GatewayError>;
}

/// In-memory gateway for tests and prototyping.
///
/// Serves a seeded dataset, answers insight/recommendation calls via the
/// core engines, records the order of operations, and can be armed to fail
/// its next call.
#[derive(Clone, Default)]
pub struct InMemoryGateway {
    records: Arc<Mutex<Vec<University>>>,
    after_refresh: Arc<Mutex<Option<Vec<University>>>>,
    calls: Arc<Mutex<Vec<&'static str>>>,
    fail_next: Arc<Mutex<bool>>,
}

impl InMemoryGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_records(records: Vec<University>) -> Self {
        let gateway = Self::default();
        *gateway.records.lock().expect("gateway lock") = records;
        gateway
    }

    /// Replace the served dataset.
    pub fn seed(&self, records: Vec<University>) {
        *self.records.lock().expect("gateway lock") = records;
    }

    /// Dataset that becomes visible after the next `trigger_refresh`.
    pub fn stage_refreshed_records(&self, records: Vec<University>) {
        *self.after_refresh.lock().expect("gateway lock") = Some(records);
    }

    /// Arm the gateway to fail its next operation with a `Network` error.
    pub fn fail_next_call(&self) {
        *self.fail_next.lock().expect("gateway lock") = true;
    }

    /// Operation names in invocation order.
    #[must_use]
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("gateway lock").clone()
    }

    fn enter(&self, op: &'static str) -> Result<(), GatewayError> {
        self.calls.lock().map_err(poisoned)?.push(op);
        let mut fail = self.fail_next.lock().map_err(poisoned)?;
        if std::mem::take(&mut *fail) {
            return Err(GatewayError::Network("injected failure".into()));
        }
        Ok(())
    }

    fn snapshot(&self) -> Result<Vec<University>, GatewayError> {
        Ok(self.records.lock().map_err(poisoned)?.clone())
    }
}

fn poisoned<T>(e: std::sync::PoisonError<T>) -> GatewayError {
    GatewayError::Network(e.to_string())
}

#[async_trait]
impl UniversityGateway for InMemoryGateway {
    async fn fetch_all(&self) -> Result<Vec<University>, GatewayError> {
        self.enter("fetch_all")?;
        self.snapshot()
    }

    async fn fetch_one(&self, id: UniversityId) -> Result<University, GatewayError> {
        self.enter("fetch_one")?;
        self.snapshot()?
            .into_iter()
            .find(|uni| uni.id() == id)
            .ok_or(GatewayError::NotFound(id))
    }

    async fn region_insights(&self) -> Result<HashMap<String, u64>, GatewayError> {
        self.enter("region_insights")?;
        Ok(insights::region_counts(&self.snapshot()?).into_iter().collect())
    }

    async fn type_insights(&self) -> Result<HashMap<String, u64>, GatewayError> {
        self.enter("type_insights")?;
        Ok(insights::type_counts(&self.snapshot()?).into_iter().collect())
    }

    async fn difficulty_insights(&self) -> Result<HashMap<String, u64>, GatewayError> {
        self.enter("difficulty_insights")?;
        Ok(insights::difficulty_counts(&self.snapshot()?).into_iter().collect())
    }

    async fn recommendations(
        &self,
        preferences: &WizardPreferences,
    ) -> Result<Vec<University>, GatewayError> {
        self.enter("recommendations")?;
        let records = self.snapshot()?;
        Ok(recommend::recommend(&records, preferences)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn trigger_refresh(&self) -> Result<(), GatewayError> {
        self.enter("trigger_refresh")?;
        if let Some(staged) = self.after_refresh.lock().map_err(poisoned)?.take() {
            *self.records.lock().map_err(poisoned)? = staged;
        }
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
