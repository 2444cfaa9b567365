use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use api::UniversityGateway;
use scout_core::Clock;
use scout_core::model::{University, UniversityId};

use crate::error::DirectoryError;

/// One generation of the university dataset.
///
/// Snapshots are replaced wholesale: `refresh` produces a new one; nothing
/// ever mutates a loaded record in place.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectorySnapshot {
    universities: Vec<University>,
    fetched_at: DateTime<Utc>,
}

impl DirectorySnapshot {
    #[must_use]
    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    #[must_use]
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.universities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }
}

/// Loads and refreshes the university dataset through the gateway.
pub struct DirectoryService {
    clock: Clock,
    gateway: Arc<dyn UniversityGateway>,
}

impl DirectoryService {
    #[must_use]
    pub fn new(clock: Clock, gateway: Arc<dyn UniversityGateway>) -> Self {
        Self { clock, gateway }
    }

    /// Fetch the full dataset into a fresh snapshot.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError` when the gateway call fails. No retry; the
    /// caller re-triggers the action.
    pub async fn load(&self) -> Result<DirectorySnapshot, DirectoryError> {
        let universities = self.gateway.fetch_all().await?;
        info!(count = universities.len(), "loaded university dataset");
        Ok(DirectorySnapshot {
            universities,
            fetched_at: self.clock.now(),
        })
    }

    /// Fetch a single record.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError` wrapping `GatewayError::NotFound` for a
    /// missing id, or the gateway failure otherwise.
    pub async fn get(&self, id: UniversityId) -> Result<University, DirectoryError> {
        Ok(self.gateway.fetch_one(id).await?)
    }

    /// Ask the backend to re-scrape, then re-fetch the dataset.
    ///
    /// The re-fetch is sequenced strictly after the scrape acknowledgment;
    /// the two are never in flight concurrently.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError` from whichever step fails first.
    pub async fn refresh(&self) -> Result<DirectorySnapshot, DirectoryError> {
        info!("triggering backend data refresh");
        self.gateway.trigger_refresh().await?;
        self.load().await
    }
}
