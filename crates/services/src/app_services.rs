use std::sync::Arc;

use api::{ApiConfig, HttpGateway, UniversityGateway};
use scout_core::Clock;

use crate::directory_service::DirectoryService;
use crate::error::AppServicesError;
use crate::insights_service::InsightsService;
use crate::wizard_service::WizardService;

/// Assembles the app-facing services over a shared gateway.
#[derive(Clone)]
pub struct AppServices {
    directory: Arc<DirectoryService>,
    wizard: Arc<WizardService>,
    insights: Arc<InsightsService>,
}

impl AppServices {
    /// Build services over any gateway implementation.
    #[must_use]
    pub fn new(clock: Clock, gateway: Arc<dyn UniversityGateway>) -> Self {
        let directory = Arc::new(DirectoryService::new(clock, Arc::clone(&gateway)));
        let wizard = Arc::new(WizardService::new(Arc::clone(&gateway)));
        let insights = Arc::new(InsightsService::new(gateway));

        Self {
            directory,
            wizard,
            insights,
        }
    }

    /// Build services backed by the HTTP gateway.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the HTTP client cannot be built.
    pub fn new_http(config: &ApiConfig, clock: Clock) -> Result<Self, AppServicesError> {
        let gateway: Arc<dyn UniversityGateway> = Arc::new(HttpGateway::new(config)?);
        Ok(Self::new(clock, gateway))
    }

    #[must_use]
    pub fn directory(&self) -> Arc<DirectoryService> {
        Arc::clone(&self.directory)
    }

    #[must_use]
    pub fn wizard(&self) -> Arc<WizardService> {
        Arc::clone(&self.wizard)
    }

    #[must_use]
    pub fn insights(&self) -> Arc<InsightsService> {
        Arc::clone(&self.insights)
    }
}
