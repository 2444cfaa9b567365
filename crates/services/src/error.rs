//! Shared error types for the services crate.

use thiserror::Error;

use api::GatewayError;

/// Errors emitted by `DirectoryService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DirectoryError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl DirectoryError {
    /// True when the failure was a missing single record (backend 404).
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, DirectoryError::Gateway(GatewayError::NotFound(_)))
    }
}

/// Errors emitted by `WizardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WizardError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Errors emitted by `InsightsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InsightsError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
