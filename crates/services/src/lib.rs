#![forbid(unsafe_code)]

pub mod app_services;
pub mod directory_service;
pub mod error;
pub mod insights_service;
pub mod wizard_service;

pub use scout_core::Clock;

pub use app_services::AppServices;
pub use directory_service::{DirectoryService, DirectorySnapshot};
pub use error::{AppServicesError, DirectoryError, InsightsError, WizardError};
pub use insights_service::{InsightsReport, InsightsService};
pub use wizard_service::WizardService;
