use std::sync::Arc;

use dioxus::prelude::*;

use scout_core::model::{ComparisonSelection, ToggleOutcome, UniversityId};
use services::{DirectoryService, DirectorySnapshot, InsightsService, WizardService};

use crate::views::{ViewError, ViewState};
use crate::vm::{WizardFlow, WizardIntent};

/// Services the UI needs from the application composition root
/// (e.g. `crates/app`).
pub trait UiApp: Send + Sync {
    fn directory(&self) -> Arc<DirectoryService>;
    fn wizard(&self) -> Arc<WizardService>;
    fn insights(&self) -> Arc<InsightsService>;
}

/// Shared state and services for the view tree.
///
/// Views read the signals exposed here and mutate state only through the
/// named intent methods, never by assigning signal contents directly. The
/// dataset signal is replaced wholesale by `load_directory`/`refresh_data`;
/// records are never edited in place.
#[derive(Clone)]
pub struct AppContext {
    directory_service: Arc<DirectoryService>,
    wizard_service: Arc<WizardService>,
    insights_service: Arc<InsightsService>,

    directory: Signal<ViewState<DirectorySnapshot>>,
    refreshing: Signal<bool>,
    comparison: Signal<ComparisonSelection>,
    wizard_flow: Signal<WizardFlow>,
}

impl AppContext {
    /// Must be called from component scope (signals are created here).
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            directory_service: app.directory(),
            wizard_service: app.wizard(),
            insights_service: app.insights(),
            directory: Signal::new(ViewState::Idle),
            refreshing: Signal::new(false),
            comparison: Signal::new(ComparisonSelection::new()),
            wizard_flow: Signal::new(WizardFlow::new()),
        }
    }

    // ─── Read access ───────────────────────────────────────────────────────

    #[must_use]
    pub fn directory(&self) -> Signal<ViewState<DirectorySnapshot>> {
        self.directory
    }

    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        *self.refreshing.read()
    }

    #[must_use]
    pub fn comparison(&self) -> Signal<ComparisonSelection> {
        self.comparison
    }

    #[must_use]
    pub fn wizard_flow(&self) -> Signal<WizardFlow> {
        self.wizard_flow
    }

    #[must_use]
    pub fn wizard_service(&self) -> Arc<WizardService> {
        Arc::clone(&self.wizard_service)
    }

    #[must_use]
    pub fn insights_service(&self) -> Arc<InsightsService> {
        Arc::clone(&self.insights_service)
    }

    #[must_use]
    pub fn directory_service(&self) -> Arc<DirectoryService> {
        Arc::clone(&self.directory_service)
    }

    // ─── Intents ───────────────────────────────────────────────────────────

    /// Fetch the dataset into the shared signal.
    pub async fn load_directory(&self) {
        let mut directory = self.directory;
        directory.set(ViewState::Loading);
        match self.directory_service.load().await {
            Ok(snapshot) => directory.set(ViewState::Ready(snapshot)),
            Err(_) => directory.set(ViewState::Error(ViewError::Network)),
        }
    }

    /// Ask the backend to re-scrape, then replace the dataset. Keeps the
    /// current data on screen while the refresh is in flight.
    pub async fn refresh_data(&self) {
        let mut refreshing = self.refreshing;
        if *refreshing.peek() {
            return;
        }
        refreshing.set(true);
        let mut directory = self.directory;
        match self.directory_service.refresh().await {
            Ok(snapshot) => directory.set(ViewState::Ready(snapshot)),
            Err(_) => directory.set(ViewState::Error(ViewError::Network)),
        }
        refreshing.set(false);
    }

    /// Toggle a university in the comparison selection (capped at 4).
    pub fn toggle_compare(&self, id: UniversityId) -> ToggleOutcome {
        let mut comparison = self.comparison;
        let outcome = comparison.write().toggle(id);
        outcome
    }

    /// Empty the comparison selection.
    pub fn clear_comparison(&self) {
        let mut comparison = self.comparison;
        comparison.write().clear();
    }

    /// Advance the wizard state machine.
    pub fn dispatch_wizard(&self, intent: WizardIntent) {
        let mut wizard_flow = self.wizard_flow;
        wizard_flow.write().apply(intent);
    }
}

/// Build and provide an `AppContext` from a UI-facing app implementation.
/// Must be called from component scope.
#[must_use]
pub fn provide_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    let app = Arc::clone(app);
    use_context_provider(move || AppContext::new(&app))
}
