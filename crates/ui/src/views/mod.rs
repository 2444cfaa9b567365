mod card;
mod compare;
mod detail;
mod explore;
mod home;
mod insights;
mod state;
mod wizard;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use card::UniversityCard;
pub use compare::CompareView;
pub use detail::DetailView;
pub use explore::ExploreView;
pub use home::HomeView;
pub use insights::InsightsView;
pub use state::{view_state_from_resource, ViewError, ViewState};
pub use wizard::WizardView;
