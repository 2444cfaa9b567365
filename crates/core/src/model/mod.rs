mod comparison;
mod ids;
mod university;
mod wizard;

pub use comparison::{ComparisonSelection, MAX_COMPARED, ToggleOutcome};
pub use ids::UniversityId;
pub use university::{Difficulty, Program, University, UniversityError, UniversityType};
pub use wizard::{ANY_CHOICE, WizardPreferences};
