mod compare_vm;
mod fees_fmt;
mod insights_vm;
mod time_fmt;
mod university_vm;
mod wizard_vm;

pub use compare_vm::{map_compare_table, CompareColumnVm, CompareRowVm, CompareTableVm};
pub use fees_fmt::format_tzs;
pub use insights_vm::{map_insight_bars, InsightBarVm};
pub use time_fmt::format_fetched_at;
pub use university_vm::{
    map_program_rows, map_university_card, ProgramRowVm, UniversityCardVm,
};
pub use wizard_vm::{
    WizardFlow, WizardIntent, WizardStep, DIFFICULTY_OPTIONS, INTEREST_OPTIONS, TYPE_OPTIONS,
};
