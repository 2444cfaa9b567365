use scout_core::model::WizardPreferences;

/// Fixed type choices for the wizard's second step.
pub const TYPE_OPTIONS: [&str; 3] = ["Any", "Public", "Private"];

/// Fixed interest choices for the wizard's fourth step.
pub const INTEREST_OPTIONS: [&str; 8] = [
    "Any",
    "STEM",
    "Humanities",
    "Business",
    "Health Sciences",
    "Agriculture",
    "Law",
    "Education",
];

/// Fixed difficulty choices for the wizard's fifth step.
pub const DIFFICULTY_OPTIONS: [&str; 5] = ["Any", "Low", "Medium", "High", "Very High"];

/// The wizard's five questions, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    Region,
    Kind,
    Budget,
    Interest,
    Difficulty,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Region,
        WizardStep::Kind,
        WizardStep::Budget,
        WizardStep::Interest,
        WizardStep::Difficulty,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Region => "Preferred region?",
            WizardStep::Kind => "University type?",
            WizardStep::Budget => "Annual budget (TZS)?",
            WizardStep::Interest => "Academic interest?",
            WizardStep::Difficulty => "Preferred difficulty?",
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            WizardStep::Region => "Where would you like to study?",
            WizardStep::Kind => "What kind of institution interests you?",
            WizardStep::Budget => "What's your comfortable budget range?",
            WizardStep::Interest => "What field excites you most?",
            WizardStep::Difficulty => "How challenging do you want your studies?",
        }
    }
}

/// User intents against the wizard state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardIntent {
    /// Pick an option on the current step ("Any" clears the constraint).
    Choose(String),
    /// Set or clear the budget ceiling (the budget step only).
    ChooseBudget(Option<u64>),
    Next,
    Back,
    Restart,
}

/// The wizard's whole client-side state: current step, the preferences
/// accumulated so far, and whether the results panel is showing.
///
/// Pure state machine; all mutation goes through [`WizardFlow::apply`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WizardFlow {
    step_index: usize,
    preferences: WizardPreferences,
    show_results: bool,
}

impl WizardFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_step(&self) -> WizardStep {
        WizardStep::ALL[self.step_index]
    }

    /// 1-based position for the progress indicator.
    #[must_use]
    pub fn step_number(&self) -> usize {
        self.step_index + 1
    }

    #[must_use]
    pub fn total_steps(&self) -> usize {
        WizardStep::ALL.len()
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn progress_percent(&self) -> u8 {
        (self.step_number() * 100 / self.total_steps()) as u8
    }

    #[must_use]
    pub fn preferences(&self) -> &WizardPreferences {
        &self.preferences
    }

    #[must_use]
    pub fn show_results(&self) -> bool {
        self.show_results
    }

    #[must_use]
    pub fn is_first_step(&self) -> bool {
        self.step_index == 0
    }

    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.step_index + 1 == self.total_steps()
    }

    /// The current selection label for a step, "Any" when unconstrained.
    #[must_use]
    pub fn selection_label(&self, step: WizardStep) -> String {
        let prefs = &self.preferences;
        match step {
            WizardStep::Region => prefs.region().unwrap_or("Any").to_owned(),
            WizardStep::Kind => prefs
                .kind()
                .map_or_else(|| "Any".to_owned(), |kind| kind.label().to_owned()),
            WizardStep::Budget => prefs
                .max_fees()
                .map_or_else(|| "Any".to_owned(), |fees| fees.to_string()),
            WizardStep::Interest => prefs.academic_interest().unwrap_or("Any").to_owned(),
            WizardStep::Difficulty => prefs
                .difficulty()
                .map_or_else(|| "Any".to_owned(), |level| level.label().to_owned()),
        }
    }

    pub fn apply(&mut self, intent: WizardIntent) {
        match intent {
            WizardIntent::Choose(choice) => match self.current_step() {
                WizardStep::Region => self.preferences.choose_region(&choice),
                WizardStep::Kind => self.preferences.choose_kind(&choice),
                WizardStep::Interest => self.preferences.choose_interest(&choice),
                WizardStep::Difficulty => self.preferences.choose_difficulty(&choice),
                // The budget step uses ChooseBudget.
                WizardStep::Budget => {}
            },
            WizardIntent::ChooseBudget(max_fees) => {
                self.preferences.choose_max_fees(max_fees);
            }
            WizardIntent::Next => {
                if self.is_last_step() {
                    self.show_results = true;
                } else {
                    self.step_index += 1;
                }
            }
            WizardIntent::Back => {
                if self.show_results {
                    self.show_results = false;
                } else if self.step_index > 0 {
                    self.step_index -= 1;
                }
            }
            WizardIntent::Restart => *self = Self::new(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::model::{Difficulty, UniversityType};

    #[test]
    fn five_forward_steps_reach_the_results() {
        let mut flow = WizardFlow::new();
        assert_eq!(flow.current_step(), WizardStep::Region);
        assert_eq!(flow.progress_percent(), 20);

        for _ in 0..4 {
            flow.apply(WizardIntent::Next);
            assert!(!flow.show_results());
        }
        assert_eq!(flow.current_step(), WizardStep::Difficulty);
        assert_eq!(flow.progress_percent(), 100);

        flow.apply(WizardIntent::Next);
        assert!(flow.show_results());
    }

    #[test]
    fn back_is_bounded_at_the_first_step() {
        let mut flow = WizardFlow::new();
        flow.apply(WizardIntent::Back);
        assert_eq!(flow.current_step(), WizardStep::Region);
        assert!(flow.is_first_step());
    }

    #[test]
    fn back_from_results_returns_to_the_last_step() {
        let mut flow = WizardFlow::new();
        for _ in 0..5 {
            flow.apply(WizardIntent::Next);
        }
        assert!(flow.show_results());

        flow.apply(WizardIntent::Back);
        assert!(!flow.show_results());
        assert_eq!(flow.current_step(), WizardStep::Difficulty);
    }

    #[test]
    fn choices_accumulate_into_preferences() {
        let mut flow = WizardFlow::new();
        flow.apply(WizardIntent::Choose("Arusha".into()));
        flow.apply(WizardIntent::Next);
        flow.apply(WizardIntent::Choose("Private".into()));
        flow.apply(WizardIntent::Next);
        flow.apply(WizardIntent::ChooseBudget(Some(3_000_000)));
        flow.apply(WizardIntent::Next);
        flow.apply(WizardIntent::Choose("STEM".into()));
        flow.apply(WizardIntent::Next);
        flow.apply(WizardIntent::Choose("Low".into()));

        let prefs = flow.preferences();
        assert_eq!(prefs.region(), Some("Arusha"));
        assert_eq!(prefs.kind(), Some(UniversityType::Private));
        assert_eq!(prefs.max_fees(), Some(3_000_000));
        assert_eq!(prefs.academic_interest(), Some("STEM"));
        assert_eq!(prefs.difficulty(), Some(Difficulty::Low));
    }

    #[test]
    fn any_choices_leave_fields_unset() {
        let mut flow = WizardFlow::new();
        flow.apply(WizardIntent::Choose("Any".into()));
        flow.apply(WizardIntent::Next);
        flow.apply(WizardIntent::Choose("Any".into()));

        assert!(flow.preferences().is_unconstrained());
        assert_eq!(flow.selection_label(WizardStep::Region), "Any");
    }

    #[test]
    fn restart_resets_everything() {
        let mut flow = WizardFlow::new();
        flow.apply(WizardIntent::Choose("Mbeya".into()));
        for _ in 0..5 {
            flow.apply(WizardIntent::Next);
        }
        assert!(flow.show_results());

        flow.apply(WizardIntent::Restart);
        assert_eq!(flow, WizardFlow::new());
    }

    #[test]
    fn selection_labels_reflect_choices() {
        let mut flow = WizardFlow::new();
        flow.apply(WizardIntent::Choose("Dodoma".into()));
        assert_eq!(flow.selection_label(WizardStep::Region), "Dodoma");
        assert_eq!(flow.selection_label(WizardStep::Difficulty), "Any");
    }
}
