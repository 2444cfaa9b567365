use serde::{Deserialize, Serialize};

use crate::model::university::{Difficulty, UniversityType};

/// The wizard's "no constraint" option label.
pub const ANY_CHOICE: &str = "Any";

/// Partial filter criteria collected across the wizard's five steps.
///
/// Unset fields impose no constraint. The UI's "Any" sentinel is translated
/// to `None` here, at the boundary, so the engines never see sentinel
/// strings. Serializes to the backend wire shape for
/// `POST /wizard/recommendations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<UniversityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_fees: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    academic_interest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    difficulty: Option<Difficulty>,
}

impl WizardPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the region from a wizard choice; "Any" or blank clears it.
    pub fn choose_region(&mut self, choice: &str) {
        self.region = non_sentinel(choice).map(str::to_owned);
    }

    /// Set the type from a wizard choice; "Any" or an unknown label clears it.
    pub fn choose_kind(&mut self, choice: &str) {
        self.kind = non_sentinel(choice).and_then(|label| label.parse().ok());
    }

    pub fn choose_max_fees(&mut self, max_fees: Option<u64>) {
        self.max_fees = max_fees;
    }

    /// Set the academic interest; "Any" or blank clears it.
    pub fn choose_interest(&mut self, choice: &str) {
        self.academic_interest = non_sentinel(choice).map(str::to_owned);
    }

    /// Set the difficulty from a wizard choice; "Any" or an unknown label
    /// clears it.
    pub fn choose_difficulty(&mut self, choice: &str) {
        self.difficulty = non_sentinel(choice).and_then(|label| label.parse().ok());
    }

    // Accessors
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    #[must_use]
    pub fn kind(&self) -> Option<UniversityType> {
        self.kind
    }

    #[must_use]
    pub fn max_fees(&self) -> Option<u64> {
        self.max_fees
    }

    #[must_use]
    pub fn academic_interest(&self) -> Option<&str> {
        self.academic_interest.as_deref()
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// True when no field imposes a constraint.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.region.is_none()
            && self.kind.is_none()
            && self.max_fees.is_none()
            && self.academic_interest.is_none()
            && self.difficulty.is_none()
    }
}

fn non_sentinel(choice: &str) -> Option<&str> {
    let trimmed = choice.trim();
    if trimmed.is_empty() || trimmed == ANY_CHOICE {
        None
    } else {
        Some(trimmed)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_preferences_are_unconstrained() {
        assert!(WizardPreferences::new().is_unconstrained());
    }

    #[test]
    fn any_choice_clears_fields() {
        let mut prefs = WizardPreferences::new();
        prefs.choose_region("Arusha");
        prefs.choose_kind("Public");
        prefs.choose_interest("STEM");
        prefs.choose_difficulty("Very High");
        assert!(!prefs.is_unconstrained());

        prefs.choose_region(ANY_CHOICE);
        prefs.choose_kind(ANY_CHOICE);
        prefs.choose_interest(ANY_CHOICE);
        prefs.choose_difficulty(ANY_CHOICE);
        assert!(prefs.is_unconstrained());
    }

    #[test]
    fn unknown_labels_degrade_to_no_constraint() {
        let mut prefs = WizardPreferences::new();
        prefs.choose_kind("Parastatal");
        prefs.choose_difficulty("Impossible");
        assert_eq!(prefs.kind(), None);
        assert_eq!(prefs.difficulty(), None);
    }

    #[test]
    fn serializes_to_backend_wire_shape() {
        let mut prefs = WizardPreferences::new();
        prefs.choose_region("Dodoma");
        prefs.choose_kind("Private");
        prefs.choose_max_fees(Some(3_000_000));
        prefs.choose_difficulty("Very High");

        let json = serde_json::to_value(&prefs).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "region": "Dodoma",
                "type": "Private",
                "max_fees": 3_000_000,
                "difficulty": "Very High",
            })
        );
    }

    #[test]
    fn unset_fields_are_omitted_from_the_wire() {
        let json = serde_json::to_string(&WizardPreferences::new()).unwrap();
        assert_eq!(json, "{}");
    }
}
