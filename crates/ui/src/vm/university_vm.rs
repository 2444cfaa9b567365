use scout_core::model::{Difficulty, University};

use crate::vm::fees_fmt::format_tzs;

/// UI-ready representation of a university for the explore grid and
/// recommendation lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UniversityCardVm {
    pub id: u64,
    pub name: String,
    pub acronym: Option<String>,
    pub region: String,
    pub kind_label: &'static str,
    pub fees_str: String,
    pub difficulty_label: &'static str,
    pub difficulty_class: &'static str,
    pub program_count: usize,
}

/// CSS hook for a difficulty badge.
#[must_use]
pub fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Low => "difficulty-low",
        Difficulty::Medium => "difficulty-medium",
        Difficulty::High => "difficulty-high",
        Difficulty::VeryHigh => "difficulty-very-high",
    }
}

#[must_use]
pub fn map_university_card(uni: &University) -> UniversityCardVm {
    UniversityCardVm {
        id: uni.id().value(),
        name: uni.name().to_owned(),
        acronym: uni.acronym().map(str::to_owned),
        region: uni.region().to_owned(),
        kind_label: uni.kind().label(),
        fees_str: format_tzs(uni.avg_fees()),
        difficulty_label: uni.difficulty().label(),
        difficulty_class: difficulty_class(uni.difficulty()),
        program_count: uni.programs().len(),
    }
}

/// One row of the detail view's programs table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramRowVm {
    pub name: String,
    pub duration_str: String,
    pub difficulty_label: &'static str,
    pub prospects: String,
}

#[must_use]
pub fn map_program_rows(uni: &University) -> Vec<ProgramRowVm> {
    uni.programs()
        .iter()
        .map(|program| ProgramRowVm {
            name: program.name().to_owned(),
            duration_str: match program.duration_years() {
                1 => "1 year".to_owned(),
                n => format!("{n} years"),
            },
            difficulty_label: program.program_difficulty().label(),
            prospects: program.prospects().unwrap_or("N/A").to_owned(),
        })
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::model::{Program, UniversityId, UniversityType};

    fn sample() -> University {
        University::new(
            UniversityId::new(3),
            "Sokoine University of Agriculture",
            Some("SUA".into()),
            "Morogoro",
            None,
            UniversityType::Public,
            4_200_000,
            Difficulty::High,
            None,
            None,
            vec![
                Program::new("Veterinary Medicine", 5, Difficulty::VeryHigh, Some("Practice".into()))
                    .unwrap(),
                Program::new("Agronomy", 1, Difficulty::Medium, None).unwrap(),
            ],
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn maps_card_fields() {
        let card = map_university_card(&sample());
        assert_eq!(card.id, 3);
        assert_eq!(card.acronym.as_deref(), Some("SUA"));
        assert_eq!(card.fees_str, "4,200,000 TZS");
        assert_eq!(card.difficulty_label, "High");
        assert_eq!(card.difficulty_class, "difficulty-high");
        assert_eq!(card.program_count, 2);
    }

    #[test]
    fn program_rows_pluralize_duration() {
        let rows = map_program_rows(&sample());
        assert_eq!(rows[0].duration_str, "5 years");
        assert_eq!(rows[1].duration_str, "1 year");
        assert_eq!(rows[1].prospects, "N/A");
    }
}
