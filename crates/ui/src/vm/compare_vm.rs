use scout_core::model::{ComparisonSelection, University};

use crate::vm::fees_fmt::format_tzs;

/// One selected university heading the comparison table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareColumnVm {
    pub id: u64,
    pub name: String,
    pub acronym: Option<String>,
}

/// One feature row across all selected universities. `values` is aligned
/// with the table's columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareRowVm {
    pub label: &'static str,
    pub values: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompareTableVm {
    pub columns: Vec<CompareColumnVm>,
    pub rows: Vec<CompareRowVm>,
}

/// Build the side-by-side table for the current selection, in selection
/// insertion order. Ids that are no longer in the dataset are skipped.
#[must_use]
pub fn map_compare_table(
    selection: &ComparisonSelection,
    records: &[University],
) -> CompareTableVm {
    let selected: Vec<&University> = selection
        .ids()
        .iter()
        .filter_map(|id| records.iter().find(|uni| uni.id() == *id))
        .collect();

    if selected.is_empty() {
        return CompareTableVm::default();
    }

    let columns = selected
        .iter()
        .map(|uni| CompareColumnVm {
            id: uni.id().value(),
            name: uni.name().to_owned(),
            acronym: uni.acronym().map(str::to_owned),
        })
        .collect();

    let rows = vec![
        row("Region", &selected, |uni| uni.region().to_owned()),
        row("Type", &selected, |uni| uni.kind().label().to_owned()),
        row("Average Fees", &selected, |uni| format_tzs(uni.avg_fees())),
        row("Difficulty", &selected, |uni| {
            uni.difficulty().label().to_owned()
        }),
        row("Programs", &selected, |uni| uni.programs().len().to_string()),
        row("Facilities", &selected, |uni| {
            if uni.facilities().is_empty() {
                "None listed".to_owned()
            } else {
                uni.facilities().join(", ")
            }
        }),
    ];

    CompareTableVm { columns, rows }
}

fn row(
    label: &'static str,
    selected: &[&University],
    value: impl Fn(&University) -> String,
) -> CompareRowVm {
    CompareRowVm {
        label,
        values: selected.iter().map(|uni| value(uni)).collect(),
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::model::{Difficulty, UniversityId, UniversityType};

    fn uni(id: u64, name: &str, fees: u64) -> University {
        University::new(
            UniversityId::new(id),
            name,
            None,
            "Dodoma",
            None,
            UniversityType::Public,
            fees,
            Difficulty::Medium,
            None,
            None,
            Vec::new(),
            vec!["Library".into()],
        )
        .unwrap()
    }

    #[test]
    fn table_follows_selection_insertion_order() {
        let records = vec![uni(1, "Alpha", 1_000_000), uni(2, "Beta", 2_000_000)];
        let mut selection = ComparisonSelection::new();
        selection.toggle(UniversityId::new(2));
        selection.toggle(UniversityId::new(1));

        let table = map_compare_table(&selection, &records);
        let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Beta", "Alpha"]);

        let fees_row = table.rows.iter().find(|r| r.label == "Average Fees").unwrap();
        assert_eq!(fees_row.values, vec!["2,000,000 TZS", "1,000,000 TZS"]);
    }

    #[test]
    fn stale_ids_are_skipped() {
        let records = vec![uni(1, "Alpha", 1_000_000)];
        let mut selection = ComparisonSelection::new();
        selection.toggle(UniversityId::new(1));
        selection.toggle(UniversityId::new(99));

        let table = map_compare_table(&selection, &records);
        assert_eq!(table.columns.len(), 1);
        assert!(table.rows.iter().all(|row| row.values.len() == 1));
    }

    #[test]
    fn empty_selection_yields_an_empty_table() {
        let records = vec![uni(1, "Alpha", 1_000_000)];
        let table = map_compare_table(&ComparisonSelection::new(), &records);
        assert!(table.columns.is_empty());
        assert!(table.rows.is_empty());
    }
}
