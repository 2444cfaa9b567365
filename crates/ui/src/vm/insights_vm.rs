/// One bar of an insights panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsightBarVm {
    pub label: String,
    pub count: u64,
    /// Width relative to the panel's largest bar, 0..=100.
    pub percent: u8,
}

#[must_use]
pub fn map_insight_bars(entries: &[(String, u64)]) -> Vec<InsightBarVm> {
    let max = entries.iter().map(|(_, count)| *count).max().unwrap_or(0);

    entries
        .iter()
        .map(|(label, count)| InsightBarVm {
            label: label.clone(),
            count: *count,
            percent: if max == 0 {
                0
            } else {
                u8::try_from(count * 100 / max).unwrap_or(100)
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_relative_to_the_largest_bar() {
        let bars = map_insight_bars(&[
            ("Dar es Salaam".to_string(), 4),
            ("Arusha".to_string(), 1),
        ]);
        assert_eq!(bars[0].percent, 100);
        assert_eq!(bars[1].percent, 25);
    }

    #[test]
    fn zero_counts_do_not_divide_by_zero() {
        let bars = map_insight_bars(&[("Low".to_string(), 0)]);
        assert_eq!(bars[0].percent, 0);
    }
}
