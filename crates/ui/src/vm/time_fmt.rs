use chrono::{DateTime, Utc};

#[must_use]
pub fn format_fetched_at(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::time::fixed_now;

    #[test]
    fn formats_compactly() {
        assert_eq!(format_fetched_at(fixed_now()), "2023-11-14 22:13 UTC");
    }
}
