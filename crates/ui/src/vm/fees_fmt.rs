/// Format an annual fee amount with thousands separators and the currency
/// unit, e.g. `5,000,000 TZS`.
#[must_use]
pub fn format_tzs(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{grouped} TZS")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_tzs(0), "0 TZS");
        assert_eq!(format_tzs(950), "950 TZS");
        assert_eq!(format_tzs(1_000), "1,000 TZS");
        assert_eq!(format_tzs(5_000_000), "5,000,000 TZS");
        assert_eq!(format_tzs(12_345_678), "12,345,678 TZS");
    }
}
