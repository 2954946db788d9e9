/// Display helpers shared by list pages
use chrono::NaiveDate;

/// Whole-dollar amount with thousands separators
/// Example: 95000.0 -> "$95,000"
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}", sign, grouped)
}

/// Example: 2024-03-15 -> "Mar 15, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Ratio 0.0..=1.0 as a whole percentage
pub fn format_percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(95_000.0), "$95,000");
        assert_eq!(format_currency(1_250_000.4), "$1,250,000");
        assert_eq!(format_currency(-1500.0), "-$1,500");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "Mar 5, 2024");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.456), "46%");
        assert_eq!(format_percent(1.0), "100%");
    }
}
