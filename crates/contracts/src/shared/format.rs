//! Number formatting for dashboard figures.
//!
//! Policy: currency gets a dollar prefix and no decimal places, counts get
//! `,` thousands separators, percentages are printed exactly as stored on
//! the record. Rounding is to the nearest integer, half away from zero.

/// Groups an integer with `,` separators: 1234567 -> "1,234,567".
pub fn format_thousands(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Currency with a dollar prefix and no decimal places: 187345.0 -> "$187,345".
pub fn format_currency(value: f64) -> String {
    format!("${}", format_thousands(value.round() as i64))
}

/// Count with thousands separators: 2553 -> "2,553".
pub fn format_count(value: u64) -> String {
    format_thousands(value as i64)
}

/// Percentage printed exactly as stored: 35.0 -> "35%", 12.5 -> "12.5%".
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_plain(value))
}

/// Bare number without a trailing `.0`: 12500.0 -> "12500", 7.25 -> "7.25".
pub fn format_plain(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(42), "42");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(12500), "12,500");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-1234), "-1,234");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(187345.0), "$187,345");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(1557.4), "$1,557");
        assert_eq!(format_currency(1557.5), "$1,558");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(2553), "2,553");
        assert_eq!(format_count(980), "980");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(35.0), "35%");
        assert_eq!(format_percent(12.5), "12.5%");
        assert_eq!(format_percent(2.8), "2.8%");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_plain(12500.0), "12500");
        assert_eq!(format_plain(7.25), "7.25");
        assert_eq!(format_plain(0.0), "0");
    }
}
