//! Number formatting for counters and tables (en-US grouping)

/// Format a number with a thousands separator and fixed decimals
///
/// # Examples
///
/// ```
/// use order_workbench_frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    // Insert a comma every three digits from the right of the integer part
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(',');
        }
        result.push(c);
    }
    let grouped: String = result.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", grouped, d),
        None => grouped,
    }
}

/// Format a count, e.g. `12,500`
pub fn format_count(value: u64) -> String {
    format_number_with_decimals(value as f64, 0)
}

/// Format an amount in dollars, e.g. `$1,234.50`
pub fn format_money(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", format_number_with_decimals(-value, 2))
    } else {
        format!("${}", format_number_with_decimals(value, 2))
    }
}

/// Completeness percentage as the backend rounds it (up to two decimals)
pub fn format_percent(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}%", rounded)
    } else {
        format!("{}%", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(-12.3), "-$12.30");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(-1234.0, 0), "-1,234");
        assert_eq!(format_number_with_decimals(-123.0, 0), "-123");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(12500), "12,500");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(100.0), "100%");
        assert_eq!(format_percent(99.5), "99.5%");
        assert_eq!(format_percent(87.254), "87.25%");
    }
}
