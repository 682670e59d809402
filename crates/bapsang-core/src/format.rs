//! Korean locale formatting helpers
//!
//! Pure, total functions for finite numeric input. Used by the statement
//! preview table and anywhere a won amount or rate is shown.

/// Format an amount as Korean won: `₩` prefix, rounded to whole won,
/// thousands grouping. `format_currency(1234500.0)` is `"₩1,234,500"`.
pub fn format_currency(amount: f64) -> String {
    let whole = amount.round() as i128;
    format!("₩{}", group_thousands(&whole.to_string()))
}

/// Format an integer with thousands grouping, sign preserved.
pub fn format_number(n: i64) -> String {
    group_thousands(&n.to_string())
}

/// Format a ratio as a percentage with one fixed decimal place.
/// `format_percent(0.453)` is `"45.3%"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Insert `,` every three digits, leaving a leading `-` alone.
fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let len = chars.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (len - i) % 3 == 0 && *c != '-' && chars[0] != '-' {
            result.push(',');
        } else if i > 1 && chars[0] == '-' && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "₩0");
        assert_eq!(format_currency(950.0), "₩950");
        assert_eq!(format_currency(1234500.0), "₩1,234,500");
        // Rounds half away from zero to whole won
        assert_eq!(format_currency(999.5), "₩1,000");
        assert_eq!(format_currency(999.4), "₩999");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(100), "100");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(12345678), "12,345,678");
        assert_eq!(format_number(-1234567), "-1,234,567");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.453), "45.3%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(1.0), "100.0%");
        assert_eq!(format_percent(0.005), "0.5%");
    }
}
