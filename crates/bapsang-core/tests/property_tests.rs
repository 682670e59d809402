//! Property-based tests for the formatting helpers

use bapsang_core::format::{format_currency, format_number, format_percent};
use proptest::prelude::*;

proptest! {
    /// Every non-negative finite amount formats with the won sign and
    /// no fractional digits.
    #[test]
    fn currency_has_won_sign_and_no_fraction(amount in 0.0f64..1e15) {
        let formatted = format_currency(amount);

        prop_assert!(formatted.starts_with('₩'));
        prop_assert!(!formatted.contains('.'));
        prop_assert!(!formatted.contains('-'));
    }

    /// Grouping never changes the digits themselves.
    #[test]
    fn number_grouping_preserves_digits(n in i64::MIN / 2..i64::MAX / 2) {
        let formatted = format_number(n);
        let stripped: String = formatted.chars().filter(|c| *c != ',').collect();

        prop_assert_eq!(stripped, n.to_string());
    }

    /// Separators land every three digits from the right.
    #[test]
    fn number_group_sizes_are_three(n in 0i64..i64::MAX / 2) {
        let formatted = format_number(n);
        let groups: Vec<&str> = formatted.split(',').collect();

        for (i, group) in groups.iter().enumerate() {
            if i == 0 {
                prop_assert!(group.len() <= 3 && !group.is_empty());
            } else {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }

    /// Percent output always carries exactly one decimal place.
    #[test]
    fn percent_has_one_decimal(value in 0.0f64..10.0) {
        let formatted = format_percent(value);

        prop_assert!(formatted.ends_with('%'));
        let digits = formatted.trim_end_matches('%');
        let (_, frac) = digits.split_once('.').expect("decimal point present");
        prop_assert_eq!(frac.len(), 1);
    }
}
