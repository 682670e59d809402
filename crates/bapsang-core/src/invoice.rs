//! Statement-matching preview model
//!
//! The `/calc-food` page shows how uploaded supplier statements line up
//! against the menu ledger. The actual matcher runs server-side; this
//! module only models lines and the summary the page renders, plus a
//! small sample dataset for the preview table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{MatchStatus, Supplier};

/// One line item from a supplier statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub supplier: Supplier,
    /// Item name as printed on the statement
    pub item: String,
    /// Unit price in whole won
    pub unit_price: i64,
    pub quantity: u32,
    pub issued_on: NaiveDate,
    pub status: MatchStatus,
}

impl InvoiceLine {
    /// Line total in won
    pub fn amount(&self) -> i64 {
        self.unit_price * i64::from(self.quantity)
    }
}

/// Per-status counts over a set of statement lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchSummary {
    pub total: usize,
    pub auto_matched: usize,
    pub pending: usize,
    pub manual_matched: usize,
    pub unmatched: usize,
}

impl MatchSummary {
    pub fn from_lines(lines: &[InvoiceLine]) -> Self {
        let mut summary = Self {
            total: lines.len(),
            ..Default::default()
        };
        for line in lines {
            match line.status {
                MatchStatus::AutoMatched => summary.auto_matched += 1,
                MatchStatus::Pending => summary.pending += 1,
                MatchStatus::ManualMatched => summary.manual_matched += 1,
                MatchStatus::Unmatched => summary.unmatched += 1,
            }
        }
        summary
    }

    /// Fraction of lines resolved (auto or manual), 0.0 for no lines
    pub fn match_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.auto_matched + self.manual_matched) as f64 / self.total as f64
    }

    /// Sum of line totals in won
    pub fn total_amount(lines: &[InvoiceLine]) -> i64 {
        lines.iter().map(InvoiceLine::amount).sum()
    }
}

/// Sample statement lines driving the `/calc-food` preview table
pub fn sample_lines() -> Vec<InvoiceLine> {
    let day = |d: u32| NaiveDate::from_ymd_opt(2026, 3, d).unwrap_or_default();

    vec![
        InvoiceLine {
            supplier: Supplier::Cj,
            item: "백미 10kg".to_string(),
            unit_price: 32800,
            quantity: 3,
            issued_on: day(2),
            status: MatchStatus::AutoMatched,
        },
        InvoiceLine {
            supplier: Supplier::Cj,
            item: "한돈 불고기용 1kg".to_string(),
            unit_price: 15900,
            quantity: 8,
            issued_on: day(2),
            status: MatchStatus::AutoMatched,
        },
        InvoiceLine {
            supplier: Supplier::Shinsegae,
            item: "서울우유 200ml x 24".to_string(),
            unit_price: 12400,
            quantity: 5,
            issued_on: day(3),
            status: MatchStatus::ManualMatched,
        },
        InvoiceLine {
            supplier: Supplier::Shinsegae,
            item: "애호박 (개)".to_string(),
            unit_price: 1350,
            quantity: 20,
            issued_on: day(3),
            status: MatchStatus::Pending,
        },
        InvoiceLine {
            supplier: Supplier::Cj,
            item: "국산콩 두부 300g".to_string(),
            unit_price: 1900,
            quantity: 15,
            issued_on: day(4),
            status: MatchStatus::AutoMatched,
        },
        InvoiceLine {
            supplier: Supplier::Shinsegae,
            item: "무항생제 특란 30구".to_string(),
            unit_price: 7800,
            quantity: 6,
            issued_on: day(4),
            status: MatchStatus::Unmatched,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_amount() {
        let line = InvoiceLine {
            supplier: Supplier::Cj,
            item: "백미 10kg".to_string(),
            unit_price: 32800,
            quantity: 3,
            issued_on: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            status: MatchStatus::AutoMatched,
        };
        assert_eq!(line.amount(), 98400);
    }

    #[test]
    fn test_summary_counts() {
        let lines = sample_lines();
        let summary = MatchSummary::from_lines(&lines);

        assert_eq!(summary.total, 6);
        assert_eq!(summary.auto_matched, 3);
        assert_eq!(summary.manual_matched, 1);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.unmatched, 1);
    }

    #[test]
    fn test_match_rate() {
        let summary = MatchSummary::from_lines(&sample_lines());
        // 4 of 6 lines resolved
        assert!((summary.match_rate() - 4.0 / 6.0).abs() < 1e-9);

        assert_eq!(MatchSummary::default().match_rate(), 0.0);
    }

    #[test]
    fn test_total_amount() {
        let lines = sample_lines();
        let expected: i64 = lines.iter().map(|l| l.amount()).sum();
        assert_eq!(MatchSummary::total_amount(&lines), expected);
        assert!(expected > 0);
    }
}
