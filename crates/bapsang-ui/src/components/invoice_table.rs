//! Statement match preview table
//!
//! Summary strip (line count, total, match rate) over a table of lines
//! with per-status badges.

use bapsang_core::format::{format_currency, format_number, format_percent};
use bapsang_core::invoice::{InvoiceLine, MatchSummary};
use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct InvoiceTableProps {
    pub lines: Vec<InvoiceLine>,
}

#[component]
pub fn InvoiceTable(props: InvoiceTableProps) -> Element {
    let summary = MatchSummary::from_lines(&props.lines);
    let total_amount = MatchSummary::total_amount(&props.lines);

    rsx! {
        section { class: "invoice-panel",
            div { class: "invoice-summary",
                div { class: "summary-item",
                    span { class: "summary-label", "명세서 품목" }
                    span { class: "summary-value", "{format_number(summary.total as i64)}건" }
                }
                div { class: "summary-item",
                    span { class: "summary-label", "합계 금액" }
                    span { class: "summary-value", "{format_currency(total_amount as f64)}" }
                }
                div { class: "summary-item",
                    span { class: "summary-label", "매칭률" }
                    span { class: "summary-value", "{format_percent(summary.match_rate())}" }
                }
            }

            table { class: "invoice-table",
                thead {
                    tr {
                        th { "공급사" }
                        th { "품목" }
                        th { "수량" }
                        th { "금액" }
                        th { "상태" }
                    }
                }
                tbody {
                    for (i, line) in props.lines.iter().enumerate() {
                        tr { key: "{i}",
                            td { "{line.supplier}" }
                            td { "{line.item}" }
                            td { "{format_number(i64::from(line.quantity))}" }
                            td { class: "amount", "{format_currency(line.amount() as f64)}" }
                            td {
                                span { class: "{line.status.badge_class()}", "{line.status}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
