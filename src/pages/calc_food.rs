//! Calc-food page - statement upload and match preview.

use dioxus::prelude::*;

use bapsang_core::invoice::sample_lines;
use bapsang_ui::components::{Footer, InvoiceTable, UploadPanel};

use crate::components::{NavHeader, NavLocation};

/// Food-cost calculator page.
///
/// The preview table shows the sample dataset until a statement has been
/// uploaded and matched server-side.
#[component]
pub fn CalcFood() -> Element {
    rsx! {
        NavHeader { current: NavLocation::CalcFood }
        main { class: "calc-food",
            UploadPanel {}
            InvoiceTable { lines: sample_lines() }
        }
        Footer {}
    }
}
