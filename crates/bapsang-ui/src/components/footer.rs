//! Footer: company block and anchor links from constants.

use bapsang_core::site;
use dioxus::prelude::*;

use crate::components::{Logo, LogoSize};

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-inner",
                div {
                    Logo { size: LogoSize::Small }
                    p { class: "footer-company",
                        {site::COMPANY_NAME}
                        br {}
                        {site::COMPANY_ADDRESS}
                        br {}
                        {site::COMPANY_PHONE}
                        " · "
                        {site::COMPANY_EMAIL}
                    }
                }
                nav { class: "footer-links",
                    for (label, href) in site::FOOTER_LINKS.iter() {
                        a { key: "{label}", href: "{href}", "{label}" }
                    }
                }
            }
        }
    }
}
