//! Service card primitive: stateless, prop-driven.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct ServiceCardProps {
    /// Single-glyph icon shown above the title
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// One card in the services grid.
#[component]
pub fn ServiceCard(props: ServiceCardProps) -> Element {
    rsx! {
        article { class: "service-card",
            div { class: "service-icon", "aria-hidden": "true", "{props.icon}" }
            h3 { class: "service-title", "{props.title}" }
            p { class: "service-description", "{props.description}" }
        }
    }
}
