//! Services section: maps the static configuration array to cards.

use bapsang_core::site;
use dioxus::prelude::*;

use crate::components::ServiceCard;

#[component]
pub fn ServicesSection() -> Element {
    rsx! {
        section { class: "services", id: "services",
            h2 { class: "section-title", "밥상클럽이 해드리는 일" }
            div { class: "service-grid",
                for service in site::SERVICES.iter() {
                    ServiceCard {
                        key: "{service.title}",
                        icon: service.icon.to_string(),
                        title: service.title.to_string(),
                        description: service.description.to_string(),
                    }
                }
            }
        }
    }
}
