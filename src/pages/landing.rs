//! Landing page - header, hero, services, contact form, footer.

use dioxus::prelude::*;

use bapsang_ui::components::{ContactFormSection, Footer, Hero, ServicesSection};

use crate::components::{NavHeader, NavLocation};
use crate::context::use_contact_gateway;

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let gateway = use_contact_gateway();

    rsx! {
        NavHeader { current: NavLocation::Home }
        main {
            Hero {}
            ServicesSection {}
            ContactFormSection { gateway }
        }
        Footer {}
    }
}
