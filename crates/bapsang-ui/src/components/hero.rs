//! Landing hero: headline, tagline, call-to-action.

use bapsang_core::site;
use dioxus::prelude::*;

/// Hero section rendering the brand headline from constants.
///
/// The call-to-action is a plain anchor scrolling to the contact section,
/// so the hero works identically in the app and in headless renders.
#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            h1 { class: "hero-headline", {site::HERO_HEADLINE} }
            p { class: "hero-tagline", {site::BRAND_TAGLINE} }
            div { class: "hero-actions",
                a { class: "btn-cta", href: "#contact", {site::HERO_CTA} }
            }
        }
    }
}
