//! Headless smoke rendering for the Bapsang site
//!
//! Disposable manual-verification aid, not a test framework: each page is
//! built in a `VirtualDom`, rendered to an HTML snapshot, and checked for
//! one piece of visible text. The snapshots under the output directory are
//! meant for eyeballing in a browser.

use bapsang_core::contact::{GatewayHandle, MemoryGateway};
use bapsang_core::invoice::sample_lines;
use bapsang_core::site;
use bapsang_ui::components::{ContactFormSection, Footer, Hero, InvoiceTable, ServicesSection, UploadPanel};
use bapsang_ui::theme::GLOBAL_STYLES;
use dioxus::prelude::*;

/// Pages the smoke runner can render
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SmokePage {
    Landing,
    CalcFood,
}

impl SmokePage {
    pub fn all() -> &'static [SmokePage] {
        &[SmokePage::Landing, SmokePage::CalcFood]
    }

    /// CLI name and snapshot file stem
    pub fn slug(&self) -> &'static str {
        match self {
            SmokePage::Landing => "landing",
            SmokePage::CalcFood => "calc-food",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.slug() == slug)
    }

    /// One piece of visible text that must appear in the render
    pub fn expected_text(&self) -> &'static str {
        match self {
            SmokePage::Landing => site::BRAND_TAGLINE,
            SmokePage::CalcFood => "명세서 업로드",
        }
    }

    /// Render the page to an HTML string
    pub fn render(&self) -> String {
        match self {
            SmokePage::Landing => render_component(LandingPreview),
            SmokePage::CalcFood => render_component(CalcFoodPreview),
        }
    }
}

/// Build a component in a fresh VirtualDom and render it to HTML
fn render_component(component: fn() -> Element) -> String {
    let mut vdom = VirtualDom::new(component);
    vdom.rebuild_in_place();
    dioxus_ssr::render(&vdom)
}

/// Landing page without router chrome.
///
/// The contact form gets a memory gateway; nothing submits during a
/// headless render.
#[component]
fn LandingPreview() -> Element {
    let gateway = use_hook(|| GatewayHandle::new(MemoryGateway::default()));

    rsx! {
        style { {GLOBAL_STYLES} }
        main {
            Hero {}
            ServicesSection {}
            ContactFormSection { gateway }
        }
        Footer {}
    }
}

/// Calc-food page without router chrome.
#[component]
fn CalcFoodPreview() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "calc-food",
            UploadPanel {}
            InvoiceTable { lines: sample_lines() }
        }
        Footer {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_renders_brand_copy() {
        let html = SmokePage::Landing.render();

        assert!(html.contains(site::BRAND_TAGLINE));
        assert!(html.contains(site::HERO_HEADLINE));
        for service in &site::SERVICES {
            assert!(html.contains(service.title), "missing {}", service.title);
        }
    }

    #[test]
    fn landing_renders_contact_form_fields() {
        let html = SmokePage::Landing.render();

        assert!(html.contains("유치원명"));
        assert!(html.contains("연락처"));
        assert!(html.contains("개인정보 수집 및 이용에 동의합니다"));
    }

    #[test]
    fn calc_food_renders_upload_heading() {
        let html = SmokePage::CalcFood.render();

        assert!(html.contains("명세서 업로드"));
    }

    #[test]
    fn calc_food_renders_match_summary() {
        let html = SmokePage::CalcFood.render();

        // 4 of the 6 sample lines are resolved
        assert!(html.contains("66.7%"));
        assert!(html.contains("₩"));
    }

    #[test]
    fn every_page_contains_its_expected_text() {
        for page in SmokePage::all() {
            assert!(
                page.render().contains(page.expected_text()),
                "{} missing expected text",
                page.slug()
            );
        }
    }

    #[test]
    fn slug_round_trip() {
        for page in SmokePage::all() {
            assert_eq!(SmokePage::from_slug(page.slug()), Some(*page));
        }
        assert_eq!(SmokePage::from_slug("nope"), None);
    }
}
