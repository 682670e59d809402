//! Brand logo: rice-bowl mark plus the brand name.

use bapsang_core::site;
use dioxus::prelude::*;

/// Logo sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LogoSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LogoSize {
    pub fn class(&self) -> &'static str {
        match self {
            LogoSize::Small => "logo logo--sm",
            LogoSize::Medium => "logo",
            LogoSize::Large => "logo logo--lg",
        }
    }

    /// Mark dimensions in px
    fn mark_px(&self) -> u32 {
        match self {
            LogoSize::Small => 18,
            LogoSize::Medium => 24,
            LogoSize::Large => 32,
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct LogoProps {
    #[props(default)]
    pub size: LogoSize,
}

/// Stateless brand mark: a steaming bowl outline next to the brand name.
#[component]
pub fn Logo(props: LogoProps) -> Element {
    let px = props.size.mark_px();

    rsx! {
        span { class: "{props.size.class()}",
            span { class: "logo-mark",
                // Bowl with rising steam
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "{px}",
                    height: "{px}",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    path { d: "M4 12h16a8 8 0 0 1-16 0" }
                    path { d: "M9 8c0-1.5 1-2 1-3" }
                    path { d: "M14 8c0-1.5 1-2 1-3" }
                }
            }
            span { class: "logo-name", {site::BRAND_NAME} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_size_classes() {
        assert_eq!(LogoSize::Small.class(), "logo logo--sm");
        assert_eq!(LogoSize::Medium.class(), "logo");
        assert_eq!(LogoSize::Large.class(), "logo logo--lg");
    }
}
