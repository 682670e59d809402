//! Navigation Header Component
//!
//! Sticky header with the logo on the left and page links on the right.

use dioxus::prelude::*;

use bapsang_ui::components::{Logo, LogoSize};

use crate::app::Route;

/// Navigation location within the site
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    CalcFood,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "서비스 소개",
            NavLocation::CalcFood => "급식비 계산",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Landing {},
            NavLocation::CalcFood => Route::CalcFood {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the site
    pub current: NavLocation,
}

/// Navigation header component
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let locations = [NavLocation::Home, NavLocation::CalcFood];

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                Link { to: Route::Landing {},
                    Logo { size: LogoSize::Medium }
                }

                nav { class: "nav-links",
                    for location in &locations {
                        Link {
                            to: location.route(),
                            class: if *location == props.current { "nav-link active" } else { "nav-link" },

                            span { class: "nav-link-icon", {render_nav_icon(*location)} }
                            span { class: "nav-link-label", "{location.display_name()}" }
                        }
                    }
                }
            }
        }
    }
}

/// Render Lucide icon for navigation location
fn render_nav_icon(location: NavLocation) -> Element {
    match location {
        NavLocation::Home => rsx! {
            // Lucide home icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
                path { d: "M9 22V12h6v10" }
            }
        },
        NavLocation::CalcFood => rsx! {
            // Lucide calculator icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                rect { x: "4", y: "2", width: "16", height: "20", rx: "2" }
                line { x1: "8", y1: "6", x2: "16", y2: "6" }
                line { x1: "16", y1: "14", x2: "16", y2: "18" }
                path { d: "M8 10h.01M12 10h.01M16 10h.01M8 14h.01M12 14h.01M8 18h.01M12 18h.01" }
            }
        },
    }
}
