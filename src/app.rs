use dioxus::prelude::*;

use bapsang_core::contact::{GatewayHandle, HttpContactGateway};
use bapsang_ui::theme::GLOBAL_STYLES;

use crate::context::get_contact_endpoint;
use crate::pages::{CalcFood, Landing};

/// Application routes.
///
/// - `/` - Landing page with the hero, services, and contact form
/// - `/calc-food` - Statement upload and match preview
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/calc-food")]
    CalcFood {},
}

/// Root application component.
///
/// Provides global styles, the contact gateway context, and routing.
#[component]
pub fn App() -> Element {
    // One HTTP gateway for the whole session
    use_context_provider(|| GatewayHandle::new(HttpContactGateway::new(get_contact_endpoint())));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
