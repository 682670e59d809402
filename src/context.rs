//! Gateway context for the Bapsang app.
//!
//! Provides the contact submission gateway to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In the App component
//! use_context_provider(|| GatewayHandle::new(HttpContactGateway::new(endpoint)));
//!
//! // In child components
//! let gateway = use_contact_gateway();
//! ```

use bapsang_core::contact::GatewayHandle;
use dioxus::prelude::*;

/// Get the contact submission endpoint.
/// Uses the global endpoint set from command line args.
pub fn get_contact_endpoint() -> String {
    crate::get_contact_endpoint()
}

/// Hook to access the contact gateway from context.
///
/// The handle is cheap to clone and compares by identity, so pages can
/// pass it straight into `ContactFormSection`.
pub fn use_contact_gateway() -> GatewayHandle {
    use_context::<GatewayHandle>()
}
