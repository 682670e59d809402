//! Reusable components for the Bapsang site
//!
//! Primitives (button, logo, service card) plus the landing sections and
//! the `/calc-food` panels. Copy lives in `bapsang_core::site`; these
//! components only render it.

mod button;
mod contact_form;
mod footer;
mod hero;
mod invoice_table;
mod logo;
mod service_card;
mod services_section;
mod upload_panel;

pub use button::*;
pub use contact_form::*;
pub use footer::*;
pub use hero::*;
pub use invoice_table::*;
pub use logo::*;
pub use service_card::*;
pub use services_section::*;
pub use upload_panel::*;
