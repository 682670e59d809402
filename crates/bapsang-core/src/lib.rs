//! Bapsang Core Library
//!
//! Domain layer for the Bapsang kindergarten meal-service site: shared type
//! declarations, contact-form validation, the submission gateway, Korean
//! locale formatting helpers, and the statement-matching preview model.
//!
//! ## Overview
//!
//! The site itself is presentational; everything with actual logic lives
//! here so it can be tested without a window:
//!
//! - [`types`] - contact form data shapes and the supplier/match-status
//!   enumerations used by the statement-matching preview
//! - [`validate`] - local contact-form validation (name, contact, consent)
//! - [`contact`] - [`ContactGateway`] trait plus the HTTP implementation
//! - [`format`] - won/number/percent formatting
//! - [`invoice`] - statement lines and match-rate summary for `/calc-food`
//! - [`site`] - the configuration constants the layout components render
//!
//! ## Quick Start
//!
//! ```ignore
//! use bapsang_core::contact::{submit_contact, HttpContactGateway};
//! use bapsang_core::types::ContactFormData;
//!
//! let gateway = HttpContactGateway::new("https://api.example.com/contact");
//! let data = ContactFormData {
//!     kindergarten_name: "해밀유치원".into(),
//!     contact: "010-1234-5678".into(),
//!     privacy_agreed: true,
//! };
//! let result = submit_contact(&gateway, &data).await?;
//! println!("{}", result.message);
//! ```

pub mod contact;
pub mod error;
pub mod format;
pub mod invoice;
pub mod site;
pub mod types;
pub mod validate;

// Re-exports
pub use contact::{ContactGateway, GatewayHandle, HttpContactGateway, MemoryGateway};
pub use error::SiteError;
pub use invoice::{InvoiceLine, MatchSummary};
pub use types::{ContactFormData, ContactFormErrors, FormSubmitResult, MatchStatus, Supplier};
pub use validate::validate_contact_form;
