//! Bapsang UI Components
//!
//! Dioxus components for the kindergarten meal-service site: UI primitives
//! (button, logo, service card), the landing-page sections, and the
//! `/calc-food` statement panels.
//!
//! ## Design Philosophy
//!
//! Warm, trustworthy, and plain - this is a site nursery directors read on
//! a lunch break:
//! - **Rice (#faf7f0)**: page background, warm off-white
//! - **Leaf (#2f7d4f)**: primary actions, brand accents
//! - **Tangerine (#f59e0b)**: highlights and pending states
//! - **Ink (#1f2937)**: body text
//!
//! All copy comes from `bapsang_core::site`; components render constants
//! and props, nothing else.

pub mod components;
pub mod theme;

pub use components::*;
