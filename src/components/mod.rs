//! App-level components for the Bapsang site.

mod nav_header;

pub use nav_header::{NavHeader, NavLocation};
