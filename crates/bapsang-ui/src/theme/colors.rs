//! Color constants for the Bapsang palette
//!
//! Warm, food-adjacent tones; mirrored as CSS custom properties in
//! `styles.rs`.

#![allow(dead_code)]

// === RICE (Backgrounds) ===
pub const RICE: &str = "#faf7f0";
pub const RICE_CARD: &str = "#ffffff";
pub const RICE_BORDER: &str = "#e8e2d4";

// === LEAF GREEN (Brand, Primary Actions) ===
pub const LEAF: &str = "#2f7d4f";
pub const LEAF_DARK: &str = "#236140";
pub const LEAF_SOFT: &str = "rgba(47, 125, 79, 0.12)";

// === TANGERINE (Highlights, Pending) ===
pub const TANGERINE: &str = "#f59e0b";
pub const TANGERINE_SOFT: &str = "rgba(245, 158, 11, 0.15)";

// === TEXT ===
pub const INK: &str = "#1f2937";
pub const INK_SECONDARY: &str = "#4b5563";
pub const INK_MUTED: &str = "#9ca3af";

// === SEMANTIC ===
pub const SUCCESS: &str = "#15803d";
pub const DANGER: &str = "#dc2626";
pub const INFO: &str = "#2563eb";
