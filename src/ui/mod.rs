// UI module
// Terminal rendering of the dashboard and its pages

/// Badges, confidence colors and the line buffer
pub mod components;
/// Page and card rendering
pub mod layout;

pub use components::*;
pub use layout::*;
