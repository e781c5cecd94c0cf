//! Dashboard view
//!
//! Split into state, layout/rendering and the individual panel components

pub mod components;
pub mod renderer;
pub mod state;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::{HitTarget, buffer_lines, hit_test, render_dashboard};
pub use state::{DashboardState, Tab};
