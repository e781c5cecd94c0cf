//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod assistant;
pub mod attention;
pub mod feedback;
pub mod footer;
pub mod header;
pub mod insights;
pub mod menu;
pub mod metrics;
pub mod sidebar;
pub mod top_asked;
