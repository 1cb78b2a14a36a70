//! State Management
//!
//! The page controller shared by the click handlers.

pub mod dashboard;

pub use dashboard::DashboardState;
