//! UI Components
//!
//! Leptos components making up the dashboard page.

pub mod header;
pub mod sales_chart;
pub mod sidebar;
pub mod stat_card;

pub use header::Header;
pub use sales_chart::SalesChartCard;
pub use sidebar::Sidebar;
pub use stat_card::StatCards;
