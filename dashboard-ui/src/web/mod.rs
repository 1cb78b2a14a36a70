//! Browser Adapters
//!
//! Implementations of the dashboard capability traits over the browser:
//!
//! - **dom**: element lookup by id, root theme attribute, layout class
//! - **chartjs**: Chart.js construction and teardown
//! - **lucide**: icon glyph rendering
//! - **storage**: `localStorage` preferences

pub mod chartjs;
pub mod dom;
pub mod lucide;
pub mod storage;

pub use chartjs::ChartJsRenderer;
pub use dom::DomPage;
pub use storage::BrowserStore;
