//! # Seller Dashboard
//!
//! Core of the seller dashboard page: a collapsible sidebar, a dark/light
//! theme persisted across sessions, and a sales line chart re-colored on every
//! theme change.
//!
//! The page logic is written against three capability traits so it runs the
//! same in the browser (see the `dashboard-ui` crate) and headlessly:
//!
//! - [`PageSurface`]: DOM mutations (icons, root attribute, layout class)
//! - [`ChartRenderer`]: construct/destroy of the external chart
//! - [`PreferenceStore`]: persisted key/value preferences
//!
//! ## Modules
//!
//! - [`controller`]: Page controller orchestrating start-up and clicks
//! - [`chart`]: Chart configuration model and single-instance ownership
//! - [`palette`]: Theme colors
//! - [`sales`]: The fixed demo sales series
//! - [`headless`]: In-memory page and recording renderer
//!
//! ## Quick Start
//!
//! ```rust
//! use seller_dashboard::{
//!     DashboardConfig, HeadlessPage, MemoryStore, PageController, RecordingRenderer, Theme,
//! };
//!
//! let mut controller = PageController::new(
//!     HeadlessPage::new(),
//!     RecordingRenderer::new(),
//!     MemoryStore::new(),
//!     DashboardConfig::default(),
//! );
//!
//! controller.initialize();
//! assert_eq!(controller.theme(), Theme::Dark);
//!
//! controller.toggle_theme();
//! assert_eq!(controller.theme(), Theme::Light);
//! assert_eq!(controller.chart().renderer().live(), 1);
//! ```

pub mod chart;
pub mod config;
pub mod controller;
pub mod error;
pub mod headless;
pub mod page;
pub mod palette;
pub mod sales;
pub mod storage;
pub mod theme;

pub use chart::{format_tick, ChartConfig, ChartRenderer, SalesChart};
pub use config::{
    generate_default_config, ChartSettings, ConfigError, DashboardConfig, ElementIds,
    LoggingConfig,
};
pub use controller::PageController;
pub use error::{DashboardError, DashboardResult};
pub use headless::{HeadlessPage, RecordedChart, RecordingRenderer, RenderEvent};
pub use page::{PageElement, PageSurface, PageWiring};
pub use palette::{ChartPalette, GradientFill, DARK_ACCENT, LIGHT_ACCENT};
pub use sales::{SalesPoint, SalesSeries};
pub use storage::{MemoryStore, PreferenceStore};
pub use theme::{Theme, ThemeIcon};
