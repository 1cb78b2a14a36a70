//! Seller Dashboard
//!
//! Seller overview page built with Leptos (WASM).
//!
//! # Features
//!
//! - Collapsible sidebar
//! - Dark/light theme persisted in `localStorage`
//! - Monthly sales chart (Chart.js) re-colored on theme change
//!
//! # Architecture
//!
//! Leptos renders the page markup. Behavior lives in the
//! `seller_dashboard::PageController`, driven through the DOM, Chart.js and
//! `localStorage` adapters in [`web`].

use leptos::*;
use seller_dashboard::DashboardConfig;

mod app;
mod components;
mod state;
mod web;

/// Configuration shipped with the page
const DASHBOARD_TOML: &str = include_str!("../../dashboard.toml");

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = DashboardConfig::from_toml_str(DASHBOARD_TOML).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("Using default dashboard config: {}", e).into());
        DashboardConfig::default()
    });

    let state = state::DashboardState::new(config);

    let app_state = state.clone();
    mount_to_body(move || view! { <app::App state=app_state /> });

    // The view is in the document now; wire it up
    let wiring = state.initialize();
    web_sys::console::log_1(&format!("Dashboard ready: {:?}", wiring).into());
}
