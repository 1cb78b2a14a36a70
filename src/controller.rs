//! Page Controller
//!
//! Orchestrates the dashboard: icon rendering, sidebar toggle, theme
//! persistence and the themed sales chart.
//!
//! # Flow
//!
//! ```text
//! initialize:
//!   render icons → probe elements → read stored theme → attribute + icon + chart
//!
//! theme toggle click:
//!   flip theme → attribute + icon + chart → persist
//! ```
//!
//! Missing elements never fail: the step that needs them is skipped.

use crate::chart::{ChartRenderer, SalesChart};
use crate::config::DashboardConfig;
use crate::page::{PageElement, PageSurface, PageWiring};
use crate::storage::PreferenceStore;
use crate::theme::Theme;

/// Drives one dashboard page
pub struct PageController<P, R, S>
where
    P: PageSurface,
    R: ChartRenderer,
    S: PreferenceStore,
{
    page: P,
    chart: SalesChart<R>,
    store: S,
    config: DashboardConfig,
    theme: Theme,
    sidebar_toggled: bool,
    wiring: PageWiring,
}

impl<P, R, S> PageController<P, R, S>
where
    P: PageSurface,
    R: ChartRenderer,
    S: PreferenceStore,
{
    pub fn new(page: P, renderer: R, store: S, config: DashboardConfig) -> Self {
        let chart = SalesChart::new(renderer, config.chart.clone());
        let theme = config.theme.default;
        Self {
            page,
            chart,
            store,
            config,
            theme,
            sidebar_toggled: false,
            wiring: PageWiring::default(),
        }
    }

    /// Start-up routine, run once the page is ready.
    ///
    /// Applies the stored theme without writing it back.
    pub fn initialize(&mut self) -> PageWiring {
        self.page.render_icons();

        self.wiring = PageWiring::probe(&self.page);
        if !self.wiring.sidebar_toggle {
            tracing::debug!("Sidebar toggle or wrapper missing, sidebar toggle not wired");
        }
        if !self.wiring.theme_toggle {
            tracing::debug!("Theme toggle missing, theme toggle not wired");
        }

        let stored = self.store.get(&self.config.storage.theme_key);
        let theme = Theme::from_stored(stored.as_deref(), self.config.theme.default);
        self.show_theme(theme);

        tracing::info!("Dashboard initialized with {} theme", theme);
        self.wiring
    }

    /// Flip the collapsed state of the sidebar.
    ///
    /// Returns the new state, or `None` if the toggle is not wired.
    pub fn toggle_sidebar(&mut self) -> Option<bool> {
        if !self.wiring.sidebar_toggle {
            return None;
        }

        let toggled = self
            .page
            .toggle_layout_class(&self.config.elements.layout_toggled_class)?;
        self.sidebar_toggled = toggled;
        tracing::debug!("Sidebar toggled: {}", toggled);
        Some(toggled)
    }

    /// Switch to `theme`, persist it and rebuild the chart.
    ///
    /// Every call rebuilds, even when `theme` is already active.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.show_theme(theme);

        if let Err(e) = self.store.set(&self.config.storage.theme_key, theme.as_str()) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }

        tracing::info!("Theme changed to {}", theme);
    }

    /// Handle a click on the theme toggle.
    ///
    /// Returns the new theme, or `None` if the toggle is not wired.
    pub fn toggle_theme(&mut self) -> Option<Theme> {
        if !self.wiring.theme_toggle {
            return None;
        }

        let next = self.theme.toggled();
        self.apply_theme(next);
        Some(next)
    }

    /// Replace the chart with one colored for `theme`
    pub fn render_chart(&mut self, theme: Theme) {
        if !self.page.has_element(PageElement::ChartCanvas) {
            tracing::debug!("Chart canvas missing, chart not rendered");
            return;
        }

        if let Err(e) = self.chart.rebuild(theme) {
            tracing::warn!("Failed to render sales chart: {}", e);
        }
    }

    fn show_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.page.set_theme_attribute(theme);

        if self.page.set_theme_icon(theme.toggle_icon()) {
            self.page.render_icons();
        }

        self.render_chart(theme);
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn sidebar_toggled(&self) -> bool {
        self.sidebar_toggled
    }

    pub fn chart_rendered(&self) -> bool {
        self.chart.is_rendered()
    }

    pub fn wiring(&self) -> PageWiring {
        self.wiring
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn chart(&self) -> &SalesChart<R> {
        &self.chart
    }
}
