//! Sales Chart
//!
//! This module provides the chart side of the dashboard:
//!
//! - **config**: Serializable chart configuration built from the sales series
//!   and a theme palette
//! - **ChartRenderer**: Capability trait over the external charting library
//! - **SalesChart**: Owner of the single live chart instance
//!
//! # Lifecycle
//!
//! ```text
//! rebuild(theme):
//!   destroy(old instance) → palette(theme) → ChartConfig → construct → hold
//! ```

pub mod config;

pub use config::{format_tick, ChartConfig, ChartKind, Dataset};

use crate::config::ChartSettings;
use crate::error::DashboardResult;
use crate::palette::ChartPalette;
use crate::sales::SalesSeries;
use crate::theme::Theme;

/// Construct/destroy capability of a charting backend
pub trait ChartRenderer {
    /// Handle to a live chart
    type Instance;

    /// Build a chart from `config`
    fn construct(&mut self, config: &ChartConfig) -> DashboardResult<Self::Instance>;

    /// Release a chart and everything it registered
    fn destroy(&mut self, instance: Self::Instance);
}

/// The dashboard's sales chart, holding at most one live instance
pub struct SalesChart<R: ChartRenderer> {
    renderer: R,
    series: SalesSeries,
    settings: ChartSettings,
    current: Option<R::Instance>,
}

impl<R: ChartRenderer> SalesChart<R> {
    pub fn new(renderer: R, settings: ChartSettings) -> Self {
        Self {
            renderer,
            series: SalesSeries::demo(),
            settings,
            current: None,
        }
    }

    /// Configuration the chart is built from for `theme`
    pub fn config_for(&self, theme: Theme) -> ChartConfig {
        ChartConfig::sales_line(&self.series, &ChartPalette::for_theme(theme), &self.settings)
    }

    /// Destroy the current instance (if any) and construct a new one for `theme`.
    ///
    /// On failure no instance is held.
    pub fn rebuild(&mut self, theme: Theme) -> DashboardResult<()> {
        self.release();

        let config = self.config_for(theme);
        let instance = self.renderer.construct(&config)?;
        self.current = Some(instance);

        tracing::debug!("Rebuilt sales chart with {} theme", theme);
        Ok(())
    }

    /// Destroy the current instance, if any
    pub fn release(&mut self) {
        if let Some(old) = self.current.take() {
            self.renderer.destroy(old);
        }
    }

    pub fn is_rendered(&self) -> bool {
        self.current.is_some()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<R: ChartRenderer> Drop for SalesChart<R> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::RecordingRenderer;

    #[test]
    fn test_rebuild_destroys_previous() {
        let mut chart = SalesChart::new(RecordingRenderer::new(), ChartSettings::default());
        assert!(!chart.is_rendered());

        chart.rebuild(Theme::Dark).unwrap();
        chart.rebuild(Theme::Light).unwrap();
        chart.rebuild(Theme::Light).unwrap();

        let renderer = chart.renderer();
        assert_eq!(renderer.constructed(), 3);
        assert_eq!(renderer.destroyed(), 2);
        assert_eq!(renderer.live(), 1);
        assert_eq!(renderer.last_accent(), Some("#2563eb".to_string()));
    }

    #[test]
    fn test_failed_rebuild_holds_nothing() {
        let mut chart = SalesChart::new(RecordingRenderer::new(), ChartSettings::default());
        chart.rebuild(Theme::Dark).unwrap();

        chart.renderer.fail_next();
        assert!(chart.rebuild(Theme::Light).is_err());
        assert!(!chart.is_rendered());
        assert_eq!(chart.renderer().live(), 0);
    }

    #[test]
    fn test_config_for_uses_settings() {
        let settings = ChartSettings {
            currency_symbol: "€".to_string(),
            ..ChartSettings::default()
        };
        let chart = SalesChart::new(RecordingRenderer::new(), settings);
        assert_eq!(chart.config_for(Theme::Dark).y_tick_prefix(), Some("€"));
    }
}
