//! Chart Configuration Model
//!
//! Serializable mirror of the Chart.js line-chart configuration. Two parts of
//! the configuration are not plain JSON (the canvas gradient and the tick
//! label callback); they travel as typed side data skipped by serde and are
//! materialised by the renderer.

use serde::Serialize;

use crate::config::ChartSettings;
use crate::palette::{ChartPalette, GradientFill, POINT_HIGHLIGHT};
use crate::sales::SalesSeries;

/// Dash pattern of the y-axis grid lines
const Y_GRID_DASH: [u32; 2] = [5, 5];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

/// Top-level chart configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u32>,
    pub fill: bool,
    /// Area fill, built on the canvas as `backgroundColor`
    #[serde(skip)]
    pub background: GradientFill,
    pub border_color: String,
    pub tension: f64,
    pub point_background_color: String,
    pub point_border_color: String,
    pub point_hover_radius: u32,
    pub point_hover_background_color: String,
    pub point_hover_border_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub grid: Grid,
    pub ticks: Ticks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<u32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticks {
    pub color: String,
    /// Prefix prepended to every tick label by the renderer's callback
    #[serde(skip)]
    pub prefix: Option<String>,
}

impl ChartConfig {
    /// Line chart of `series` styled with `palette`
    pub fn sales_line(series: &SalesSeries, palette: &ChartPalette, settings: &ChartSettings) -> Self {
        let accent = palette.accent.to_string();

        let dataset = Dataset {
            label: series.label.to_string(),
            data: series.values(),
            fill: true,
            background: palette.fill_gradient(settings.gradient_height),
            border_color: accent.clone(),
            tension: settings.tension,
            point_background_color: accent.clone(),
            point_border_color: POINT_HIGHLIGHT.to_string(),
            point_hover_radius: settings.point_hover_radius,
            point_hover_background_color: POINT_HIGHLIGHT.to_string(),
            point_hover_border_color: accent,
        };

        let x = Axis {
            grid: Grid {
                display: Some(false),
                color: None,
                border_dash: None,
            },
            ticks: Ticks {
                color: palette.text.to_string(),
                prefix: None,
            },
        };

        let y = Axis {
            grid: Grid {
                display: None,
                color: Some(palette.grid.to_string()),
                border_dash: Some(Y_GRID_DASH.to_vec()),
            },
            ticks: Ticks {
                color: palette.text.to_string(),
                prefix: Some(settings.currency_symbol.clone()),
            },
        };

        Self {
            kind: ChartKind::Line,
            data: ChartData {
                labels: series.labels(),
                datasets: vec![dataset],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                plugins: Plugins {
                    legend: Legend { display: false },
                },
                scales: Scales { x, y },
            },
        }
    }

    /// Gradient fills to build, keyed by dataset index
    pub fn fill_gradients(&self) -> impl Iterator<Item = (usize, &GradientFill)> + '_ {
        self.data
            .datasets
            .iter()
            .enumerate()
            .filter(|(_, d)| d.fill)
            .map(|(i, d)| (i, &d.background))
    }

    /// Tick label prefix of the y axis, if any
    pub fn y_tick_prefix(&self) -> Option<&str> {
        self.options.scales.y.ticks.prefix.as_deref()
    }

    /// JSON part of the configuration
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Render a y-axis tick label the way the chart shows it
pub fn format_tick(prefix: &str, value: f64) -> String {
    format!("{}{}", prefix, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use serde_json::json;

    fn build(theme: Theme) -> ChartConfig {
        ChartConfig::sales_line(
            &SalesSeries::demo(),
            &ChartPalette::for_theme(theme),
            &ChartSettings::default(),
        )
    }

    #[test]
    fn test_series_unchanged_across_themes() {
        for theme in Theme::ALL {
            let config = build(theme);
            assert_eq!(
                config.data.labels,
                vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"]
            );
            assert_eq!(config.data.datasets.len(), 1);
            assert_eq!(config.data.datasets[0].data, vec![65, 59, 80, 81, 56, 55, 90]);
        }
    }

    #[test]
    fn test_dark_json_shape() {
        let value = serde_json::to_value(build(Theme::Dark)).unwrap();

        assert_eq!(value["type"], "line");
        let dataset = &value["data"]["datasets"][0];
        assert_eq!(dataset["label"], "Sales");
        assert_eq!(dataset["fill"], true);
        assert_eq!(dataset["borderColor"], "#00f5d4");
        assert_eq!(dataset["tension"], 0.4);
        assert_eq!(dataset["pointBackgroundColor"], "#00f5d4");
        assert_eq!(dataset["pointBorderColor"], "#fff");
        assert_eq!(dataset["pointHoverRadius"], 7);
        assert_eq!(dataset["pointHoverBackgroundColor"], "#fff");
        assert_eq!(dataset["pointHoverBorderColor"], "#00f5d4");
        assert!(dataset.get("background").is_none());

        let options = &value["options"];
        assert_eq!(options["responsive"], true);
        assert_eq!(options["maintainAspectRatio"], false);
        assert_eq!(options["plugins"]["legend"]["display"], false);
        assert_eq!(options["scales"]["x"]["grid"], json!({ "display": false }));
        assert_eq!(options["scales"]["x"]["ticks"], json!({ "color": "#c9d1d9" }));
        assert_eq!(
            options["scales"]["y"]["grid"],
            json!({ "color": "rgba(255, 255, 255, 0.1)", "borderDash": [5, 5] })
        );
        assert_eq!(options["scales"]["y"]["ticks"], json!({ "color": "#c9d1d9" }));
    }

    #[test]
    fn test_light_colors() {
        let config = build(Theme::Light);
        let dataset = &config.data.datasets[0];
        assert_eq!(dataset.border_color, "#2563eb");
        assert_eq!(dataset.point_hover_border_color, "#2563eb");
        assert_eq!(config.options.scales.y.ticks.color, "#1f2937");
        assert_eq!(config.options.scales.y.grid.color.as_deref(), Some("rgba(0, 0, 0, 0.1)"));
    }

    #[test]
    fn test_side_data() {
        let config = build(Theme::Light);
        assert_eq!(config.y_tick_prefix(), Some("$"));

        let gradients: Vec<_> = config.fill_gradients().collect();
        assert_eq!(gradients.len(), 1);
        assert_eq!(gradients[0].0, 0);
        assert_eq!(gradients[0].1.stops[0].color, "#2563eb4D");
        assert_eq!(gradients[0].1.stops[1].color, "#2563eb00");
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick("$", 60.0), "$60");
        assert_eq!(format_tick("$", 57.5), "$57.5");
        assert_eq!(format_tick("€", 0.0), "€0");
    }
}
