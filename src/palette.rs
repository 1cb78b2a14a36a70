//! Chart Palette
//!
//! Theme-dependent colors for the sales chart.

use serde::Serialize;

use crate::theme::Theme;

/// Accent color in dark mode
pub const DARK_ACCENT: &str = "#00f5d4";
/// Accent color in light mode
pub const LIGHT_ACCENT: &str = "#2563eb";

const DARK_GRID: &str = "rgba(255, 255, 255, 0.1)";
const LIGHT_GRID: &str = "rgba(0, 0, 0, 0.1)";
const DARK_TEXT: &str = "#c9d1d9";
const LIGHT_TEXT: &str = "#1f2937";

/// Fill and border color of highlighted points
pub const POINT_HIGHLIGHT: &str = "#fff";

/// Hex alpha suffix at the top of the fill (~30% opacity)
const FILL_TOP_ALPHA: &str = "4D";
/// Hex alpha suffix at the bottom of the fill (transparent)
const FILL_BOTTOM_ALPHA: &str = "00";

/// Colors applied to one chart build
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPalette {
    pub theme: Theme,
    /// Y-axis grid lines
    pub grid: &'static str,
    /// Tick labels
    pub text: &'static str,
    /// Line, points and fill base
    pub accent: &'static str,
}

impl ChartPalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                theme,
                grid: DARK_GRID,
                text: DARK_TEXT,
                accent: DARK_ACCENT,
            },
            Theme::Light => Self {
                theme,
                grid: LIGHT_GRID,
                text: LIGHT_TEXT,
                accent: LIGHT_ACCENT,
            },
        }
    }

    /// Vertical fill fading from the translucent accent to transparent
    pub fn fill_gradient(&self, height: f64) -> GradientFill {
        GradientFill {
            height,
            stops: vec![
                ColorStop {
                    offset: 0.0,
                    color: format!("{}{}", self.accent, FILL_TOP_ALPHA),
                },
                ColorStop {
                    offset: 1.0,
                    color: format!("{}{}", self.accent, FILL_BOTTOM_ALPHA),
                },
            ],
        }
    }
}

/// Linear gradient from y = 0 down to y = `height`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientFill {
    pub height: f64,
    pub stops: Vec<ColorStop>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_literals() {
        assert_eq!(ChartPalette::for_theme(Theme::Dark).accent, "#00f5d4");
        assert_eq!(ChartPalette::for_theme(Theme::Light).accent, "#2563eb");
    }

    #[test]
    fn test_grid_and_text() {
        let dark = ChartPalette::for_theme(Theme::Dark);
        assert_eq!(dark.grid, "rgba(255, 255, 255, 0.1)");
        assert_eq!(dark.text, "#c9d1d9");

        let light = ChartPalette::for_theme(Theme::Light);
        assert_eq!(light.grid, "rgba(0, 0, 0, 0.1)");
        assert_eq!(light.text, "#1f2937");
    }

    #[test]
    fn test_fill_gradient_fades_out() {
        let fill = ChartPalette::for_theme(Theme::Dark).fill_gradient(400.0);
        assert_eq!(fill.height, 400.0);
        assert_eq!(fill.stops.len(), 2);
        assert_eq!(fill.stops[0].offset, 0.0);
        assert_eq!(fill.stops[0].color, "#00f5d44D");
        assert_eq!(fill.stops[1].offset, 1.0);
        assert_eq!(fill.stops[1].color, "#00f5d400");
    }
}
