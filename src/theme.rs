//! Theme Preference
//!
//! The two-valued styling mode of the page and the icon shown on the toggle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

/// Styling mode of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Both themes, dark first
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// The other theme
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon shown on the toggle while this theme is active.
    ///
    /// The icon names the theme a click switches to.
    pub fn toggle_icon(self) -> ThemeIcon {
        match self {
            Theme::Dark => ThemeIcon::Sun,
            Theme::Light => ThemeIcon::Moon,
        }
    }

    /// Resolve a stored preference, treating missing or unknown values as `fallback`
    pub fn from_stored(value: Option<&str>, fallback: Theme) -> Theme {
        match value {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::debug!("Ignoring stored theme: {}", err);
                fallback
            }),
            None => fallback,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(DashboardError::InvalidTheme(other.to_string())),
        }
    }
}

/// Glyph on the theme toggle control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

impl ThemeIcon {
    /// Lucide icon name
    pub fn name(self) -> &'static str {
        match self {
            ThemeIcon::Sun => "sun",
            ThemeIcon::Moon => "moon",
        }
    }

    /// Marker element replaced with the glyph by the icon library
    pub fn markup(self) -> String {
        format!(r#"<i data-lucide="{}"></i>"#, self.name())
    }
}
