//! Dashboard error types
//!
//! Defines the errors that can occur while driving the page. None of them are
//! shown to the user; the controller logs them and carries on.

use thiserror::Error;

/// Errors that can occur in the dashboard core
#[derive(Error, Debug)]
pub enum DashboardError {
    /// A theme name other than "dark" or "light"
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    /// Preference storage read or write failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// The charting backend refused to build or bind a chart
    #[error("Chart error: {0}")]
    Chart(String),

    /// Chart configuration could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::InvalidTheme("blue".to_string());
        assert_eq!(err.to_string(), "Invalid theme: blue");

        let err = DashboardError::Chart("canvas missing".to_string());
        assert_eq!(err.to_string(), "Chart error: canvas missing");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: DashboardError = json_err.into();
        assert!(matches!(err, DashboardError::Serialization(_)));
    }
}
