//! Error types for scroll-picker
//!
//! The pickers themselves never fail: an unresolvable scroll position is a
//! no-op. Errors only come from the surrounding layers:
//! - `ConfigError` for invalid configuration values
//! - `PickerError` as the top-level error type

use chrono::NaiveDate;
use thiserror::Error;

/// Top-level error type for scroll-picker
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("{0}")]
    Other(String),
}

/// Errors related to configuration values
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Item height must be a positive number, got {0}")]
    InvalidItemHeight(f64),

    #[error("Visible item count must be odd and non-zero, got {0}")]
    InvalidVisibleItems(usize),

    #[error("Minimum date {min} is after maximum date {max}")]
    InvalidDateRange { min: NaiveDate, max: NaiveDate },

    #[error("Year range {0}..={1} is not representable as a calendar date")]
    InvalidYearRange(i32, i32),

    #[error("Invalid date format string '{0}'")]
    InvalidDateFormat(String),

    #[error("Unknown picker UI '{0}' (expected dialog or popover)")]
    InvalidPickerUi(String),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for PickerError
pub type Result<T> = std::result::Result<T, PickerError>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl From<String> for PickerError {
    fn from(msg: String) -> Self {
        PickerError::Other(msg)
    }
}

impl From<&str> for PickerError {
    fn from(msg: &str) -> Self {
        PickerError::Other(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_wraps_into_picker_error() {
        let err: PickerError = ConfigError::InvalidVisibleItems(4).into();
        assert!(matches!(err, PickerError::Config(ConfigError::InvalidVisibleItems(4))));
        assert_eq!(
            err.to_string(),
            "Config error: Visible item count must be odd and non-zero, got 4"
        );
    }

    #[test]
    fn test_picker_ui_message() {
        let err = ConfigError::InvalidPickerUi("sheet".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown picker UI 'sheet' (expected dialog or popover)"
        );
    }

    #[test]
    fn test_date_range_message() {
        let min = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let max = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let err = ConfigError::InvalidDateRange { min, max };
        assert_eq!(
            err.to_string(),
            "Minimum date 2024-05-01 is after maximum date 2024-01-01"
        );
    }
}
