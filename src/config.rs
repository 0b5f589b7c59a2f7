//! Configuration file support for scroll-picker.
//!
//! Configuration is loaded from `~/.config/scroll-picker/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/scroll-picker/config.toml
//! item_height = 36.0
//! visible_items = 5
//! settle_ms = 100
//! picker_ui = "popover"
//!
//! [dates]
//! min_year = 1950
//! max_year = 2050
//! format = "%Y/%m/%d"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;

use crate::date::{DateBounds, PickerUi};
use crate::error::{ConfigError, ConfigResult};
use crate::log;
use crate::picker::PickerOptions;

pub const DEFAULT_ITEM_HEIGHT: f64 = 36.0;
pub const DEFAULT_VISIBLE_ITEMS: usize = 5;
pub const DEFAULT_SETTLE_MS: u64 = 100;
pub const DEFAULT_FRAME_MS: u64 = 16;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Height of one item, in scroll units
    pub item_height: f64,

    /// Number of rows shown by a picker (odd, so one row is centered)
    pub visible_items: usize,

    /// Quiet period after the last wheel event before the picker settles
    pub settle_ms: u64,

    /// Scroll distance of one wheel notch; defaults to one item
    pub wheel_step: Option<f64>,

    /// Interval between animation frames while a picker glides to its value
    pub frame_ms: u64,

    /// How the date input presents its picker
    pub picker_ui: PickerUi,

    /// Date picker settings
    pub dates: DateConfig,
}

/// Date picker configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    /// First selectable year
    pub min_year: i32,

    /// Last selectable year
    pub max_year: i32,

    /// Optional lower bound narrower than `min_year`
    pub min_date: Option<NaiveDate>,

    /// Optional upper bound narrower than `max_year`
    pub max_date: Option<NaiveDate>,

    /// `chrono` format string used by the date input field
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            item_height: DEFAULT_ITEM_HEIGHT,
            visible_items: DEFAULT_VISIBLE_ITEMS,
            settle_ms: DEFAULT_SETTLE_MS,
            wheel_step: None,
            frame_ms: DEFAULT_FRAME_MS,
            picker_ui: PickerUi::default(),
            dates: DateConfig::default(),
        }
    }
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            min_year: 1900,
            max_year: 2099,
            min_date: None,
            max_date: None,
            format: "%Y/%m/%d".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => config,
                Err(e) => {
                    log::log(&format!("Failed to parse config file: {}", e));
                    eprintln!("Warning: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::log(&format!("Failed to read config file: {}", e));
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("scroll-picker")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over the environment and the config file.
    pub fn with_overrides(mut self, picker_ui: Option<PickerUi>, settle_ms: Option<u64>) -> Self {
        if let Some(env_settle) = std::env::var("SCROLL_PICKER_SETTLE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.settle_ms = env_settle;
        }
        if let Some(ui) = picker_ui {
            self.picker_ui = ui;
        }
        if let Some(ms) = settle_ms {
            self.settle_ms = ms;
        }
        self
    }

    /// Reject values the pickers cannot work with.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.item_height.is_finite() && self.item_height > 0.0) {
            return Err(ConfigError::InvalidItemHeight(self.item_height));
        }
        if self.visible_items == 0 || self.visible_items % 2 == 0 {
            return Err(ConfigError::InvalidVisibleItems(self.visible_items));
        }
        if let Some(step) = self.wheel_step {
            if !(step.is_finite() && step > 0.0) {
                return Err(ConfigError::InvalidItemHeight(step));
            }
        }
        if StrftimeItems::new(&self.dates.format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidDateFormat(self.dates.format.clone()));
        }
        self.date_bounds().map(|_| ())
    }

    /// Picker geometry and timing derived from this configuration.
    pub fn picker_options(&self) -> PickerOptions {
        PickerOptions {
            item_height: self.item_height,
            visible_items: self.visible_items,
            settle_delay: Duration::from_millis(self.settle_ms),
            wheel_step: self.wheel_step.unwrap_or(self.item_height),
        }
    }

    /// Selectable date range: the year range, narrowed by explicit dates.
    pub fn date_bounds(&self) -> ConfigResult<DateBounds> {
        let dates = &self.dates;
        let year_min = NaiveDate::from_ymd_opt(dates.min_year, 1, 1)
            .ok_or(ConfigError::InvalidYearRange(dates.min_year, dates.max_year))?;
        let year_max = NaiveDate::from_ymd_opt(dates.max_year, 12, 31)
            .ok_or(ConfigError::InvalidYearRange(dates.min_year, dates.max_year))?;

        let min = dates.min_date.map_or(year_min, |d| d.max(year_min));
        let max = dates.max_date.map_or(year_max, |d| d.min(year_max));
        DateBounds::new(min, max)
    }

    /// Animation frame interval.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.item_height, DEFAULT_ITEM_HEIGHT);
        assert_eq!(config.visible_items, 5);
        assert_eq!(config.settle_ms, 100);
        assert_eq!(config.picker_ui, PickerUi::Dialog);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            item_height = 24.0
            visible_items = 7
            settle_ms = 250
            picker_ui = "popover"

            [dates]
            min_year = 2000
            max_year = 2030
            max_date = "2030-06-30"
        "#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.item_height, 24.0);
        assert_eq!(config.visible_items, 7);
        assert_eq!(config.picker_ui, PickerUi::Popover);
        assert_eq!(config.dates.format, "%Y/%m/%d");

        let options = config.picker_options();
        assert_eq!(options.settle_delay, Duration::from_millis(250));
        assert_eq!(options.wheel_step, 24.0);

        let bounds = config.date_bounds().unwrap();
        assert_eq!(bounds.min(), NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(bounds.max(), NaiveDate::from_ymd_opt(2030, 6, 30).unwrap());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Config::parse("visible_items = \"five\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        let config = Config {
            visible_items: 4,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidVisibleItems(4))
        ));

        let config = Config {
            item_height: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidItemHeight(_))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_years() {
        let mut config = Config::default();
        config.dates.min_year = 2050;
        config.dates.max_year = 2000;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_format() {
        let mut config = Config::default();
        config.dates.format = "%Y/%".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = Config::default().with_overrides(Some(PickerUi::Popover), Some(40));
        assert_eq!(config.picker_ui, PickerUi::Popover);
        assert_eq!(config.settle_ms, 40);
    }
}
