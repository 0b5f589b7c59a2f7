//! Nullable date field backed by a date picker draft.

use std::fmt::Write;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::log;
use crate::picker::PickerOptions;

use super::{DateBounds, DateScrollPicker};

/// Text shown while the field is empty
pub const PLACEHOLDER: &str = "Select a date";

const FALLBACK_FORMAT: &str = "%Y/%m/%d";

/// How the picker draft is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerUi {
    /// Centered over the whole screen
    #[default]
    Dialog,
    /// Anchored below the field
    Popover,
}

impl FromStr for PickerUi {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dialog" => Ok(PickerUi::Dialog),
            "popover" => Ok(PickerUi::Popover),
            _ => Err(ConfigError::InvalidPickerUi(s.to_string())),
        }
    }
}

/// A date field whose value may be empty.
///
/// Opening the field creates a draft [`DateScrollPicker`]; the value only
/// changes when the draft is submitted or the field is cleared.
#[derive(Debug, Clone)]
pub struct DateInput {
    value: Option<NaiveDate>,
    ui: PickerUi,
    /// Date the draft starts from when the field is empty
    initial_picker_date: NaiveDate,
    bounds: DateBounds,
    options: PickerOptions,
    format: String,
    draft: Option<DateScrollPicker>,
}

impl DateInput {
    pub fn new(
        value: Option<NaiveDate>,
        ui: PickerUi,
        bounds: DateBounds,
        options: PickerOptions,
    ) -> Self {
        Self {
            value,
            ui,
            initial_picker_date: Local::now().date_naive(),
            bounds,
            options,
            format: FALLBACK_FORMAT.to_string(),
            draft: None,
        }
    }

    /// Set the display format (for builder pattern)
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Set the date an empty field opens on (for builder pattern)
    pub fn with_initial_picker_date(mut self, date: NaiveDate) -> Self {
        self.initial_picker_date = date;
        self
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    /// Mirror a value chosen by the owner
    pub fn set_value(&mut self, value: Option<NaiveDate>) {
        self.value = value;
    }

    pub fn ui(&self) -> PickerUi {
        self.ui
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&DateScrollPicker> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut DateScrollPicker> {
        self.draft.as_mut()
    }

    /// Formatted value, or an empty string when there is none.
    ///
    /// A format string chrono rejects falls back to `yyyy/MM/dd` instead of
    /// panicking.
    pub fn display_text(&self) -> String {
        let Some(date) = self.value else {
            return String::new();
        };
        let mut text = String::new();
        if write!(text, "{}", date.format(&self.format)).is_err() {
            return date.format(FALLBACK_FORMAT).to_string();
        }
        text
    }

    /// Open the draft on the current value, or the initial date if empty.
    pub fn open(&mut self) {
        if self.draft.is_some() {
            return;
        }
        let seed = self.value.unwrap_or(self.initial_picker_date);
        self.draft = Some(DateScrollPicker::new(seed, self.bounds, self.options));
    }

    /// Close the draft without changing the value.
    pub fn cancel(&mut self) -> bool {
        self.draft.take().is_some()
    }

    /// Close the draft and take its date as the value.
    ///
    /// Returns the submitted date, or `None` if no draft was open.
    pub fn submit(&mut self) -> Option<NaiveDate> {
        let draft = self.draft.take()?;
        let date = draft.value();
        log::log(&format!("date input: submitted {}", date));
        self.value = Some(date);
        Some(date)
    }

    /// Empty the field. Returns `false` if it already was.
    pub fn clear(&mut self) -> bool {
        if self.value.take().is_some() {
            log::log("date input: cleared");
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input(value: Option<NaiveDate>) -> DateInput {
        DateInput::new(value, PickerUi::Dialog, DateBounds::default(), PickerOptions::default())
            .with_initial_picker_date(date(2024, 7, 1))
    }

    #[test]
    fn test_display_text() {
        assert_eq!(input(None).display_text(), "");
        assert_eq!(input(Some(date(2024, 3, 5))).display_text(), "2024/03/05");

        let custom = input(Some(date(2024, 3, 5))).with_format("%d.%m.%Y");
        assert_eq!(custom.display_text(), "05.03.2024");
    }

    #[test]
    fn test_bad_format_falls_back() {
        let bad = input(Some(date(2024, 3, 5))).with_format("%Y%");
        assert_eq!(bad.display_text(), "2024/03/05");
    }

    #[test]
    fn test_empty_field_opens_on_initial_date() {
        let mut field = input(None);
        field.open();
        assert!(field.is_open());
        assert_eq!(field.draft().map(|d| d.value()), Some(date(2024, 7, 1)));
    }

    #[test]
    fn test_cancel_keeps_value() {
        let mut field = input(Some(date(2024, 3, 5)));
        field.open();
        if let Some(draft) = field.draft_mut() {
            draft.select_next();
        }
        assert!(field.cancel());
        assert!(!field.is_open());
        assert_eq!(field.value(), Some(date(2024, 3, 5)));
        assert!(!field.cancel());
    }

    #[test]
    fn test_submit_takes_draft() {
        let mut field = input(Some(date(2024, 3, 5)));
        field.open();
        if let Some(draft) = field.draft_mut() {
            // Focus starts on the year column
            draft.select_next();
        }
        assert_eq!(field.submit(), Some(date(2025, 3, 5)));
        assert_eq!(field.value(), Some(date(2025, 3, 5)));
        assert_eq!(field.submit(), None);
    }

    #[test]
    fn test_clear() {
        let mut field = input(Some(date(2024, 3, 5)));
        assert!(field.clear());
        assert_eq!(field.value(), None);
        assert!(!field.clear());
    }

    #[test]
    fn test_picker_ui_from_str() {
        assert!(matches!("popover".parse::<PickerUi>(), Ok(PickerUi::Popover)));
        assert!(matches!("Dialog".parse::<PickerUi>(), Ok(PickerUi::Dialog)));
        assert!(matches!(
            "sheet".parse::<PickerUi>(),
            Err(ConfigError::InvalidPickerUi(ref ui)) if ui == "sheet"
        ));
    }
}
