//! Date pickers composed from three scroll pickers.
//!
//! - `picker` - year / month / day columns kept consistent with each other
//! - `input` - a nullable date field that opens a picker draft

mod input;
mod picker;

use chrono::{Datelike, NaiveDate};

use crate::error::{ConfigError, ConfigResult};

pub use input::{DateInput, PLACEHOLDER, PickerUi};
pub use picker::{DateField, DateScrollPicker};

/// Number of days in a month, 28 to 31.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

/// Build a date, pulling the day back to the end of shorter months.
pub fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let day = day.clamp(1, days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Inclusive range of selectable dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    min: NaiveDate,
    max: NaiveDate,
}

impl Default for DateBounds {
    fn default() -> Self {
        Self {
            min: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN),
            max: NaiveDate::from_ymd_opt(2099, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }
}

impl DateBounds {
    pub fn new(min: NaiveDate, max: NaiveDate) -> ConfigResult<Self> {
        if min > max {
            return Err(ConfigError::InvalidDateRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> NaiveDate {
        self.min
    }

    pub fn max(&self) -> NaiveDate {
        self.max
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.min..=self.max).contains(&date)
    }

    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.min, self.max)
    }

    /// Whether any day of the month lies inside the bounds.
    pub fn overlaps_month(&self, year: i32, month: u32) -> bool {
        let first = NaiveDate::from_ymd_opt(year, month, 1);
        let last = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month));
        match (first, last) {
            (Some(first), Some(last)) => first <= self.max && last >= self.min,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_clamped_date() {
        assert_eq!(clamped_date(2023, 2, 31), Some(date(2023, 2, 28)));
        assert_eq!(clamped_date(2024, 6, 15), Some(date(2024, 6, 15)));
        assert_eq!(clamped_date(2024, 13, 1), None);
    }

    #[test]
    fn test_bounds() {
        let bounds = DateBounds::new(date(2024, 3, 15), date(2024, 10, 10)).unwrap();
        assert!(bounds.contains(date(2024, 3, 15)));
        assert!(!bounds.contains(date(2024, 3, 14)));
        assert_eq!(bounds.clamp(date(2025, 1, 1)), date(2024, 10, 10));

        assert!(!bounds.overlaps_month(2024, 2));
        assert!(bounds.overlaps_month(2024, 3));
        assert!(bounds.overlaps_month(2024, 10));
        assert!(!bounds.overlaps_month(2024, 11));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        assert!(DateBounds::new(date(2024, 5, 1), date(2024, 4, 1)).is_err());
    }
}
