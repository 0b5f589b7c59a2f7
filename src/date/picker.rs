//! Year / month / day scroll picker.

use std::time::Instant;

use chrono::{Datelike, NaiveDate};

use crate::log;
use crate::picker::{PickerOptions, ScrollItem, ScrollPicker, Picker};

use super::{DateBounds, clamped_date, days_in_month};

/// One column of the date picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Year,
    Month,
    Day,
}

impl DateField {
    pub const ALL: [DateField; 3] = [DateField::Year, DateField::Month, DateField::Day];

    pub fn title(&self) -> &'static str {
        match self {
            DateField::Year => "Year",
            DateField::Month => "Month",
            DateField::Day => "Day",
        }
    }

    /// Next column to the right (wraps around)
    pub fn next(self) -> Self {
        match self {
            DateField::Year => DateField::Month,
            DateField::Month => DateField::Day,
            DateField::Day => DateField::Year,
        }
    }

    /// Next column to the left (wraps around)
    pub fn prev(self) -> Self {
        match self {
            DateField::Year => DateField::Day,
            DateField::Month => DateField::Year,
            DateField::Day => DateField::Month,
        }
    }
}

/// A value picked in one column
#[derive(Debug, Clone, Copy)]
enum FieldValue {
    Year(i32),
    Month(u32),
    Day(u32),
}

fn year_items(bounds: &DateBounds) -> Vec<ScrollItem<i32>> {
    (bounds.min().year()..=bounds.max().year())
        .map(|year| ScrollItem::new(year, year.to_string()))
        .collect()
}

fn month_items(bounds: &DateBounds, year: i32) -> Vec<ScrollItem<u32>> {
    (1..=12)
        .map(|month| {
            ScrollItem::new(month, month.to_string())
                .with_disabled(!bounds.overlaps_month(year, month))
        })
        .collect()
}

fn day_items(bounds: &DateBounds, year: i32, month: u32) -> Vec<ScrollItem<u32>> {
    let last_day = days_in_month(year, month);
    (1..=31)
        .map(|day| {
            let selectable = day <= last_day
                && NaiveDate::from_ymd_opt(year, month, day).is_some_and(|d| bounds.contains(d));
            ScrollItem::new(day, day.to_string()).with_disabled(!selectable)
        })
        .collect()
}

/// Three scroll pickers editing one date.
///
/// The columns are kept consistent: days past the end of the month and
/// dates outside the bounds are disabled, and a year or month change pulls
/// the day back into range.
#[derive(Debug, Clone)]
pub struct DateScrollPicker {
    value: NaiveDate,
    bounds: DateBounds,
    focus: DateField,
    year: ScrollPicker<i32>,
    month: ScrollPicker<u32>,
    day: ScrollPicker<u32>,
}

impl DateScrollPicker {
    pub fn new(value: NaiveDate, bounds: DateBounds, options: PickerOptions) -> Self {
        let value = bounds.clamp(value);
        let (y, m, d) = (value.year(), value.month(), value.day());

        Self {
            value,
            bounds,
            focus: DateField::Year,
            year: ScrollPicker::new(year_items(&bounds), Some(y), options).with_name("year"),
            month: ScrollPicker::new(month_items(&bounds, y), Some(m), options).with_name("month"),
            day: ScrollPicker::new(day_items(&bounds, y, m), Some(d), options).with_name("day"),
        }
    }

    pub fn value(&self) -> NaiveDate {
        self.value
    }

    pub fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    pub fn focus(&self) -> DateField {
        self.focus
    }

    pub fn set_focus(&mut self, field: DateField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn year(&self) -> &ScrollPicker<i32> {
        &self.year
    }

    pub fn month(&self) -> &ScrollPicker<u32> {
        &self.month
    }

    pub fn day(&self) -> &ScrollPicker<u32> {
        &self.day
    }

    pub fn is_animating(&self) -> bool {
        self.year.is_animating() || self.month.is_animating() || self.day.is_animating()
    }

    /// Earliest pending settle among the columns
    pub fn settle_deadline(&self) -> Option<Instant> {
        [
            self.year.settle_deadline(),
            self.month.settle_deadline(),
            self.day.settle_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Mirror a date chosen by the owner.
    ///
    /// The date is clamped into the bounds and every column is resynced,
    /// even when the date itself is unchanged, so a column that settled on a
    /// value the date could not take scrolls back.
    pub fn set_value(&mut self, date: NaiveDate) {
        let date = self.bounds.clamp(date);
        let (y, m, d) = (date.year(), date.month(), date.day());

        if self.value.year() != y || self.value.month() != m {
            self.month.set_items(month_items(&self.bounds, y));
            self.day.set_items(day_items(&self.bounds, y, m));
        }
        self.value = date;

        self.year.set_value(Some(y));
        self.month.set_value(Some(m));
        self.day.set_value(Some(d));
    }

    fn commit(&mut self, change: Option<FieldValue>) -> Option<NaiveDate> {
        let change = change?;
        let (y, m, d) = (self.value.year(), self.value.month(), self.value.day());

        let composed = match change {
            FieldValue::Year(year) => clamped_date(year, m, d),
            FieldValue::Month(month) => clamped_date(y, month, d),
            FieldValue::Day(day) => clamped_date(y, m, day),
        };

        let previous = self.value;
        let next = composed.map_or(previous, |date| self.bounds.clamp(date));
        self.set_value(next);

        if next == previous {
            return None;
        }
        log::log(&format!("date picker: {} -> {}", previous, next));
        Some(next)
    }

    /// Run one operation on a column and commit what it picked.
    fn with_field<FY, FD>(&mut self, field: DateField, on_year: FY, on_other: FD) -> Option<NaiveDate>
    where
        FY: FnOnce(&mut ScrollPicker<i32>) -> Option<i32>,
        FD: FnOnce(&mut ScrollPicker<u32>) -> Option<u32>,
    {
        let change = match field {
            DateField::Year => on_year(&mut self.year).map(FieldValue::Year),
            DateField::Month => on_other(&mut self.month).map(FieldValue::Month),
            DateField::Day => on_other(&mut self.day).map(FieldValue::Day),
        };
        self.commit(change)
    }

    pub fn wheel(&mut self, field: DateField, notches: f64, now: Instant) {
        self.focus = field;
        self.with_field(
            field,
            |p| {
                p.wheel(notches, now);
                None
            },
            |p| {
                p.wheel(notches, now);
                None
            },
        );
    }

    pub fn press(&mut self, field: DateField, row: u16, item: Option<usize>) {
        self.focus = field;
        self.with_field(
            field,
            |p| {
                p.press(row, item);
                None
            },
            |p| {
                p.press(row, item);
                None
            },
        );
    }

    pub fn drag(&mut self, field: DateField, row: u16) {
        self.with_field(
            field,
            |p| {
                p.drag(row);
                None
            },
            |p| {
                p.drag(row);
                None
            },
        );
    }

    pub fn release(&mut self, field: DateField) -> Option<NaiveDate> {
        self.with_field(field, |p| p.release(), |p| p.release())
    }

    pub fn select_next(&mut self) -> Option<NaiveDate> {
        self.with_field(self.focus, |p| p.select_next(), |p| p.select_next())
    }

    pub fn select_prev(&mut self) -> Option<NaiveDate> {
        self.with_field(self.focus, |p| p.select_prev(), |p| p.select_prev())
    }

    pub fn select_first(&mut self) -> Option<NaiveDate> {
        self.with_field(self.focus, |p| p.select_first(), |p| p.select_first())
    }

    pub fn select_last(&mut self) -> Option<NaiveDate> {
        self.with_field(self.focus, |p| p.select_last(), |p| p.select_last())
    }

    /// Advance animations and fire due settles in every column.
    pub fn tick(&mut self, now: Instant) -> Option<NaiveDate> {
        let mut changed = None;
        for field in DateField::ALL {
            if let Some(date) = self.with_field(field, |p| p.tick(now), |p| p.tick(now)) {
                changed = Some(date);
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn picker(value: NaiveDate) -> DateScrollPicker {
        DateScrollPicker::new(value, DateBounds::default(), PickerOptions::default())
    }

    fn disabled_days(p: &DateScrollPicker) -> Vec<u32> {
        p.day()
            .items()
            .iter()
            .filter(|item| item.disabled)
            .map(|item| item.value)
            .collect()
    }

    #[test]
    fn test_columns_follow_value() {
        let p = picker(date(2024, 5, 17));
        assert_eq!(p.year().value(), Some(&2024));
        assert_eq!(p.month().value(), Some(&5));
        assert_eq!(p.day().value(), Some(&17));
        assert_eq!(p.year().items().len(), 200);
    }

    #[test]
    fn test_days_past_month_end_disabled() {
        let p = picker(date(2023, 2, 10));
        assert_eq!(disabled_days(&p), vec![29, 30, 31]);

        let p = picker(date(2024, 2, 10));
        assert_eq!(disabled_days(&p), vec![30, 31]);
    }

    #[test]
    fn test_year_change_clamps_day() {
        let mut p = picker(date(2024, 2, 29));
        p.set_focus(DateField::Year);

        assert_eq!(p.select_prev(), Some(date(2023, 2, 28)));
        assert_eq!(p.day().value(), Some(&28));
        assert_eq!(disabled_days(&p), vec![29, 30, 31]);
    }

    #[test]
    fn test_month_change_clamps_day() {
        let mut p = picker(date(2024, 1, 31));
        p.set_focus(DateField::Month);

        assert_eq!(p.select_next(), Some(date(2024, 2, 29)));
        assert_eq!(p.select_next(), Some(date(2024, 3, 29)));
    }

    #[test]
    fn test_wheel_onto_missing_day_resolves_to_month_end() {
        let mut p = picker(date(2024, 4, 28));
        let start = Instant::now();

        // Day 31 does not exist in April
        p.wheel(DateField::Day, 3.0, start);
        assert_eq!(p.tick(start), None);
        assert_eq!(
            p.tick(start + Duration::from_millis(100)),
            Some(date(2024, 4, 30))
        );
        assert_eq!(p.focus(), DateField::Day);
    }

    #[test]
    fn test_bounds_disable_and_clamp() {
        let bounds = DateBounds::new(date(2024, 3, 15), date(2024, 10, 10)).unwrap();
        let mut p = DateScrollPicker::new(date(2024, 4, 10), bounds, PickerOptions::default());

        let disabled_months: Vec<u32> = p
            .month()
            .items()
            .iter()
            .filter(|item| item.disabled)
            .map(|item| item.value)
            .collect();
        assert_eq!(disabled_months, vec![1, 2, 11, 12]);
        assert_eq!(p.year().items().len(), 1);

        p.set_focus(DateField::Month);
        assert_eq!(p.select_prev(), Some(date(2024, 3, 15)));
        assert_eq!(p.day().value(), Some(&15));
        assert_eq!(disabled_days(&p), (1..=14u32).collect::<Vec<_>>());

        // March is the first enabled month
        assert_eq!(p.select_prev(), None);
    }

    #[test]
    fn test_initial_value_clamped_into_bounds() {
        let bounds = DateBounds::new(date(2024, 3, 15), date(2024, 10, 10)).unwrap();
        let p = DateScrollPicker::new(date(2030, 1, 1), bounds, PickerOptions::default());
        assert_eq!(p.value(), date(2024, 10, 10));
    }

    #[test]
    fn test_click_day() {
        let mut p = picker(date(2024, 6, 1));
        p.press(DateField::Day, 5, Some(9));
        assert_eq!(p.release(DateField::Day), Some(date(2024, 6, 10)));
    }

    #[test]
    fn test_focus_cycles() {
        let mut p = picker(date(2024, 6, 1));
        assert_eq!(p.focus(), DateField::Year);
        p.focus_next();
        p.focus_next();
        assert_eq!(p.focus(), DateField::Day);
        p.focus_next();
        assert_eq!(p.focus(), DateField::Year);
        p.focus_prev();
        assert_eq!(p.focus(), DateField::Day);
    }
}
