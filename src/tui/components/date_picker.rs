//! Year / month / day picker component.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::app::PickerTarget;
use crate::date::{DateField, DateScrollPicker};
use crate::tui::interaction::InteractionRegistry;

use super::render_scroll_picker;

pub const YEAR_WIDTH: u16 = 10;
pub const MONTH_WIDTH: u16 = 9;
pub const DAY_WIDTH: u16 = 9;

/// Total width of the three columns.
pub const DATE_PICKER_WIDTH: u16 = YEAR_WIDTH + MONTH_WIDTH + DAY_WIDTH;

/// Render the three date columns side by side.
///
/// `in_draft` routes pointer events to the open date input draft instead of
/// the standalone picker.
pub fn render_date_picker(
    frame: &mut Frame,
    area: Rect,
    picker: &DateScrollPicker,
    focused: bool,
    in_draft: bool,
    registry: &mut InteractionRegistry,
    priority: i32,
) {
    let [year_area, month_area, day_area, _] = Layout::horizontal([
        Constraint::Length(YEAR_WIDTH),
        Constraint::Length(MONTH_WIDTH),
        Constraint::Length(DAY_WIDTH),
        Constraint::Min(0),
    ])
    .areas(area);

    let target = |field| {
        if in_draft {
            PickerTarget::Draft(field)
        } else {
            PickerTarget::Date(field)
        }
    };
    let column_focused = |field| focused && picker.focus() == field;

    render_scroll_picker(
        frame,
        year_area,
        picker.year(),
        DateField::Year.title(),
        column_focused(DateField::Year),
        target(DateField::Year),
        registry,
        priority,
    );
    render_scroll_picker(
        frame,
        month_area,
        picker.month(),
        DateField::Month.title(),
        column_focused(DateField::Month),
        target(DateField::Month),
        registry,
        priority,
    );
    render_scroll_picker(
        frame,
        day_area,
        picker.day(),
        DateField::Day.title(),
        column_focused(DateField::Day),
        target(DateField::Day),
        registry,
        priority,
    );
}
