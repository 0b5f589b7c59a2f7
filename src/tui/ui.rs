use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, InputField, Panel, PickerTarget};
use super::components::{
    DATE_PICKER_WIDTH, render_date_input_field, render_date_input_popup, render_date_picker,
    render_hotkeys, render_scroll_picker, render_status,
};
use super::interaction::InteractionRegistry;
use super::theme::*;

const NUMBERS_WIDTH: u16 = 16;
const FILTERED_WIDTH: u16 = 24;

/// Draw the whole screen and collect the mouse regions it exposes.
pub fn render(frame: &mut Frame, app: &App) -> InteractionRegistry {
    let area = frame.area();
    let mut registry = InteractionRegistry::new();

    let column_height = app.numbers.options().visible_items as u16 + 2;

    // Main vertical layout: logo, pickers, date inputs, status, hotkeys
    let [logo_area, pickers_area, _, dialog_area, popover_area, _, status_area, hotkeys_area] =
        Layout::vertical([
            Constraint::Length(2),             // Logo + spacing
            Constraint::Length(column_height), // Picker columns
            Constraint::Length(1),             // Gap
            Constraint::Length(1),             // Dialog date input
            Constraint::Length(1),             // Popover date input
            Constraint::Min(0),
            Constraint::Length(1),             // Status
            Constraint::Length(1),             // Hotkeys
        ])
        .areas(area);

    render_logo(frame, logo_area);

    let [numbers_area, _, filtered_area, _, date_area, _] = Layout::horizontal([
        Constraint::Length(NUMBERS_WIDTH),
        Constraint::Length(1),
        Constraint::Length(FILTERED_WIDTH),
        Constraint::Length(1),
        Constraint::Length(DATE_PICKER_WIDTH),
        Constraint::Min(0),
    ])
    .areas(pickers_area);

    render_scroll_picker(
        frame,
        numbers_area,
        &app.numbers,
        "Numbers",
        app.focus == Panel::Numbers,
        PickerTarget::Numbers,
        &mut registry,
        0,
    );
    render_scroll_picker(
        frame,
        filtered_area,
        &app.filtered_numbers,
        "Filtered",
        app.focus == Panel::FilteredNumbers,
        PickerTarget::FilteredNumbers,
        &mut registry,
        0,
    );
    render_date_picker(
        frame,
        date_area,
        &app.date_picker,
        app.focus == Panel::Date,
        false,
        &mut registry,
        0,
    );

    let dialog_anchor = render_date_input_field(
        frame,
        dialog_area,
        &app.dialog_input,
        "Dialog",
        app.focus == Panel::DialogInput,
        InputField::Dialog,
        &mut registry,
    );
    let popover_anchor = render_date_input_field(
        frame,
        popover_area,
        &app.popover_input,
        "Popover",
        app.focus == Panel::PopoverInput,
        InputField::Popover,
        &mut registry,
    );

    render_status(frame, status_area, app);
    render_hotkeys(frame, hotkeys_area, app);

    // The open draft goes on top of everything
    if let Some(field) = app.open_input() {
        let anchor = match field {
            InputField::Dialog => dialog_anchor,
            InputField::Popover => popover_anchor,
        };
        render_date_input_popup(frame, area, anchor, app.input(field), &mut registry);
    }

    registry
}

fn render_logo(frame: &mut Frame, area: Rect) {
    let colors = [ACCENT_CORAL, ACCENT_GOLD, ACCENT_LIGHT_BLUE, ACCENT_MINT];
    let name = "scroll-picker";
    let padding = (area.width.saturating_sub(name.len() as u16)) / 2;

    let mut spans = vec![Span::raw(" ".repeat(padding as usize))];
    spans.extend(name.chars().enumerate().map(|(i, c)| {
        Span::styled(c.to_string(), Style::new().fg(colors[i % colors.len()]).bold())
    }));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
