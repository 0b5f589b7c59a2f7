//! Date input field and its draft picker popup.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::InputField;
use crate::date::{DateInput, PLACEHOLDER, PickerUi};
use crate::events::Action;
use crate::tui::interaction::{ClickRegion, InteractionRegistry};
use crate::tui::theme::*;

use super::date_picker::{DATE_PICKER_WIDTH, render_date_picker};

/// Priority of everything drawn inside the popup
pub const POPUP_PRIORITY: i32 = 100;
/// Priority of the backdrop that closes the popup when clicked
const BACKDROP_PRIORITY: i32 = 50;

const LABEL_WIDTH: u16 = 10;
/// Cells available to the date text inside the brackets
const VALUE_WIDTH: u16 = 18;
/// `[`, a space, the text and `]`
const BOX_WIDTH: u16 = VALUE_WIDTH + 3;
const CLEAR_LABEL: &str = "[x]";
const CANCEL_LABEL: &str = "[ Cancel ]";
const OK_LABEL: &str = "[ OK ]";

/// Render a one-line date field. Returns the area of the value box, which
/// a popover anchors to.
pub fn render_date_input_field(
    frame: &mut Frame,
    area: Rect,
    input: &DateInput,
    label: &str,
    focused: bool,
    field: InputField,
    registry: &mut InteractionRegistry,
) -> Rect {
    let text = input.display_text();
    let has_value = input.value().is_some();

    let value_span = if has_value {
        Span::styled(
            format!(" {:<width$}", fit(&text, VALUE_WIDTH as usize), width = VALUE_WIDTH as usize),
            Style::new().fg(TEXT_WHITE),
        )
    } else {
        Span::styled(
            format!(" {:<width$}", fit(PLACEHOLDER, VALUE_WIDTH as usize), width = VALUE_WIDTH as usize),
            Style::new().fg(TEXT_FAINT).italic(),
        )
    };
    let bracket_style = if focused {
        Style::new().fg(ACCENT_LIGHT_BLUE)
    } else {
        Style::new().fg(TEXT_DIM)
    };

    let mut spans = vec![
        Span::styled(
            format!("{:<width$}", label, width = LABEL_WIDTH as usize),
            if focused {
                Style::new().fg(TEXT_WHITE).bold()
            } else {
                Style::new().fg(TEXT_DIM)
            },
        ),
        Span::styled("[", bracket_style),
        value_span,
        Span::styled("]", bracket_style),
    ];
    if has_value {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(CLEAR_LABEL, Style::new().fg(ACCENT_CORAL)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    let box_x = area.x + LABEL_WIDTH;
    let box_area = Rect::new(box_x, area.y, BOX_WIDTH.min(area.width.saturating_sub(LABEL_WIDTH)), 1);
    registry.register_click(
        "date_input_field",
        box_area.into(),
        Action::OpenDateInput(field),
        0,
    );
    if has_value {
        // One blank cell separates the box from the clear button
        registry.register_click(
            "date_input_clear",
            ClickRegion::new(box_x + BOX_WIDTH + 1, area.y, CLEAR_LABEL.len() as u16, 1),
            Action::ClearDateInput(field),
            0,
        );
    }

    box_area
}

/// Cut `text` to at most `width` cells, marking the cut with an ellipsis.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Where the draft popup goes for the given UI.
///
/// A dialog is centered on the screen; a popover sits below its field, or
/// above it when there is no room below.
pub fn popup_area(ui: PickerUi, screen: Rect, anchor: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(screen.width);
    let height = height.min(screen.height);
    match ui {
        PickerUi::Dialog => Rect::new(
            screen.x + (screen.width - width) / 2,
            screen.y + (screen.height - height) / 2,
            width,
            height,
        ),
        PickerUi::Popover => {
            let below = anchor.y.saturating_add(1);
            let y = if below + height <= screen.y + screen.height {
                below
            } else {
                anchor.y.saturating_sub(height).max(screen.y)
            };
            let x = anchor.x.min((screen.x + screen.width).saturating_sub(width));
            Rect::new(x, y, width, height)
        }
    }
}

/// Render the open draft of a date input on top of everything else.
pub fn render_date_input_popup(
    frame: &mut Frame,
    screen: Rect,
    anchor: Rect,
    input: &DateInput,
    registry: &mut InteractionRegistry,
) {
    let Some(draft) = input.draft() else {
        return;
    };

    // Clicking outside closes the popup; wheel outside does nothing
    registry.register_click(
        "date_input_backdrop",
        screen.into(),
        Action::CancelDateInput,
        BACKDROP_PRIORITY,
    );
    registry.register_scroll(
        "date_input_backdrop",
        screen.into(),
        Action::None,
        Action::None,
        BACKDROP_PRIORITY,
    );

    let columns_height = draft.year().options().visible_items as u16 + 2;
    let width = DATE_PICKER_WIDTH + 2;
    let height = columns_height + 3;
    let area = popup_area(input.ui(), screen, anchor, width, height);

    frame.render_widget(Clear, area);
    let title = match input.ui() {
        PickerUi::Dialog => " Pick a date ",
        PickerUi::Popover => " Date ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT_GOLD))
        .style(Style::new().bg(POPUP_BG))
        .title(Span::styled(title, Style::new().fg(TEXT_WHITE).bold()));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    registry.register_click("date_input_popup", area.into(), Action::None, POPUP_PRIORITY - 1);

    let columns = Rect::new(inner.x, inner.y, inner.width, columns_height.min(inner.height));
    render_date_picker(frame, columns, draft, true, true, registry, POPUP_PRIORITY);

    if inner.height <= columns_height {
        return;
    }
    let buttons_y = inner.y + columns_height;
    let buttons = Line::from(vec![
        Span::raw(" "),
        Span::styled(CANCEL_LABEL, Style::new().fg(TEXT_DIM)),
        Span::raw("  "),
        Span::styled(OK_LABEL, Style::new().fg(ACCENT_MINT).bold()),
    ]);
    frame.render_widget(
        Paragraph::new(buttons),
        Rect::new(inner.x, buttons_y, inner.width, 1),
    );

    let cancel_x = inner.x + 1;
    let ok_x = cancel_x + CANCEL_LABEL.len() as u16 + 2;
    registry.register_click(
        "date_input_cancel",
        ClickRegion::new(cancel_x, buttons_y, CANCEL_LABEL.len() as u16, 1),
        Action::CancelDateInput,
        POPUP_PRIORITY,
    );
    registry.register_click(
        "date_input_ok",
        ClickRegion::new(ok_x, buttons_y, OK_LABEL.len() as u16, 1),
        Action::SubmitDateInput,
        POPUP_PRIORITY,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_truncates_long_text() {
        assert_eq!(fit("2024/03/05", 18), "2024/03/05");
        assert_eq!(fit("Tuesday, 5 March 2024", 18), "Tuesday, 5 March …");
        assert_eq!(fit("Tuesday, 5 March 2024", 18).chars().count(), 18);
    }

    #[test]
    fn test_dialog_is_centered() {
        let screen = Rect::new(0, 0, 80, 24);
        let area = popup_area(PickerUi::Dialog, screen, Rect::new(10, 3, 20, 1), 30, 10);
        assert_eq!(area, Rect::new(25, 7, 30, 10));
    }

    #[test]
    fn test_popover_below_anchor() {
        let screen = Rect::new(0, 0, 80, 24);
        let area = popup_area(PickerUi::Popover, screen, Rect::new(10, 3, 20, 1), 30, 10);
        assert_eq!(area, Rect::new(10, 4, 30, 10));
    }

    #[test]
    fn test_popover_flips_above_near_bottom() {
        let screen = Rect::new(0, 0, 80, 24);
        let area = popup_area(PickerUi::Popover, screen, Rect::new(60, 20, 20, 1), 30, 10);
        assert_eq!(area, Rect::new(50, 10, 30, 10));
    }
}
