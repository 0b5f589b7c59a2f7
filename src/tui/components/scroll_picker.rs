//! Scroll picker column component.

use std::fmt::Debug;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::PickerTarget;
use crate::events::Action;
use crate::picker::{Picker, ScrollPicker};
use crate::tui::interaction::{ClickRegion, InteractionRegistry};
use crate::tui::theme::*;

/// Text color of a row by its distance from the center row.
fn fade(distance: usize) -> Color {
    match distance {
        0 => TEXT_WHITE,
        1 => TEXT_SOFT,
        2 => TEXT_DIM,
        _ => TEXT_FAINT,
    }
}

/// Render one picker column and register its wheel and row regions.
///
/// The column is drawn as a bordered block whose inner rows mirror
/// `ScrollPicker::visible_rows`; the middle row carries the selection band.
#[allow(clippy::too_many_arguments)]
pub fn render_scroll_picker<V: PartialEq + Clone + Debug>(
    frame: &mut Frame,
    area: Rect,
    picker: &ScrollPicker<V>,
    title: &str,
    focused: bool,
    target: PickerTarget,
    registry: &mut InteractionRegistry,
    priority: i32,
) {
    let border_color = if focused { ACCENT_LIGHT_BLUE } else { TEXT_FAINT };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(border_color))
        .title(Span::styled(
            format!(" {} ", title),
            if focused {
                Style::new().fg(TEXT_WHITE).bold()
            } else {
                Style::new().fg(TEXT_DIM)
            },
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let rows = picker.visible_rows();
    let center = picker.options().padding();
    let shown = rows.len().min(inner.height as usize);

    if center < shown {
        let band = Rect::new(inner.x, inner.y + center as u16, inner.width, 1);
        frame.render_widget(Block::default().style(Style::new().bg(SELECTION_BAND)), band);
    }

    let selected = picker.value();
    let mut lines: Vec<Line> = Vec::with_capacity(shown);

    for (row, slot) in rows.iter().take(shown).enumerate() {
        let y = inner.y + row as u16;

        // Padding rows carry no item but still start a drag
        registry.register_click(
            "picker_row",
            ClickRegion::new(inner.x, y, inner.width, 1),
            Action::Press {
                target,
                row: y,
                item: *slot,
            },
            priority,
        );

        let Some(index) = *slot else {
            lines.push(Line::raw(""));
            continue;
        };
        let item = &picker.items()[index];
        let distance = row.abs_diff(center);
        let is_selected = selected == Some(&item.value);

        let style = if item.disabled {
            Style::new()
                .fg(TEXT_FAINT)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if is_selected {
            Style::new().fg(ACCENT_MINT).bold()
        } else {
            Style::new().fg(fade(distance))
        };
        lines.push(Line::from(Span::styled(item.label.as_str(), style)));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);

    registry.register_scroll(
        "picker_column",
        area.into(),
        Action::Wheel {
            target,
            notches: -1.0,
        },
        Action::Wheel {
            target,
            notches: 1.0,
        },
        priority,
    );
}
