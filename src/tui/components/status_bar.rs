//! Hotkey line and last-change message.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::tui::theme::*;

fn hotkey<'a>(key: &'a str, label: &'a str) -> [Span<'a>; 2] {
    [
        Span::styled(key, Style::new().fg(TEXT_WHITE)),
        Span::styled(label, Style::new().fg(TEXT_DIM)),
    ]
}

pub fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let keys: Vec<[Span; 2]> = if app.open_input().is_some() {
        vec![
            hotkey("[j/k]", " pick · "),
            hotkey("[h/l]", " column · "),
            hotkey("[Enter]", " ok · "),
            hotkey("[Esc]", " cancel"),
        ]
    } else {
        vec![
            hotkey("[Tab]", " focus · "),
            hotkey("[j/k]", " pick · "),
            hotkey("[h/l]", " column · "),
            hotkey("[Enter]", " open · "),
            hotkey("[d]", "ate · "),
            hotkey("[x]", " clear · "),
            hotkey("[q]", "uit"),
        ]
    };
    let line = Line::from(keys.into_iter().flatten().collect::<Vec<_>>());
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = if app.status.is_empty() {
        Line::raw("")
    } else {
        Line::from(vec![
            Span::styled("● ", Style::new().fg(ACCENT_MINT)),
            Span::styled(app.status.as_str(), Style::new().fg(TEXT_SOFT)),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}
