//! Mouse event handling.
//!
//! Clicks and wheel events are dispatched through the interaction registry,
//! which is populated by UI components during each render. Drag and release
//! go to whichever picker column the button went down on.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => app.interactions.handle_scroll_up(x, y),
        MouseEventKind::ScrollDown => app.interactions.handle_scroll_down(x, y),
        MouseEventKind::Down(MouseButton::Left) => app.interactions.handle_click(x, y),
        MouseEventKind::Drag(MouseButton::Left) if app.drag_target.is_some() => {
            Action::Drag { row: y }
        }
        MouseEventKind::Up(MouseButton::Left) if app.drag_target.is_some() => Action::Release,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::app::PickerTarget;
    use crate::config::Config;
    use crate::tui::interaction::{ClickRegion, InteractiveRegion};

    fn app() -> App {
        App::new(&Config::default(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()).unwrap()
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_wheel_goes_through_registry() {
        let mut app = app();
        let wheel = |notches| Action::Wheel {
            target: PickerTarget::Numbers,
            notches,
        };
        app.interactions.register(InteractiveRegion::scrollable(
            "numbers",
            ClickRegion::new(0, 0, 10, 5),
            wheel(-1.0),
            wheel(1.0),
        ));

        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::ScrollDown, 2, 2)),
            wheel(1.0)
        );
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::ScrollUp, 20, 2)),
            Action::None
        );
    }

    #[test]
    fn test_drag_needs_a_press_first() {
        let mut app = app();
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 2, 4);
        assert_eq!(handle_mouse_event(&app, drag), Action::None);

        app.drag_target = Some(PickerTarget::Numbers);
        assert_eq!(handle_mouse_event(&app, drag), Action::Drag { row: 4 });
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::Up(MouseButton::Left), 2, 4)),
            Action::Release
        );
    }
}
