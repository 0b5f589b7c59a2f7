//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the highest-priority region under the pointer.
//!
//! # Example
//!
//! ```ignore
//! registry.register(
//!     InteractiveRegion::clickable("ok", ClickRegion::new(x, y, 4, 1), Action::SubmitDateInput)
//!         .with_priority(POPUP_PRIORITY),
//! );
//! ```

use ratatui::layout::Rect;

use crate::events::Action;

/// Rectangular screen area in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for debugging/logging
    pub id: &'static str,

    pub bounds: ClickRegion,

    /// Action to dispatch on left button down (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    /// Create a new scrollable region
    pub fn scrollable(
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: Action,
        scroll_down: Action,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register a clickable region with a priority
    pub fn register_click(
        &mut self,
        id: &'static str,
        bounds: ClickRegion,
        action: Action,
        priority: i32,
    ) {
        self.register(InteractiveRegion::clickable(id, bounds, action).with_priority(priority));
    }

    /// Register a scrollable region with a priority
    pub fn register_scroll(
        &mut self,
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: Action,
        scroll_down: Action,
        priority: i32,
    ) {
        self.register(
            InteractiveRegion::scrollable(id, bounds, scroll_up, scroll_down)
                .with_priority(priority),
        );
    }

    /// Action of the highest-priority region under (x, y) that has a handler.
    ///
    /// Later registrations win ties, so a component drawn on top of another
    /// at the same priority also receives its events.
    fn dispatch(
        &self,
        x: u16,
        y: u16,
        handler: impl Fn(&InteractiveRegion) -> Option<&Action>,
    ) -> Action {
        self.regions
            .iter()
            .enumerate()
            .filter(|(_, r)| r.contains(x, y))
            .filter_map(|(i, r)| handler(r).map(|action| (r.priority, i, action)))
            .max_by_key(|(priority, i, _)| (*priority, *i))
            .map(|(_, _, action)| action.clone())
            .unwrap_or(Action::None)
    }

    /// Find the action to dispatch for a click at (x, y)
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.dispatch(x, y, |r| r.on_click.as_ref())
    }

    /// Find the action to dispatch for a scroll up at (x, y)
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.dispatch(x, y, |r| r.on_scroll_up.as_ref())
    }

    /// Find the action to dispatch for a scroll down at (x, y)
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.dispatch(x, y, |r| r.on_scroll_down.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::InputField;

    #[test]
    fn test_region_contains() {
        let region =
            InteractiveRegion::clickable("test", ClickRegion::new(10, 10, 20, 10), Action::None);

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();

        registry.register_click(
            "backdrop",
            ClickRegion::new(0, 0, 100, 100),
            Action::CancelDateInput,
            50,
        );
        registry.register_click(
            "popup",
            ClickRegion::new(20, 20, 60, 60),
            Action::SubmitDateInput,
            100,
        );

        assert_eq!(registry.handle_click(50, 50), Action::SubmitDateInput);
        assert_eq!(registry.handle_click(5, 5), Action::CancelDateInput);
        assert_eq!(registry.handle_click(200, 5), Action::None);
    }

    #[test]
    fn test_later_region_wins_tie() {
        let mut registry = InteractionRegistry::new();
        let field = ClickRegion::new(0, 0, 30, 1);
        let clear = ClickRegion::new(26, 0, 3, 1);

        registry.register_click("field", field, Action::OpenDateInput(InputField::Dialog), 0);
        registry.register_click("clear", clear, Action::ClearDateInput(InputField::Dialog), 0);

        assert_eq!(
            registry.handle_click(27, 0),
            Action::ClearDateInput(InputField::Dialog)
        );
        assert_eq!(
            registry.handle_click(3, 0),
            Action::OpenDateInput(InputField::Dialog)
        );
    }

    #[test]
    fn test_scroll_ignores_click_only_regions() {
        let mut registry = InteractionRegistry::new();
        let area = ClickRegion::new(0, 0, 10, 10);
        registry.register_click("row", area, Action::Release, 10);
        registry.register_scroll("column", area, Action::FocusPrev, Action::FocusNext, 0);

        assert_eq!(registry.handle_scroll_down(1, 1), Action::FocusNext);
        assert_eq!(registry.handle_click(1, 1), Action::Release);
    }
}
