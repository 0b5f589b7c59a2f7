//! Scroll position tracking for pickers.
//!
//! Holds the continuous offset of a picker's list the way a scroll container
//! would: wheel deltas and drags move it, it is clamped to the scrollable
//! extent, and programmatic scrolls either jump or glide toward a target.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut tracker = ScrollTracker::new(36.0 * 9.0);
//!
//! // Wheel notch
//! tracker.scroll_by(36.0);
//!
//! // Drag with the pointer
//! tracker.begin_drag(10);
//! tracker.drag_to(8, 36.0);
//! tracker.end_drag();
//! ```

/// Fraction of the remaining distance covered per animation frame
const ANIMATION_EASE: f64 = 0.35;

/// Distance below which an animation snaps onto its target
const ANIMATION_SNAP: f64 = 0.5;

/// Pointer position and offset captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStart {
    pub row: u16,
    pub offset: f64,
}

/// Result of ending a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEnd {
    pub start: DragStart,
    /// Whether the pointer moved between press and release
    pub moved: bool,
}

/// Continuous scroll offset with clamping, drag and animation state.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    /// Current offset from the top of the list
    offset: f64,
    /// Largest reachable offset
    max_offset: f64,
    /// Active drag, if the pointer is down
    drag: Option<DragStart>,
    /// Whether the active drag has moved
    drag_moved: bool,
    /// Target of a running animation
    animation_target: Option<f64>,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ScrollTracker {
    pub fn new(max_offset: f64) -> Self {
        Self {
            offset: 0.0,
            max_offset: max_offset.max(0.0),
            drag: None,
            drag_moved: false,
            animation_target: None,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    /// Change the scrollable extent, pulling the offset back inside it.
    pub fn set_max_offset(&mut self, max_offset: f64) {
        self.max_offset = max_offset.max(0.0);
        self.offset = self.clamp(self.offset);
        if let Some(target) = self.animation_target {
            self.animation_target = Some(self.clamp(target));
        }
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_offset)
    }

    /// Move by a relative amount (wheel input). Stops any animation.
    pub fn scroll_by(&mut self, delta: f64) {
        self.animation_target = None;
        self.offset = self.clamp(self.offset + delta);
    }

    /// Jump straight to an offset. Stops any animation.
    pub fn jump_to(&mut self, offset: f64) {
        self.animation_target = None;
        self.offset = self.clamp(offset);
    }

    /// Glide toward an offset over the next animation frames.
    pub fn animate_to(&mut self, offset: f64) {
        let target = self.clamp(offset);
        if (target - self.offset).abs() < ANIMATION_SNAP {
            self.offset = target;
            self.animation_target = None;
        } else {
            self.animation_target = Some(target);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation_target.is_some()
    }

    /// Advance a running animation by one frame.
    ///
    /// Returns `true` while the animation is still running.
    pub fn step_animation(&mut self) -> bool {
        let Some(target) = self.animation_target else {
            return false;
        };

        let remaining = target - self.offset;
        if remaining.abs() < ANIMATION_SNAP {
            self.offset = target;
            self.animation_target = None;
            return false;
        }

        self.offset += remaining * ANIMATION_EASE;
        true
    }

    /// Start a drag at a pointer row. Stops any animation.
    pub fn begin_drag(&mut self, row: u16) {
        self.animation_target = None;
        self.drag = Some(DragStart {
            row,
            offset: self.offset,
        });
        self.drag_moved = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Follow the pointer: moving up by one row scrolls down by one item.
    pub fn drag_to(&mut self, row: u16, item_height: f64) {
        let Some(start) = self.drag else {
            return;
        };
        if row != start.row {
            self.drag_moved = true;
        }
        let diff = f64::from(start.row) - f64::from(row);
        self.offset = self.clamp(start.offset + diff * item_height);
    }

    /// Release the pointer.
    pub fn end_drag(&mut self) -> Option<DragEnd> {
        let start = self.drag.take()?;
        let moved = std::mem::take(&mut self.drag_moved);
        Some(DragEnd { start, moved })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_by_clamps() {
        let mut tracker = ScrollTracker::new(100.0);

        tracker.scroll_by(40.0);
        assert_eq!(tracker.offset(), 40.0);

        tracker.scroll_by(500.0);
        assert_eq!(tracker.offset(), 100.0);

        tracker.scroll_by(-500.0);
        assert_eq!(tracker.offset(), 0.0);
    }

    #[test]
    fn test_shrinking_extent_pulls_offset_back() {
        let mut tracker = ScrollTracker::new(100.0);
        tracker.jump_to(90.0);
        tracker.set_max_offset(50.0);
        assert_eq!(tracker.offset(), 50.0);
    }

    #[test]
    fn test_animation_converges() {
        let mut tracker = ScrollTracker::new(360.0);
        tracker.animate_to(180.0);
        assert!(tracker.is_animating());

        let mut frames = 0;
        while tracker.step_animation() {
            frames += 1;
            assert!(frames < 100, "animation did not converge");
        }
        assert_eq!(tracker.offset(), 180.0);
        assert!(!tracker.is_animating());
    }

    #[test]
    fn test_wheel_interrupts_animation() {
        let mut tracker = ScrollTracker::new(360.0);
        tracker.animate_to(180.0);
        tracker.step_animation();
        tracker.scroll_by(1.0);
        assert!(!tracker.is_animating());
    }

    #[test]
    fn test_drag_follows_pointer() {
        let mut tracker = ScrollTracker::new(360.0);
        tracker.jump_to(72.0);

        tracker.begin_drag(10);
        tracker.drag_to(8, 36.0);
        assert_eq!(tracker.offset(), 144.0);

        tracker.drag_to(11, 36.0);
        assert_eq!(tracker.offset(), 36.0);

        let end = tracker.end_drag().unwrap();
        assert!(end.moved);
        assert_eq!(end.start.offset, 72.0);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_drag_without_movement() {
        let mut tracker = ScrollTracker::new(360.0);
        tracker.begin_drag(4);
        tracker.drag_to(4, 36.0);
        let end = tracker.end_drag().unwrap();
        assert!(!end.moved);
        assert!(tracker.end_drag().is_none());
    }
}
