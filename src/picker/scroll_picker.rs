//! The scroll picker state machine.
//!
//! A [`ScrollPicker`] owns the transient scroll state of one picker column:
//! the continuous offset, the pending settle and the pointer drag. Input
//! methods move the offset; a settle snaps it back onto an item and reports a
//! changed value at most once.

use std::fmt::Debug;
use std::time::{Duration, Instant};

use crate::config::{DEFAULT_ITEM_HEIGHT, DEFAULT_SETTLE_MS, DEFAULT_VISIBLE_ITEMS};
use crate::log;
use crate::scroll::ScrollTracker;
use crate::settle::SettleTimer;

use super::item::{ScrollItem, position_of};
use super::resolve::{index_at_offset, offset_for_index, resolve_selectable_value};
use super::traits::Picker;

/// Geometry and timing shared by pickers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerOptions {
    /// Height of one item, in scroll units
    pub item_height: f64,
    /// Rows shown at once; the middle one is the selection line
    pub visible_items: usize,
    /// Quiet period after wheel input before settling
    pub settle_delay: Duration,
    /// Scroll distance of one wheel notch
    pub wheel_step: f64,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            item_height: DEFAULT_ITEM_HEIGHT,
            visible_items: DEFAULT_VISIBLE_ITEMS,
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_MS),
            wheel_step: DEFAULT_ITEM_HEIGHT,
        }
    }
}

impl PickerOptions {
    /// Blank rows above the first item (and below the last) so both ends
    /// can reach the selection line.
    pub fn padding(&self) -> usize {
        self.visible_items / 2
    }
}

/// What a settle did.
#[derive(Debug, Clone, PartialEq)]
pub enum SettleOutcome<V> {
    /// A different value was selected
    Changed(V),
    /// The current value was kept and the list scrolled back onto it
    Recentered,
    /// Nothing could be resolved; the picker was left alone
    Unresolved,
}

impl<V> SettleOutcome<V> {
    pub fn changed(self) -> Option<V> {
        match self {
            SettleOutcome::Changed(value) => Some(value),
            _ => None,
        }
    }
}

/// A single scrollable picker column.
#[derive(Debug, Clone)]
pub struct ScrollPicker<V> {
    /// Name used in log lines
    name: String,
    items: Vec<ScrollItem<V>>,
    /// Selected value, mirrored from the owner
    value: Option<V>,
    options: PickerOptions,
    tracker: ScrollTracker,
    settle: SettleTimer,
    /// Item under the pointer when it went down
    pressed_item: Option<usize>,
}

impl<V: PartialEq + Clone + Debug> ScrollPicker<V> {
    /// Create a picker positioned on `value` without animation.
    pub fn new(items: Vec<ScrollItem<V>>, value: Option<V>, options: PickerOptions) -> Self {
        let mut picker = Self {
            name: "picker".to_string(),
            items,
            value,
            options,
            tracker: ScrollTracker::default(),
            settle: SettleTimer::new(options.settle_delay),
            pressed_item: None,
        };
        picker.tracker.set_max_offset(picker.max_offset());
        if let Some(index) = picker.selected_index() {
            picker.tracker.jump_to(offset_for_index(index, options.item_height));
        }
        picker
    }

    /// Set the name used in log lines (for builder pattern)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn offset(&self) -> f64 {
        self.tracker.offset()
    }

    pub fn is_animating(&self) -> bool {
        self.tracker.is_animating()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// When the pending settle is due
    pub fn settle_deadline(&self) -> Option<Instant> {
        self.settle.deadline()
    }

    fn max_offset(&self) -> f64 {
        offset_for_index(self.items.len().saturating_sub(1), self.options.item_height)
    }

    /// Item index on the selection line
    pub fn center_index(&self) -> Option<usize> {
        index_at_offset(self.tracker.offset(), self.options.item_height)
            .filter(|&index| index < self.items.len())
    }

    /// Item index shown on each visible row, top to bottom.
    ///
    /// Padding rows above the first and below the last item are `None`.
    pub fn visible_rows(&self) -> Vec<Option<usize>> {
        let center = index_at_offset(self.tracker.offset(), self.options.item_height).unwrap_or(0);
        let padding = self.options.padding();
        (0..self.options.visible_items)
            .map(|row| {
                (center + row)
                    .checked_sub(padding)
                    .filter(|&index| index < self.items.len())
            })
            .collect()
    }

    /// Replace the items, keeping the selection centered.
    pub fn set_items(&mut self, items: Vec<ScrollItem<V>>) {
        self.items = items;
        self.tracker.set_max_offset(self.max_offset());
        self.center_on_value();
    }

    /// Mirror a value chosen by the owner and glide onto it.
    pub fn set_value(&mut self, value: Option<V>) {
        if self.value == value {
            return;
        }
        self.value = value;
        self.center_on_value();
    }

    /// Scroll to the item holding `value`.
    ///
    /// Returns `false` (and leaves the offset alone) if no item holds it.
    pub fn scroll_to_value(&mut self, value: &V, animate: bool) -> bool {
        let Some(index) = position_of(&self.items, value) else {
            return false;
        };
        let target = offset_for_index(index, self.options.item_height);
        if animate {
            self.tracker.animate_to(target);
        } else {
            self.tracker.jump_to(target);
        }
        true
    }

    fn center_on_value(&mut self) {
        if let Some(value) = self.value.clone() {
            self.scroll_to_value(&value, true);
        }
    }

    /// Wheel input, in notches. Re-arms the settle timer.
    pub fn wheel(&mut self, notches: f64, now: Instant) {
        if self.items.is_empty() {
            return;
        }
        self.tracker.scroll_by(notches * self.options.wheel_step);
        self.settle.schedule(now);
    }

    /// Pointer down on a row, optionally over an item.
    pub fn press(&mut self, row: u16, item: Option<usize>) {
        self.settle.cancel();
        self.tracker.begin_drag(row);
        self.pressed_item = item;
    }

    /// Pointer moved while down.
    pub fn drag(&mut self, row: u16) {
        self.tracker.drag_to(row, self.options.item_height);
    }

    /// Pointer up.
    ///
    /// A drag settles immediately. A press without movement is a click: an
    /// enabled item wins over whatever sits on the selection line, and
    /// clicking the current value only recenters it. Clicks on padding rows
    /// or disabled items settle the offset instead so the list never rests
    /// between items.
    pub fn release(&mut self) -> Option<V> {
        let pressed = self.pressed_item.take();
        let end = self.tracker.end_drag()?;

        if end.moved {
            return self.settle().changed();
        }

        let clicked =
            pressed.filter(|&index| self.items.get(index).is_some_and(|item| item.is_enabled()));
        match clicked {
            Some(index) => self.commit_index(index),
            None => self.settle().changed(),
        }
    }

    /// Select the item at `index` directly. Disabled items ignore clicks.
    pub fn click(&mut self, index: usize) -> Option<V> {
        let item = self.items.get(index)?;
        if item.disabled {
            return None;
        }
        self.commit_index(index)
    }

    /// Advance animation and fire a due settle.
    pub fn tick(&mut self, now: Instant) -> Option<V> {
        self.tracker.step_animation();
        if self.tracker.is_dragging() {
            return None;
        }
        if self.settle.fire(now) {
            return self.settle().changed();
        }
        None
    }

    /// Snap the current offset onto an item.
    pub fn settle(&mut self) -> SettleOutcome<V> {
        self.settle.cancel();

        let resolved = index_at_offset(self.tracker.offset(), self.options.item_height)
            .and_then(|index| resolve_selectable_value(&self.items, self.value.as_ref(), index));

        let Some(resolved) = resolved else {
            log::log_settle(&self.name, "unresolved");
            return SettleOutcome::Unresolved;
        };

        if self.value.as_ref() == Some(&resolved) {
            log::log_settle(&self.name, "same value, recentering");
            self.center_on_value();
            return SettleOutcome::Recentered;
        }

        log::log_settle(&self.name, &format!("changed to {:?}", resolved));
        self.value = Some(resolved.clone());
        self.center_on_value();
        SettleOutcome::Changed(resolved)
    }
}

impl<V: PartialEq + Clone + Debug> Picker for ScrollPicker<V> {
    type Value = V;

    fn items(&self) -> &[ScrollItem<V>] {
        &self.items
    }

    fn selected_index(&self) -> Option<usize> {
        self.value.as_ref().and_then(|v| position_of(&self.items, v))
    }

    fn commit_index(&mut self, index: usize) -> Option<V> {
        let value = self.items.get(index)?.value.clone();
        self.settle.cancel();

        if self.value.as_ref() == Some(&value) {
            self.center_on_value();
            return None;
        }

        log::log(&format!("{}: selected {:?}", self.name, value));
        self.value = Some(value.clone());
        self.center_on_value();
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f64 = 36.0;

    /// Items `0..flags.len()` where `true` marks an enabled item
    fn picker(flags: &[bool], value: Option<usize>) -> ScrollPicker<usize> {
        let items = flags
            .iter()
            .enumerate()
            .map(|(i, enabled)| ScrollItem::new(i, format!("Item {}", i)).with_disabled(!enabled))
            .collect();
        ScrollPicker::new(items, value, PickerOptions::default())
    }

    fn finish_animation(p: &mut ScrollPicker<usize>, now: Instant) {
        let mut frames = 0;
        while p.is_animating() {
            p.tick(now);
            frames += 1;
            assert!(frames < 200);
        }
    }

    #[test]
    fn test_new_positions_without_animation() {
        let p = picker(&[true; 10], Some(3));
        assert_eq!(p.offset(), 3.0 * H);
        assert!(!p.is_animating());
        assert_eq!(p.center_index(), Some(3));
    }

    #[test]
    fn test_visible_rows_include_padding() {
        let p = picker(&[true; 10], Some(0));
        assert_eq!(p.visible_rows(), vec![None, None, Some(0), Some(1), Some(2)]);

        let p = picker(&[true; 10], Some(9));
        assert_eq!(p.visible_rows(), vec![Some(7), Some(8), Some(9), None, None]);
    }

    #[test]
    fn test_wheel_settles_after_quiet_period() {
        let mut p = picker(&[true; 10], Some(3));
        let start = Instant::now();

        p.wheel(1.0, start);
        p.wheel(1.0, start + Duration::from_millis(60));
        assert_eq!(p.tick(start + Duration::from_millis(120)), None);

        assert_eq!(p.tick(start + Duration::from_millis(160)), Some(5));
        assert_eq!(p.value(), Some(&5));
        assert!(p.settle_deadline().is_none());
    }

    #[test]
    fn test_settle_twice_notifies_once() {
        let mut p = picker(&[true; 10], Some(3));
        p.wheel(0.9, Instant::now());

        assert_eq!(p.settle(), SettleOutcome::Changed(4));
        assert_eq!(p.settle(), SettleOutcome::Recentered);
        assert_eq!(p.value(), Some(&4));
    }

    #[test]
    fn test_same_value_recenters() {
        let mut p = picker(&[true; 10], Some(3));
        let now = Instant::now();

        p.wheel(0.3, now);
        assert!((p.offset() - 118.8).abs() < 1e-9);
        assert_eq!(p.settle(), SettleOutcome::Recentered);

        finish_animation(&mut p, now);
        assert_eq!(p.offset(), 3.0 * H);
    }

    #[test]
    fn test_disabled_landing_moves_to_neighbour() {
        // [E0, D1, D2, E3]
        let mut p = picker(&[true, false, false, true], Some(0));
        let now = Instant::now();

        p.wheel(2.0, now);
        assert_eq!(p.settle(), SettleOutcome::Changed(3));

        finish_animation(&mut p, now);
        assert_eq!(p.offset(), 3.0 * H);
        assert_eq!(p.center_index(), Some(3));
    }

    #[test]
    fn test_all_disabled_is_inert() {
        let mut p = picker(&[false, false], Some(0));
        p.wheel(1.0, Instant::now());
        assert_eq!(p.settle(), SettleOutcome::Unresolved);
        assert_eq!(p.value(), Some(&0));
    }

    #[test]
    fn test_no_selection_disabled_landing_is_unresolved() {
        let mut p = picker(&[true, false, true], None);
        p.wheel(1.0, Instant::now());
        assert_eq!(p.settle(), SettleOutcome::Unresolved);
        assert!(p.value().is_none());
    }

    #[test]
    fn test_drag_settles_on_release() {
        let mut p = picker(&[true; 10], Some(2));
        let now = Instant::now();

        p.press(10, Some(2));
        p.drag(9);
        p.drag(7);
        assert_eq!(p.offset(), 5.0 * H);
        assert_eq!(p.release(), Some(5));
        assert!(!p.is_dragging());
        assert_eq!(p.tick(now), None);
    }

    #[test]
    fn test_press_cancels_pending_settle() {
        let mut p = picker(&[true; 10], Some(2));
        let start = Instant::now();

        p.wheel(1.0, start);
        p.press(4, None);
        assert!(p.settle_deadline().is_none());
        assert_eq!(p.tick(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_click_selects_enabled_item() {
        let mut p = picker(&[true, false, true, true], Some(0));

        p.press(3, Some(3));
        assert_eq!(p.release(), Some(3));
        assert_eq!(p.value(), Some(&3));
    }

    #[test]
    fn test_click_current_value_after_wheel_keeps_it() {
        let mut p = picker(&[true; 10], Some(3));
        let now = Instant::now();

        // Item 5 sits on the selection line when item 3 is clicked
        p.wheel(2.0, now);
        p.press(5, Some(3));
        assert_eq!(p.release(), None);
        assert_eq!(p.value(), Some(&3));
        assert!(p.settle_deadline().is_none());

        finish_animation(&mut p, now);
        assert_eq!(p.offset(), 3.0 * H);
    }

    #[test]
    fn test_click_current_value_during_animation_keeps_it() {
        let mut p = picker(&[true; 10], Some(0));
        let now = Instant::now();

        p.set_value(Some(8));
        p.tick(now);
        p.tick(now);
        assert!(p.is_animating());

        p.press(5, Some(8));
        assert_eq!(p.release(), None);
        assert_eq!(p.value(), Some(&8));

        finish_animation(&mut p, now);
        assert_eq!(p.offset(), 8.0 * H);
    }

    #[test]
    fn test_click_on_padding_row_settles() {
        let mut p = picker(&[true; 10], Some(3));

        p.wheel(0.9, Instant::now());
        p.press(2, None);
        assert_eq!(p.release(), Some(4));
    }

    #[test]
    fn test_click_ignores_disabled_item() {
        let mut p = picker(&[true, false, true], Some(0));

        p.press(3, Some(1));
        assert_eq!(p.release(), None);
        assert_eq!(p.value(), Some(&0));
        assert_eq!(p.click(1), None);
    }

    #[test]
    fn test_set_value_animates() {
        let mut p = picker(&[true; 10], Some(0));
        p.set_value(Some(6));
        assert!(p.is_animating());

        finish_animation(&mut p, Instant::now());
        assert_eq!(p.offset(), 6.0 * H);
    }

    #[test]
    fn test_scroll_to_unknown_value_is_ignored() {
        let mut p = picker(&[true; 4], Some(1));
        assert!(!p.scroll_to_value(&42, false));
        assert_eq!(p.offset(), H);
    }

    #[test]
    fn test_set_items_shrinks_extent() {
        let mut p = picker(&[true; 10], Some(8));
        p.set_items((0..5).map(|i| ScrollItem::new(i, i.to_string())).collect());
        assert!(p.offset() <= 4.0 * H);
    }

    #[test]
    fn test_keyboard_steps_skip_disabled() {
        let mut p = picker(&[true, false, false, true, true], Some(0));
        assert_eq!(p.select_next(), Some(3));
        assert_eq!(p.select_prev(), Some(0));
        assert_eq!(p.select_last(), Some(4));
    }
}
