//! Picker trait definition
//!
//! Keyboard-style stepping over a list of [`ScrollItem`]s that skips
//! disabled items.

use super::item::ScrollItem;

/// A list picker that can be stepped through item by item.
///
/// Implementors provide the items, the selected index and a way to commit a
/// new index; the default methods handle stepping over disabled items.
/// Stepping does not wrap around.
///
/// # Example
///
/// ```ignore
/// struct MyPicker {
///     items: Vec<ScrollItem<u32>>,
///     selected: Option<usize>,
/// }
///
/// impl Picker for MyPicker {
///     type Value = u32;
///
///     fn items(&self) -> &[ScrollItem<u32>] {
///         &self.items
///     }
///
///     fn selected_index(&self) -> Option<usize> {
///         self.selected
///     }
///
///     fn commit_index(&mut self, index: usize) -> Option<u32> {
///         self.selected = Some(index);
///         Some(self.items[index].value)
///     }
/// }
/// ```
pub trait Picker {
    /// The type of values in the picker
    type Value;

    /// Get the list of items
    fn items(&self) -> &[ScrollItem<Self::Value>];

    /// Get the index of the selected value, if it is in the list
    fn selected_index(&self) -> Option<usize>;

    /// Make the item at `index` the selection.
    ///
    /// Returns the new value when the selection changed.
    fn commit_index(&mut self, index: usize) -> Option<Self::Value>;

    /// Get the number of items
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Check if the picker is empty
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Get the currently selected item
    fn selected_item(&self) -> Option<&ScrollItem<Self::Value>> {
        self.selected_index().and_then(|i| self.items().get(i))
    }

    /// First enabled index
    fn first_enabled(&self) -> Option<usize> {
        self.items().iter().position(ScrollItem::is_enabled)
    }

    /// Last enabled index
    fn last_enabled(&self) -> Option<usize> {
        self.items().iter().rposition(ScrollItem::is_enabled)
    }

    /// Select the next enabled item
    ///
    /// With nothing selected this picks the first enabled item.
    fn select_next(&mut self) -> Option<Self::Value> {
        let target = match self.selected_index() {
            Some(current) => self
                .items()
                .iter()
                .enumerate()
                .skip(current + 1)
                .find(|(_, item)| item.is_enabled())
                .map(|(i, _)| i),
            None => self.first_enabled(),
        }?;
        self.commit_index(target)
    }

    /// Select the previous enabled item
    ///
    /// With nothing selected this picks the last enabled item.
    fn select_prev(&mut self) -> Option<Self::Value> {
        let target = match self.selected_index() {
            Some(current) => self.items()[..current.min(self.len())]
                .iter()
                .rposition(ScrollItem::is_enabled),
            None => self.last_enabled(),
        }?;
        self.commit_index(target)
    }

    /// Select the first enabled item
    fn select_first(&mut self) -> Option<Self::Value> {
        let target = self.first_enabled()?;
        self.commit_index(target)
    }

    /// Select the last enabled item
    fn select_last(&mut self) -> Option<Self::Value> {
        let target = self.last_enabled()?;
        self.commit_index(target)
    }
}
