//! Scroll offset to value resolution.
//!
//! Two pure functions do all the work behind a settle:
//! [`index_at_offset`] snaps a continuous offset onto an item index, and
//! [`resolve_selectable_value`] turns that index into a value the picker may
//! select, walking to the nearest enabled neighbour when the index lands on a
//! disabled item.

use super::item::{ScrollItem, position_of};

/// Nearest item index for a scroll offset: `round(offset / item_height)`.
///
/// Returns `None` for negative results and for a non-positive item height.
/// The index is not bounds-checked against any list; see [`item_at_offset`].
pub fn index_at_offset(offset: f64, item_height: f64) -> Option<usize> {
    if !(item_height > 0.0) || !offset.is_finite() {
        return None;
    }
    let index = (offset / item_height).round();
    if index < 0.0 {
        return None;
    }
    Some(index as usize)
}

/// Offset that centers the item at `index`.
pub fn offset_for_index(index: usize, item_height: f64) -> f64 {
    index as f64 * item_height
}

/// Item under a scroll offset, if the mapped index is inside the list.
pub fn item_at_offset<V>(
    items: &[ScrollItem<V>],
    offset: f64,
    item_height: f64,
) -> Option<(usize, &ScrollItem<V>)> {
    let index = index_at_offset(offset, item_height)?;
    items.get(index).map(|item| (index, item))
}

/// Nearest enabled item strictly before `index`, as (distance, index).
fn nearest_enabled_above<V>(items: &[ScrollItem<V>], index: usize) -> Option<(usize, usize)> {
    items[..index]
        .iter()
        .rev()
        .position(ScrollItem::is_enabled)
        .map(|steps| (steps + 1, index - steps - 1))
}

/// Nearest enabled item strictly after `index`, as (distance, index).
fn nearest_enabled_below<V>(items: &[ScrollItem<V>], index: usize) -> Option<(usize, usize)> {
    items[index + 1..]
        .iter()
        .position(ScrollItem::is_enabled)
        .map(|steps| (steps + 1, index + steps + 1))
}

/// Value to select when a scroll comes to rest on `index`.
///
/// An enabled item resolves to itself. A disabled one resolves to the
/// closest enabled neighbour; on a tie the neighbour on the side of the
/// current value wins, so the list does not jump across the current
/// selection. Returns `None` (leave the selection alone) when the index is
/// out of range, the current value is not in the list, or every item is
/// disabled.
pub fn resolve_selectable_value<V: PartialEq + Clone>(
    items: &[ScrollItem<V>],
    current: Option<&V>,
    index: usize,
) -> Option<V> {
    let item = items.get(index)?;
    if item.is_enabled() {
        return Some(item.value.clone());
    }

    let current = current?;
    let current_index = position_of(items, current)?;
    if current_index == index {
        return Some(current.clone());
    }

    let top = nearest_enabled_above(items, index);
    let bottom = nearest_enabled_below(items, index);

    let chosen = match (top, bottom) {
        (None, None) => return None,
        (Some((_, i)), None) | (None, Some((_, i))) => i,
        (Some((top_dist, top_i)), Some((bottom_dist, bottom_i))) => {
            if top_dist < bottom_dist {
                top_i
            } else if bottom_dist < top_dist {
                bottom_i
            } else if current_index < index {
                top_i
            } else if current_index > index {
                bottom_i
            } else {
                return Some(current.clone());
            }
        }
    };

    Some(items[chosen].value.clone())
}
