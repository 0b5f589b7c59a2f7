//! Scroll picker module
//!
//! Items, the offset-to-value resolution, the stepping trait and the
//! [`ScrollPicker`] state machine that ties them together.

mod item;
mod resolve;
mod scroll_picker;
mod traits;

pub use item::{ScrollItem, position_of};
pub use resolve::{index_at_offset, item_at_offset, offset_for_index, resolve_selectable_value};
pub use scroll_picker::{PickerOptions, ScrollPicker, SettleOutcome};
pub use traits::Picker;
