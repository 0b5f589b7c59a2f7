//! UI components module.
//!
//! # Component Organization
//!
//! - `scroll_picker` - One picker column with its selection band
//! - `date_picker` - Year, month and day columns side by side
//! - `date_input` - Nullable date field and its draft popup
//! - `status_bar` - Hotkeys and the last change

mod date_input;
mod date_picker;
mod scroll_picker;
mod status_bar;

pub use date_input::{render_date_input_field, render_date_input_popup};
pub use date_picker::{DATE_PICKER_WIDTH, render_date_picker};
pub use scroll_picker::render_scroll_picker;
pub use status_bar::{render_hotkeys, render_status};
