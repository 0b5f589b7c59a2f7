//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents; `App::dispatch` applies them.

use crate::app::{InputField, Panel, PickerTarget};

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No action needed
    None,

    // === Application ===
    /// Quit the application
    Quit,

    // === Focus ===
    /// Focus the next panel
    FocusNext,
    /// Focus the previous panel
    FocusPrev,
    /// Focus a specific panel
    Focus(Panel),
    /// Move to the next date column
    ColumnNext,
    /// Move to the previous date column
    ColumnPrev,

    // === Keyboard selection ===
    /// Select the next enabled item of the focused column
    SelectNext,
    /// Select the previous enabled item of the focused column
    SelectPrev,
    /// Select the first enabled item
    SelectFirst,
    /// Select the last enabled item
    SelectLast,

    // === Pointer ===
    /// Wheel over a picker column; positive notches scroll down the list
    Wheel { target: PickerTarget, notches: f64 },
    /// Button went down on a picker row
    Press {
        target: PickerTarget,
        row: u16,
        item: Option<usize>,
    },
    /// Pointer moved with the button held
    Drag { row: u16 },
    /// Button released
    Release,

    // === Date input ===
    /// Open the draft picker of a date input
    OpenDateInput(InputField),
    /// Close the open draft without changing the value
    CancelDateInput,
    /// Take the open draft's date as the value
    SubmitDateInput,
    /// Empty a date input
    ClearDateInput(InputField),
}
