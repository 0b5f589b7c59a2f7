//! Picker items.

/// One selectable row of a picker.
///
/// Values are compared with `PartialEq`; a picker's items must not contain
/// the same value twice.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollItem<V> {
    pub value: V,
    pub label: String,
    pub disabled: bool,
}

impl<V> ScrollItem<V> {
    /// Create an enabled item
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            disabled: false,
        }
    }

    /// Set the disabled flag (for builder pattern)
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }
}

/// Index of the item holding `value`
pub fn position_of<V: PartialEq>(items: &[ScrollItem<V>], value: &V) -> Option<usize> {
    items.iter().position(|item| item.value == *value)
}
