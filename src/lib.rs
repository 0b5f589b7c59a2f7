//! Scroll-wheel item pickers for the terminal.
//!
//! A [`picker::ScrollPicker`] shows a vertical list with one centered
//! selection line. Wheel, drag and click input move the list; once input
//! stops the list settles on the nearest enabled item. The [`date`] module
//! composes three pickers into a date picker and a nullable date input.

pub mod app;
pub mod config;
pub mod date;
pub mod error;
pub mod events;
pub mod log;
pub mod picker;
pub mod scroll;
pub mod settle;
pub mod tui;
