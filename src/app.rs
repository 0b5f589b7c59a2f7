//! Demo application state.
//!
//! Hosts the same set of pickers the library ships: two number pickers
//! sharing one value (the second with disabled items), a date picker and two
//! date inputs sharing one nullable date, one per picker UI.

use std::time::{Duration, Instant};

use chrono::NaiveDate;

use crate::config::Config;
use crate::date::{DateField, DateInput, DateScrollPicker, PickerUi};
use crate::error::Result;
use crate::events::Action;
use crate::log;
use crate::picker::{Picker, ScrollItem, ScrollPicker};
use crate::tui::interaction::InteractionRegistry;

/// How long the loop sleeps when nothing is pending
const IDLE_WAKEUP: Duration = Duration::from_millis(250);

const NUMBER_COUNT: u32 = 20;

/// A focusable area of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Numbers,
    FilteredNumbers,
    Date,
    DialogInput,
    PopoverInput,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::Numbers,
        Panel::FilteredNumbers,
        Panel::Date,
        Panel::DialogInput,
        Panel::PopoverInput,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which date input a field action refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Dialog,
    Popover,
}

impl InputField {
    pub fn panel(self) -> Panel {
        match self {
            InputField::Dialog => Panel::DialogInput,
            InputField::Popover => Panel::PopoverInput,
        }
    }
}

/// The picker column a pointer or wheel event is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTarget {
    Numbers,
    FilteredNumbers,
    Date(DateField),
    /// A column of the open date input draft
    Draft(DateField),
}

fn number_items(with_disabled: bool) -> Vec<ScrollItem<u32>> {
    (0..NUMBER_COUNT)
        .map(|i| {
            let disabled = with_disabled && (i % 2 == 0 || i % 3 == 0);
            let label = if disabled {
                format!("Item {} (disabled)", i)
            } else {
                format!("Item {}", i)
            };
            ScrollItem::new(i, label).with_disabled(disabled)
        })
        .collect()
}

pub struct App {
    /// Value shared by both number pickers
    pub number: Option<u32>,
    pub numbers: ScrollPicker<u32>,
    pub filtered_numbers: ScrollPicker<u32>,

    /// Value of the standalone date picker
    pub picker_date: NaiveDate,
    pub date_picker: DateScrollPicker,

    /// Value shared by both date inputs
    pub current_date: Option<NaiveDate>,
    pub dialog_input: DateInput,
    pub popover_input: DateInput,

    pub focus: Panel,
    /// Input opened by the global shortcut, from the configured picker UI
    pub preferred_input: InputField,
    /// Column the pointer went down on
    pub drag_target: Option<PickerTarget>,
    /// Last change, shown in the status bar
    pub status: String,
    /// Mouse regions from the last render
    pub interactions: InteractionRegistry,
    pub should_quit: bool,
    frame_interval: Duration,
}

impl App {
    pub fn new(config: &Config, today: NaiveDate) -> Result<Self> {
        let options = config.picker_options();
        let bounds = config.date_bounds()?;
        let number = Some(3);

        let make_input = |ui: PickerUi| {
            DateInput::new(None, ui, bounds, options)
                .with_format(config.dates.format.clone())
                .with_initial_picker_date(today)
        };

        Ok(Self {
            number,
            numbers: ScrollPicker::new(number_items(false), number, options).with_name("numbers"),
            filtered_numbers: ScrollPicker::new(number_items(true), number, options)
                .with_name("filtered"),
            picker_date: bounds.clamp(today),
            date_picker: DateScrollPicker::new(today, bounds, options),
            current_date: None,
            dialog_input: make_input(PickerUi::Dialog),
            popover_input: make_input(PickerUi::Popover),
            focus: Panel::Numbers,
            preferred_input: match config.picker_ui {
                PickerUi::Dialog => InputField::Dialog,
                PickerUi::Popover => InputField::Popover,
            },
            drag_target: None,
            status: String::new(),
            interactions: InteractionRegistry::new(),
            should_quit: false,
            frame_interval: config.frame_interval(),
        })
    }

    pub fn input(&self, field: InputField) -> &DateInput {
        match field {
            InputField::Dialog => &self.dialog_input,
            InputField::Popover => &self.popover_input,
        }
    }

    fn input_mut(&mut self, field: InputField) -> &mut DateInput {
        match field {
            InputField::Dialog => &mut self.dialog_input,
            InputField::Popover => &mut self.popover_input,
        }
    }

    /// The date input whose draft is open, if any
    pub fn open_input(&self) -> Option<InputField> {
        [InputField::Dialog, InputField::Popover]
            .into_iter()
            .find(|field| self.input(*field).is_open())
    }

    fn draft_mut(&mut self) -> Option<&mut DateScrollPicker> {
        let field = self.open_input()?;
        self.input_mut(field).draft_mut()
    }

    fn set_number(&mut self, value: u32) {
        self.number = Some(value);
        self.numbers.set_value(self.number);
        self.filtered_numbers.set_value(self.number);
        self.status = format!("Number changed to {}", value);
        log::log(&self.status);
    }

    fn set_picker_date(&mut self, date: NaiveDate) {
        self.picker_date = date;
        self.date_picker.set_value(date);
        self.status = format!("Date picker changed to {}", date);
        log::log(&self.status);
    }

    fn set_current_date(&mut self, date: Option<NaiveDate>) {
        self.current_date = date;
        self.dialog_input.set_value(date);
        self.popover_input.set_value(date);
        self.status = match date {
            Some(date) => format!("Date input changed to {}", date),
            None => "Date input cleared".to_string(),
        };
        log::log(&self.status);
    }

    /// Apply an action. Returns `false` once the app should exit.
    pub fn dispatch(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,

            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::Focus(panel) => self.focus = panel,

            Action::ColumnNext => {
                if let Some(draft) = self.draft_mut() {
                    draft.focus_next();
                } else if self.focus == Panel::Date {
                    self.date_picker.focus_next();
                }
            }
            Action::ColumnPrev => {
                if let Some(draft) = self.draft_mut() {
                    draft.focus_prev();
                } else if self.focus == Panel::Date {
                    self.date_picker.focus_prev();
                }
            }

            Action::SelectNext => self.step(|p| p.select_next(), |d| d.select_next()),
            Action::SelectPrev => self.step(|p| p.select_prev(), |d| d.select_prev()),
            Action::SelectFirst => self.step(|p| p.select_first(), |d| d.select_first()),
            Action::SelectLast => self.step(|p| p.select_last(), |d| d.select_last()),

            Action::Wheel { target, notches } => {
                log::log_event(&format!("wheel {:?} {}", target, notches));
                match target {
                    PickerTarget::Numbers => self.numbers.wheel(notches, now),
                    PickerTarget::FilteredNumbers => self.filtered_numbers.wheel(notches, now),
                    PickerTarget::Date(field) => self.date_picker.wheel(field, notches, now),
                    PickerTarget::Draft(field) => {
                        if let Some(draft) = self.draft_mut() {
                            draft.wheel(field, notches, now);
                        }
                    }
                }
            }

            Action::Press { target, row, item } => {
                self.drag_target = Some(target);
                match target {
                    PickerTarget::Numbers => {
                        self.focus = Panel::Numbers;
                        self.numbers.press(row, item);
                    }
                    PickerTarget::FilteredNumbers => {
                        self.focus = Panel::FilteredNumbers;
                        self.filtered_numbers.press(row, item);
                    }
                    PickerTarget::Date(field) => {
                        self.focus = Panel::Date;
                        self.date_picker.press(field, row, item);
                    }
                    PickerTarget::Draft(field) => {
                        if let Some(draft) = self.draft_mut() {
                            draft.press(field, row, item);
                        }
                    }
                }
            }

            Action::Drag { row } => match self.drag_target {
                Some(PickerTarget::Numbers) => self.numbers.drag(row),
                Some(PickerTarget::FilteredNumbers) => self.filtered_numbers.drag(row),
                Some(PickerTarget::Date(field)) => self.date_picker.drag(field, row),
                Some(PickerTarget::Draft(field)) => {
                    if let Some(draft) = self.draft_mut() {
                        draft.drag(field, row);
                    }
                }
                None => {}
            },

            Action::Release => match self.drag_target.take() {
                Some(PickerTarget::Numbers) => {
                    if let Some(value) = self.numbers.release() {
                        self.set_number(value);
                    }
                }
                Some(PickerTarget::FilteredNumbers) => {
                    if let Some(value) = self.filtered_numbers.release() {
                        self.set_number(value);
                    }
                }
                Some(PickerTarget::Date(field)) => {
                    if let Some(date) = self.date_picker.release(field) {
                        self.set_picker_date(date);
                    }
                }
                Some(PickerTarget::Draft(field)) => {
                    if let Some(draft) = self.draft_mut() {
                        draft.release(field);
                    }
                }
                None => {}
            },

            Action::OpenDateInput(field) => {
                if self.open_input().is_none() {
                    self.focus = field.panel();
                    self.input_mut(field).open();
                }
            }
            Action::CancelDateInput => {
                if let Some(field) = self.open_input() {
                    self.input_mut(field).cancel();
                }
            }
            Action::SubmitDateInput => {
                if let Some(field) = self.open_input() {
                    if let Some(date) = self.input_mut(field).submit() {
                        self.set_current_date(Some(date));
                    }
                }
            }
            Action::ClearDateInput(field) => {
                if self.input_mut(field).clear() {
                    self.set_current_date(None);
                }
            }
        }

        !self.should_quit
    }

    /// Keyboard stepping on whatever has focus.
    fn step<FN, FD>(&mut self, on_numbers: FN, on_date: FD)
    where
        FN: FnOnce(&mut ScrollPicker<u32>) -> Option<u32>,
        FD: FnOnce(&mut DateScrollPicker) -> Option<NaiveDate>,
    {
        if let Some(draft) = self.draft_mut() {
            on_date(draft);
            return;
        }
        match self.focus {
            Panel::Numbers => {
                if let Some(value) = on_numbers(&mut self.numbers) {
                    self.set_number(value);
                }
            }
            Panel::FilteredNumbers => {
                if let Some(value) = on_numbers(&mut self.filtered_numbers) {
                    self.set_number(value);
                }
            }
            Panel::Date => {
                if let Some(date) = on_date(&mut self.date_picker) {
                    self.set_picker_date(date);
                }
            }
            Panel::DialogInput | Panel::PopoverInput => {}
        }
    }

    /// Advance animations and fire due settles.
    pub fn tick(&mut self, now: Instant) {
        if let Some(value) = self.numbers.tick(now) {
            self.set_number(value);
        }
        if let Some(value) = self.filtered_numbers.tick(now) {
            self.set_number(value);
        }
        if let Some(date) = self.date_picker.tick(now) {
            self.set_picker_date(date);
        }
        if let Some(draft) = self.draft_mut() {
            draft.tick(now);
        }
    }

    /// When the event loop should wake up next without input.
    pub fn next_wakeup(&self, now: Instant) -> Instant {
        let draft = self.open_input().and_then(|field| self.input(field).draft());

        let animating = self.numbers.is_animating()
            || self.filtered_numbers.is_animating()
            || self.date_picker.is_animating()
            || draft.is_some_and(DateScrollPicker::is_animating);

        let settle = [
            self.numbers.settle_deadline(),
            self.filtered_numbers.settle_deadline(),
            self.date_picker.settle_deadline(),
            draft.and_then(DateScrollPicker::settle_deadline),
        ]
        .into_iter()
        .flatten()
        .min();

        let frame = if animating {
            now + self.frame_interval
        } else {
            now + IDLE_WAKEUP
        };
        settle.map_or(frame, |deadline| deadline.min(frame))
    }
}
