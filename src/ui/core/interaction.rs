//! User interaction plumbing.
//!
//! A gesture reaches a widget as an [`Interaction`]. The widget applies it
//! to its own native state and reports whether that produced an event. If
//! it did, the widget's [`InteractionHandler`] fires: the direct callback
//! first, then the named task, then the cascade render when `auto_ui` is set.

use chrono::NaiveDateTime;

/// Callback receiving the widget's value after the gesture was applied
pub type PressClosure = Box<dyn Fn(&ControlValue)>;

/// A gesture delivered to an interactive widget
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// Primary activation: press a button, flip a switch
    Tap,
    /// Move to the next value, segment, page or row
    Increment,
    /// Move to the previous value, segment, page or row
    Decrement,
    SetOn(bool),
    SetValue(f64),
    Select(Option<usize>),
    SetPage(usize),
    SetText(String),
    TypeChar(char),
    DeleteBackward,
    PickDate(NaiveDateTime),
}

/// Value of an interactive widget as seen by its callback
#[derive(Debug, Clone, PartialEq)]
pub enum ControlValue {
    None,
    Flag(bool),
    Number(f64),
    Index(Option<usize>),
    Text(String),
    Date(NaiveDateTime),
}

impl ControlValue {
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Selected index; `None` both for "no selection" and for non-index values
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => *index,
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }
}

/// What happens when an interactive widget fires
#[derive(Default)]
pub struct InteractionHandler {
    press_action: Option<PressClosure>,
    task: String,
    param: String,
    auto_ui: bool,
}

impl InteractionHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_press(&mut self, action: impl Fn(&ControlValue) + 'static) {
        self.press_action = Some(Box::new(action));
    }

    pub fn clear_press(&mut self) {
        self.press_action = None;
    }

    /// Dispatch the named task with `param` when fired
    pub fn set_task(&mut self, task: impl Into<String>, param: impl Into<String>) {
        self.task = task.into();
        self.param = param.into();
    }

    /// Re-render the whole root view after firing
    pub fn set_auto_ui(&mut self, auto_ui: bool) {
        self.auto_ui = auto_ui;
    }

    pub fn press_action(&self) -> Option<&PressClosure> {
        self.press_action.as_ref()
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    pub fn auto_ui(&self) -> bool {
        self.auto_ui
    }
}

/// A widget that reacts to gestures
pub trait Interactive {
    fn handler(&self) -> &InteractionHandler;

    fn handler_mut(&mut self) -> &mut InteractionHandler;

    /// Apply a gesture to native state.
    ///
    /// Returns `true` when the gesture produced an event that should fire
    /// the handler. Gestures the widget does not understand return `false`.
    fn apply(&mut self, interaction: &Interaction) -> bool;

    fn control_value(&self) -> ControlValue;
}
