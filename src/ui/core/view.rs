//! Widget capability contracts.
//!
//! Every node in a [`ViewTree`](super::tree::ViewTree) is a [`View`]. Extra
//! capabilities are exposed through the `as_*` queries so the reconciler can
//! ask a node what it supports without knowing its concrete type:
//!
//! - [`Bindable`]: has a referral and re-derives its look from data sources
//! - [`Control`]: a bindable widget with an enablement predicate
//! - [`Resettable`]: owns content that must be reloaded wholesale
//! - [`Interactive`](super::interaction::Interactive): reacts to gestures

use super::interaction::Interactive;
use super::native::Native;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::any::Any;

/// Data source computing a flag
pub type FlagClosure = Box<dyn Fn() -> bool>;
/// Data source computing a string
pub type LabelClosure = Box<dyn Fn() -> String>;
/// Data source computing a number
pub type DoubleClosure = Box<dyn Fn() -> f64>;
/// Data source computing a count or index
pub type IntClosure = Box<dyn Fn() -> usize>;
/// Data source computing an optional index, `None` meaning no selection
pub type OptionalIntClosure = Box<dyn Fn() -> Option<usize>>;
/// Data source computing an ordered list of strings
pub type StringArrayClosure = Box<dyn Fn() -> Vec<String>>;
/// Data source computing the string at a position
pub type StringForIntClosure = Box<dyn Fn(usize) -> String>;
/// Data source computing a date
pub type DateClosure = Box<dyn Fn() -> NaiveDateTime>;
/// Notification with no payload
pub type EventClosure = Box<dyn Fn()>;

/// Concrete widget type of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Window,
    Container,
    Panel,
    Label,
    Button,
    Switch,
    Stepper,
    ProgressView,
    SegmentedControl,
    PageControl,
    ActivityIndicator,
    DatePicker,
    Picker,
    Table,
    TextField,
    TextView,
    WebView,
}

/// State every node carries: referral, hidden flag and visibility predicate
pub struct ViewBase {
    referral: String,
    hidden: Native<bool>,
    visible_data_source: Option<FlagClosure>,
}

impl ViewBase {
    pub fn new(referral: impl Into<String>) -> Self {
        Self {
            referral: referral.into(),
            hidden: Native::new(false),
            visible_data_source: None,
        }
    }

    pub fn referral(&self) -> &str {
        &self.referral
    }

    pub fn set_referral(&mut self, referral: impl Into<String>) {
        self.referral = referral.into();
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden.value()
    }

    /// Returns whether the flag changed
    pub fn set_hidden(&mut self, hidden: bool) -> bool {
        self.hidden.update(hidden)
    }

    pub fn set_visible_data_source(&mut self, source: impl Fn() -> bool + 'static) {
        self.visible_data_source = Some(Box::new(source));
    }

    pub fn clear_visible_data_source(&mut self) {
        self.visible_data_source = None;
    }

    /// Visibility the data source asks for; visible when unset
    pub fn wanted_visibility(&self) -> bool {
        match &self.visible_data_source {
            Some(source) => source(),
            None => true,
        }
    }

    pub fn writes(&self) -> u64 {
        self.hidden.writes()
    }
}

/// Enablement state of a control
pub struct ControlBase {
    enabled: Native<bool>,
    enable_data_source: Option<FlagClosure>,
}

impl ControlBase {
    pub fn new() -> Self {
        Self {
            enabled: Native::new(true),
            enable_data_source: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.value()
    }

    /// Returns whether the flag changed
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        self.enabled.update(enabled)
    }

    pub fn set_enable_data_source(&mut self, source: impl Fn() -> bool + 'static) {
        self.enable_data_source = Some(Box::new(source));
    }

    pub fn clear_enable_data_source(&mut self) {
        self.enable_data_source = None;
    }

    /// Re-evaluate the enablement predicate, writing only on change.
    ///
    /// Does nothing when no predicate is set.
    pub fn refresh(&mut self) -> bool {
        match &self.enable_data_source {
            Some(source) => {
                let active = source();
                self.enabled.update(active)
            }
            None => false,
        }
    }

    pub fn writes(&self) -> u64 {
        self.enabled.writes()
    }
}

impl Default for ControlBase {
    fn default() -> Self {
        Self::new()
    }
}

/// A node of the display hierarchy
pub trait View: Any {
    fn kind(&self) -> WidgetKind;

    fn base(&self) -> &ViewBase;

    fn base_mut(&mut self) -> &mut ViewBase;

    /// Total writes to native properties, for detecting redundant renders
    fn native_writes(&self) -> u64;

    /// Short text describing what the widget displays
    fn summary(&self) -> String;

    fn is_hidden(&self) -> bool {
        self.base().is_hidden()
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.base_mut().set_hidden(hidden);
    }

    fn as_bindable(&self) -> Option<&dyn Bindable> {
        None
    }

    fn as_bindable_mut(&mut self) -> Option<&mut dyn Bindable> {
        None
    }

    fn as_control(&self) -> Option<&dyn Control> {
        None
    }

    fn as_control_mut(&mut self) -> Option<&mut dyn Control> {
        None
    }

    fn as_resettable_mut(&mut self) -> Option<&mut dyn Resettable> {
        None
    }

    fn as_interactive(&self) -> Option<&dyn Interactive> {
        None
    }

    fn as_interactive_mut(&mut self) -> Option<&mut dyn Interactive> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A widget whose appearance is computed from data sources.
///
/// `fill_ui` should not be called directly; run
/// [`ViewTree::update_ui`](super::tree::ViewTree::update_ui) instead so
/// visibility and enablement are handled in the right order.
pub trait Bindable: View {
    fn referral(&self) -> &str {
        self.base().referral()
    }

    /// Apply every set data source whose value differs from what is shown
    fn fill_ui(&mut self);
}

/// A bindable widget that can be enabled or disabled
pub trait Control: Bindable {
    fn control(&self) -> &ControlBase;

    fn control_mut(&mut self) -> &mut ControlBase;

    fn is_enabled(&self) -> bool {
        self.control().is_enabled()
    }
}

/// A widget whose content has to be rebuilt rather than diffed.
///
/// Run [`ViewTree::reset_ui`](super::tree::ViewTree::reset_ui) rather than
/// calling `reload_ui` directly.
pub trait Resettable {
    fn reload_ui(&mut self);
}

/// Implements the capability queries of [`View`] for a widget.
///
/// Always emits `as_any`/`as_any_mut`; each listed capability
/// (`bindable`, `control`, `resettable`, `interactive`) adds its queries.
///
/// ```ignore
/// impl View for Label {
///     // kind, base, base_mut, native_writes, summary ...
///     view_capabilities!(bindable);
/// }
/// ```
#[macro_export]
macro_rules! view_capabilities {
    ($($cap:ident),* $(,)?) => {
        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
            self
        }

        $( $crate::view_capabilities!(@cap $cap); )*
    };
    (@cap bindable) => {
        fn as_bindable(&self) -> Option<&dyn $crate::ui::core::view::Bindable> {
            Some(self)
        }

        fn as_bindable_mut(&mut self) -> Option<&mut dyn $crate::ui::core::view::Bindable> {
            Some(self)
        }
    };
    (@cap control) => {
        fn as_control(&self) -> Option<&dyn $crate::ui::core::view::Control> {
            Some(self)
        }

        fn as_control_mut(&mut self) -> Option<&mut dyn $crate::ui::core::view::Control> {
            Some(self)
        }
    };
    (@cap resettable) => {
        fn as_resettable_mut(&mut self) -> Option<&mut dyn $crate::ui::core::view::Resettable> {
            Some(self)
        }
    };
    (@cap interactive) => {
        fn as_interactive(&self) -> Option<&dyn $crate::ui::core::interaction::Interactive> {
            Some(self)
        }

        fn as_interactive_mut(&mut self) -> Option<&mut dyn $crate::ui::core::interaction::Interactive> {
            Some(self)
        }
    };
}
