use crate::constants::{STEPPER_DEFAULT_MAX, STEPPER_DEFAULT_STEP};
use crate::ui::core::view::DoubleClosure;
use crate::ui::core::{
    Bindable, Control, ControlBase, ControlValue, Interaction, InteractionHandler, Interactive, Native, View, ViewBase,
    WidgetKind,
};
use crate::view_capabilities;

/// Bound `value` to `[min, max]` without panicking when the range is
/// inverted or the value is NaN. An inverted range collapses to `min`.
pub(crate) fn clamp_to(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() || value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Increment/decrement control over an inclusive numeric range.
///
/// Values coming from data sources or gestures are clamped into the range,
/// never rejected.
pub struct Stepper {
    base: ViewBase,
    control: ControlBase,
    handler: InteractionHandler,
    minimum: Native<f64>,
    maximum: Native<f64>,
    value: Native<f64>,
    step_value: f64,
    min_value_data_source: Option<DoubleClosure>,
    max_value_data_source: Option<DoubleClosure>,
    value_data_source: Option<DoubleClosure>,
}

impl Stepper {
    pub fn new(referral: impl Into<String>) -> Self {
        Self {
            base: ViewBase::new(referral),
            control: ControlBase::new(),
            handler: InteractionHandler::new(),
            minimum: Native::new(0.0),
            maximum: Native::new(STEPPER_DEFAULT_MAX),
            value: Native::new(0.0),
            step_value: STEPPER_DEFAULT_STEP,
            min_value_data_source: None,
            max_value_data_source: None,
            value_data_source: None,
        }
    }

    pub fn with_step_value(mut self, step: f64) -> Self {
        if step > 0.0 {
            self.step_value = step;
        }
        self
    }

    pub fn value(&self) -> f64 {
        self.value.value()
    }

    pub fn minimum(&self) -> f64 {
        self.minimum.value()
    }

    pub fn maximum(&self) -> f64 {
        self.maximum.value()
    }

    pub fn step_value(&self) -> f64 {
        self.step_value
    }

    pub fn set_min_value_data_source(&mut self, source: impl Fn() -> f64 + 'static) {
        self.min_value_data_source = Some(Box::new(source));
    }

    pub fn set_max_value_data_source(&mut self, source: impl Fn() -> f64 + 'static) {
        self.max_value_data_source = Some(Box::new(source));
    }

    pub fn set_value_data_source(&mut self, source: impl Fn() -> f64 + 'static) {
        self.value_data_source = Some(Box::new(source));
    }

    /// Store `value` clamped to the current range, writing only on change
    fn apply_value(&mut self, value: f64) -> bool {
        let clamped = clamp_to(value, self.minimum(), self.maximum());
        self.value.update(clamped)
    }
}

impl View for Stepper {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Stepper
    }

    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn native_writes(&self) -> u64 {
        self.base.writes()
            + self.control.writes()
            + self.minimum.writes()
            + self.maximum.writes()
            + self.value.writes()
    }

    fn summary(&self) -> String {
        format!("[-] {} [+]", self.value())
    }

    view_capabilities!(bindable, control, interactive);
}

impl Bindable for Stepper {
    fn fill_ui(&mut self) {
        // NaN bounds are dropped so the displayed range stays comparable
        if let Some(minimum) = self.min_value_data_source.as_ref().map(|source| source()) {
            if !minimum.is_nan() {
                self.minimum.update(minimum);
            }
        }

        if let Some(maximum) = self.max_value_data_source.as_ref().map(|source| source()) {
            if !maximum.is_nan() {
                self.maximum.update(maximum);
            }
        }

        // A moved range pulls the current value along with it
        let target = match &self.value_data_source {
            Some(source) => source(),
            None => self.value(),
        };
        self.apply_value(target);
    }
}

impl Control for Stepper {
    fn control(&self) -> &ControlBase {
        &self.control
    }

    fn control_mut(&mut self) -> &mut ControlBase {
        &mut self.control
    }
}

impl Interactive for Stepper {
    fn handler(&self) -> &InteractionHandler {
        &self.handler
    }

    fn handler_mut(&mut self) -> &mut InteractionHandler {
        &mut self.handler
    }

    fn apply(&mut self, interaction: &Interaction) -> bool {
        match interaction {
            Interaction::Increment => self.apply_value(self.value() + self.step_value),
            Interaction::Decrement => self.apply_value(self.value() - self.step_value),
            Interaction::SetValue(value) => self.apply_value(*value),
            _ => false,
        }
    }

    fn control_value(&self) -> ControlValue {
        ControlValue::Number(self.value())
    }
}
