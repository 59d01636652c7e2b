use crate::ui::core::view::DateClosure;
use crate::ui::core::{
    Bindable, Control, ControlBase, ControlValue, Interaction, InteractionHandler, Interactive, Native, View, ViewBase,
    WidgetKind,
};
use crate::view_capabilities;
use chrono::{Local, NaiveDateTime, TimeDelta};

/// Date and time selector with optional bounds
pub struct DatePicker {
    base: ViewBase,
    control: ControlBase,
    handler: InteractionHandler,
    date: Native<NaiveDateTime>,
    minimum_date: Native<Option<NaiveDateTime>>,
    maximum_date: Native<Option<NaiveDateTime>>,
    date_data_source: Option<DateClosure>,
    minimum_date_data_source: Option<DateClosure>,
    maximum_date_data_source: Option<DateClosure>,
}

impl DatePicker {
    pub fn new(referral: impl Into<String>) -> Self {
        Self::with_date(referral, Local::now().naive_local())
    }

    pub fn with_date(referral: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            base: ViewBase::new(referral),
            control: ControlBase::new(),
            handler: InteractionHandler::new(),
            date: Native::new(date),
            minimum_date: Native::new(None),
            maximum_date: Native::new(None),
            date_data_source: None,
            minimum_date_data_source: None,
            maximum_date_data_source: None,
        }
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date.value()
    }

    pub fn minimum_date(&self) -> Option<NaiveDateTime> {
        self.minimum_date.value()
    }

    pub fn maximum_date(&self) -> Option<NaiveDateTime> {
        self.maximum_date.value()
    }

    pub fn set_date_data_source(&mut self, source: impl Fn() -> NaiveDateTime + 'static) {
        self.date_data_source = Some(Box::new(source));
    }

    pub fn set_minimum_date_data_source(&mut self, source: impl Fn() -> NaiveDateTime + 'static) {
        self.minimum_date_data_source = Some(Box::new(source));
    }

    pub fn set_maximum_date_data_source(&mut self, source: impl Fn() -> NaiveDateTime + 'static) {
        self.maximum_date_data_source = Some(Box::new(source));
    }

    fn clamp(&self, date: NaiveDateTime) -> NaiveDateTime {
        let date = match self.maximum_date() {
            Some(max) if date > max => max,
            _ => date,
        };
        match self.minimum_date() {
            Some(min) if date < min => min,
            _ => date,
        }
    }

    fn apply_date(&mut self, date: NaiveDateTime) -> bool {
        let date = self.clamp(date);
        self.date.update(date)
    }

    fn shift_days(&mut self, days: i64) -> bool {
        match self.date().checked_add_signed(TimeDelta::days(days)) {
            Some(date) => self.apply_date(date),
            None => false,
        }
    }
}

impl View for DatePicker {
    fn kind(&self) -> WidgetKind {
        WidgetKind::DatePicker
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
            + self.date.writes()
            + self.minimum_date.writes()
            + self.maximum_date.writes()
    }

    fn summary(&self) -> String {
        self.date().format("%Y-%m-%d %H:%M").to_string()
    }

    view_capabilities!(bindable, control, interactive);
}

impl Bindable for DatePicker {
    fn fill_ui(&mut self) {
        if let Some(source) = &self.minimum_date_data_source {
            self.minimum_date.update(Some(source()));
        }

        if let Some(source) = &self.maximum_date_data_source {
            self.maximum_date.update(Some(source()));
        }

        let date = match &self.date_data_source {
            Some(source) => source(),
            None => self.date(),
        };
        self.apply_date(date);
    }
}

impl Control for DatePicker {
    fn control(&self) -> &ControlBase {
        &self.control
    }

    fn control_mut(&mut self) -> &mut ControlBase {
        &mut self.control
    }
}

impl Interactive for DatePicker {
    fn handler(&self) -> &InteractionHandler {
        &self.handler
    }

    fn handler_mut(&mut self) -> &mut InteractionHandler {
        &mut self.handler
    }

    fn apply(&mut self, interaction: &Interaction) -> bool {
        match interaction {
            Interaction::PickDate(date) => self.apply_date(*date),
            Interaction::Increment => self.shift_days(1),
            Interaction::Decrement => self.shift_days(-1),
            _ => false,
        }
    }

    fn control_value(&self) -> ControlValue {
        ControlValue::Date(self.date())
    }
}
