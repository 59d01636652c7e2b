use crate::ui::core::view::FlagClosure;
use crate::ui::core::{
    Bindable, Control, ControlBase, ControlValue, Interaction, InteractionHandler, Interactive, Native, View, ViewBase,
    WidgetKind,
};
use crate::view_capabilities;

/// On/off toggle
pub struct Switch {
    base: ViewBase,
    control: ControlBase,
    handler: InteractionHandler,
    on: Native<bool>,
    switch_data_source: Option<FlagClosure>,
}

impl Switch {
    pub fn new(referral: impl Into<String>) -> Self {
        Self {
            base: ViewBase::new(referral),
            control: ControlBase::new(),
            handler: InteractionHandler::new(),
            on: Native::new(false),
            switch_data_source: None,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on.value()
    }

    pub fn set_switch_data_source(&mut self, source: impl Fn() -> bool + 'static) {
        self.switch_data_source = Some(Box::new(source));
    }
}

impl View for Switch {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Switch
    }

    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn native_writes(&self) -> u64 {
        self.base.writes() + self.control.writes() + self.on.writes()
    }

    fn summary(&self) -> String {
        let text = if self.is_on() { "(●  ) on" } else { "(  ○) off" };
        text.to_string()
    }

    view_capabilities!(bindable, control, interactive);
}

impl Bindable for Switch {
    fn fill_ui(&mut self) {
        if let Some(source) = &self.switch_data_source {
            self.on.update(source());
        }
    }
}

impl Control for Switch {
    fn control(&self) -> &ControlBase {
        &self.control
    }

    fn control_mut(&mut self) -> &mut ControlBase {
        &mut self.control
    }
}

impl Interactive for Switch {
    fn handler(&self) -> &InteractionHandler {
        &self.handler
    }

    fn handler_mut(&mut self) -> &mut InteractionHandler {
        &mut self.handler
    }

    fn apply(&mut self, interaction: &Interaction) -> bool {
        match interaction {
            Interaction::Tap => {
                let flipped = !self.is_on();
                self.on.set(flipped);
                true
            }
            Interaction::SetOn(on) => self.on.update(*on),
            _ => false,
        }
    }

    fn control_value(&self) -> ControlValue {
        ControlValue::Flag(self.is_on())
    }
}
