use crate::ui::core::view::LabelClosure;
use crate::ui::core::{
    Bindable, Control, ControlBase, ControlValue, Interaction, InteractionHandler, Interactive, Native, View, ViewBase,
    WidgetKind,
};
use crate::view_capabilities;

/// Pressable button with a bindable title
pub struct Button {
    base: ViewBase,
    control: ControlBase,
    handler: InteractionHandler,
    title: Native<String>,
    text_data_source: Option<LabelClosure>,
}

impl Button {
    pub fn new(referral: impl Into<String>) -> Self {
        Self {
            base: ViewBase::new(referral),
            control: ControlBase::new(),
            handler: InteractionHandler::new(),
            title: Native::new(String::new()),
            text_data_source: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Native::new(title.into());
        self
    }

    pub fn title(&self) -> &str {
        self.title.get()
    }

    pub fn set_text_data_source(&mut self, source: impl Fn() -> String + 'static) {
        self.text_data_source = Some(Box::new(source));
    }
}

impl View for Button {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Button
    }

    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn native_writes(&self) -> u64 {
        self.base.writes() + self.control.writes() + self.title.writes()
    }

    fn summary(&self) -> String {
        format!("[ {} ]", self.title())
    }

    view_capabilities!(bindable, control, interactive);
}

impl Bindable for Button {
    fn fill_ui(&mut self) {
        if let Some(source) = &self.text_data_source {
            self.title.update(source());
        }
    }
}

impl Control for Button {
    fn control(&self) -> &ControlBase {
        &self.control
    }

    fn control_mut(&mut self) -> &mut ControlBase {
        &mut self.control
    }
}

impl Interactive for Button {
    fn handler(&self) -> &InteractionHandler {
        &self.handler
    }

    fn handler_mut(&mut self) -> &mut InteractionHandler {
        &mut self.handler
    }

    fn apply(&mut self, interaction: &Interaction) -> bool {
        matches!(interaction, Interaction::Tap)
    }

    fn control_value(&self) -> ControlValue {
        ControlValue::Text(self.title().to_string())
    }
}
