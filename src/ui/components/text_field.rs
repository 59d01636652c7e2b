use crate::ui::core::view::LabelClosure;
use crate::ui::core::{
    Bindable, Control, ControlBase, ControlValue, Interaction, InteractionHandler, Interactive, Native, View, ViewBase,
    WidgetKind,
};
use crate::view_capabilities;

/// Single-line editable text.
///
/// Every edit fires the handler with the new text.
pub struct TextField {
    base: ViewBase,
    control: ControlBase,
    handler: InteractionHandler,
    text: Native<String>,
    placeholder: String,
    text_data_source: Option<LabelClosure>,
}

impl TextField {
    pub fn new(referral: impl Into<String>) -> Self {
        Self {
            base: ViewBase::new(referral),
            control: ControlBase::new(),
            handler: InteractionHandler::new(),
            text: Native::new(String::new()),
            placeholder: String::new(),
            text_data_source: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Current text, empty when nothing was entered
    pub fn text_value(&self) -> &str {
        self.text.get()
    }

    pub fn set_text_data_source(&mut self, source: impl Fn() -> String + 'static) {
        self.text_data_source = Some(Box::new(source));
    }
}

impl View for TextField {
    fn kind(&self) -> WidgetKind {
        WidgetKind::TextField
    }

    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn native_writes(&self) -> u64 {
        self.base.writes() + self.control.writes() + self.text.writes()
    }

    fn summary(&self) -> String {
        if self.text_value().is_empty() {
            format!("_{}_", self.placeholder)
        } else {
            format!("{}▏", self.text_value())
        }
    }

    view_capabilities!(bindable, control, interactive);
}

impl Bindable for TextField {
    fn fill_ui(&mut self) {
        if let Some(source) = &self.text_data_source {
            self.text.update(source());
        }
    }
}

impl Control for TextField {
    fn control(&self) -> &ControlBase {
        &self.control
    }

    fn control_mut(&mut self) -> &mut ControlBase {
        &mut self.control
    }
}

impl Interactive for TextField {
    fn handler(&self) -> &InteractionHandler {
        &self.handler
    }

    fn handler_mut(&mut self) -> &mut InteractionHandler {
        &mut self.handler
    }

    fn apply(&mut self, interaction: &Interaction) -> bool {
        match interaction {
            Interaction::SetText(text) => self.text.update(text.clone()),
            Interaction::TypeChar(c) => {
                let mut text = self.text_value().to_string();
                text.push(*c);
                self.text.update(text)
            }
            Interaction::DeleteBackward => {
                let mut text = self.text_value().to_string();
                text.pop().is_some() && self.text.update(text)
            }
            _ => false,
        }
    }

    fn control_value(&self) -> ControlValue {
        ControlValue::Text(self.text_value().to_string())
    }
}
