use crate::ui::core::view::LabelClosure;
use crate::ui::core::{Bindable, Native, View, ViewBase, WidgetKind};
use crate::view_capabilities;

/// Read-only text
pub struct Label {
    base: ViewBase,
    text: Native<String>,
    text_data_source: Option<LabelClosure>,
}

impl Label {
    pub fn new(referral: impl Into<String>) -> Self {
        Self {
            base: ViewBase::new(referral),
            text: Native::new(String::new()),
            text_data_source: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Native::new(text.into());
        self
    }

    pub fn text(&self) -> &str {
        self.text.get()
    }

    pub fn set_text_data_source(&mut self, source: impl Fn() -> String + 'static) {
        self.text_data_source = Some(Box::new(source));
    }
}

impl View for Label {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Label
    }

    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn native_writes(&self) -> u64 {
        self.base.writes() + self.text.writes()
    }

    fn summary(&self) -> String {
        self.text().to_string()
    }

    view_capabilities!(bindable);
}

impl Bindable for Label {
    fn fill_ui(&mut self) {
        if let Some(source) = &self.text_data_source {
            self.text.update(source());
        }
    }
}
