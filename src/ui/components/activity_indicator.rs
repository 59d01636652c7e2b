use crate::ui::core::view::FlagClosure;
use crate::ui::core::{Bindable, Native, View, ViewBase, WidgetKind};
use crate::view_capabilities;

/// Busy spinner
pub struct ActivityIndicator {
    base: ViewBase,
    animating: Native<bool>,
    animating_data_source: Option<FlagClosure>,
}

impl ActivityIndicator {
    pub fn new(referral: impl Into<String>) -> Self {
        Self {
            base: ViewBase::new(referral),
            animating: Native::new(false),
            animating_data_source: None,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animating.value()
    }

    pub fn start_animating(&mut self) {
        self.animating.update(true);
    }

    pub fn stop_animating(&mut self) {
        self.animating.update(false);
    }

    pub fn set_animating_data_source(&mut self, source: impl Fn() -> bool + 'static) {
        self.animating_data_source = Some(Box::new(source));
    }
}

impl View for ActivityIndicator {
    fn kind(&self) -> WidgetKind {
        WidgetKind::ActivityIndicator
    }

    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn native_writes(&self) -> u64 {
        self.base.writes() + self.animating.writes()
    }

    fn summary(&self) -> String {
        let text = if self.is_animating() { "⟳ working" } else { "· idle" };
        text.to_string()
    }

    view_capabilities!(bindable);
}

impl Bindable for ActivityIndicator {
    fn fill_ui(&mut self) {
        if let Some(source) = &self.animating_data_source {
            let flag = source();
            if flag {
                self.start_animating();
            } else {
                self.stop_animating();
            }
        }
    }
}
