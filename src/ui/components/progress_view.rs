use super::stepper::clamp_to;
use crate::ui::core::view::DoubleClosure;
use crate::ui::core::{Bindable, Native, View, ViewBase, WidgetKind};
use crate::view_capabilities;

const BAR_WIDTH: usize = 20;

/// Progress bar over `[0.0, 1.0]`.
///
/// Data source values outside the range are clamped.
pub struct ProgressView {
    base: ViewBase,
    progress: Native<f64>,
    progress_data_source: Option<DoubleClosure>,
}

impl ProgressView {
    pub fn new(referral: impl Into<String>) -> Self {
        Self {
            base: ViewBase::new(referral),
            progress: Native::new(0.0),
            progress_data_source: None,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress.value()
    }

    pub fn set_progress_data_source(&mut self, source: impl Fn() -> f64 + 'static) {
        self.progress_data_source = Some(Box::new(source));
    }
}

impl View for ProgressView {
    fn kind(&self) -> WidgetKind {
        WidgetKind::ProgressView
    }

    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn native_writes(&self) -> u64 {
        self.base.writes() + self.progress.writes()
    }

    fn summary(&self) -> String {
        let filled = (self.progress() * BAR_WIDTH as f64).round() as usize;
        format!(
            "{}{} {:>3.0}%",
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            self.progress() * 100.0
        )
    }

    view_capabilities!(bindable);
}

impl Bindable for ProgressView {
    fn fill_ui(&mut self) {
        if let Some(source) = &self.progress_data_source {
            let value = clamp_to(source(), 0.0, 1.0);
            self.progress.update(value);
        }
    }
}
