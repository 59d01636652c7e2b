use super::rows::{step_selection, RowSources};
use crate::ui::core::view::OptionalIntClosure;
use crate::ui::core::{
    Bindable, ControlValue, Interaction, InteractionHandler, Interactive, Native, Resettable, View, ViewBase,
    WidgetKind,
};
use crate::view_capabilities;

/// Single-component spinning picker.
///
/// Rows are reloaded by the reset pass; the selected row follows its data
/// source on every update pass.
pub struct PickerView {
    base: ViewBase,
    handler: InteractionHandler,
    sources: RowSources,
    rows: Native<Vec<String>>,
    selected_row: Native<Option<usize>>,
    loaded: bool,
    selected_row_data_source: Option<OptionalIntClosure>,
}

impl PickerView {
    pub fn new(referral: impl Into<String>) -> Self {
        Self {
            base: ViewBase::new(referral),
            handler: InteractionHandler::new(),
            sources: RowSources::default(),
            rows: Native::new(Vec::new()),
            selected_row: Native::new(None),
            loaded: false,
            selected_row_data_source: None,
        }
    }

    pub fn set_labels_data_source(&mut self, source: impl Fn() -> Vec<String> + 'static) {
        self.sources.labels = Some(Box::new(source));
    }

    pub fn set_rows_data_source(
        &mut self,
        count: impl Fn() -> usize + 'static,
        title_for_row: impl Fn(usize) -> String + 'static,
    ) {
        self.sources.count = Some(Box::new(count));
        self.sources.item = Some(Box::new(title_for_row));
    }

    pub fn set_selected_row_data_source(&mut self, source: impl Fn() -> Option<usize> + 'static) {
        self.selected_row_data_source = Some(Box::new(source));
    }

    pub fn rows(&self) -> &[String] {
        self.rows.get()
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.selected_row.value()
    }

    pub fn selected_title(&self) -> Option<&str> {
        self.selected_row().and_then(|row| self.rows().get(row)).map(String::as_str)
    }

    fn select(&mut self, row: Option<usize>) -> bool {
        match row {
            Some(index) if index >= self.rows().len() => false,
            _ => self.selected_row.update(row),
        }
    }

    fn load(&mut self) {
        self.rows.update(self.sources.rows());
        self.loaded = true;
        if self.selected_row().is_some_and(|row| row >= self.rows().len()) {
            self.selected_row.update(None);
        }
    }
}

impl View for PickerView {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Picker
    }

    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn native_writes(&self) -> u64 {
        self.base.writes() + self.rows.writes() + self.selected_row.writes()
    }

    fn summary(&self) -> String {
        format!("‹ {} ›", self.selected_title().unwrap_or("-"))
    }

    view_capabilities!(bindable, resettable, interactive);
}

impl Bindable for PickerView {
    fn fill_ui(&mut self) {
        if !self.loaded {
            self.load();
        }

        if let Some(source) = &self.selected_row_data_source {
            let row = source();
            self.select(row);
        }
    }
}

impl Resettable for PickerView {
    fn reload_ui(&mut self) {
        self.load();
    }
}

impl Interactive for PickerView {
    fn handler(&self) -> &InteractionHandler {
        &self.handler
    }

    fn handler_mut(&mut self) -> &mut InteractionHandler {
        &mut self.handler
    }

    fn apply(&mut self, interaction: &Interaction) -> bool {
        match interaction {
            Interaction::Select(row) => self.select(*row),
            Interaction::Increment | Interaction::Decrement => {
                let forward = matches!(interaction, Interaction::Increment);
                match step_selection(self.selected_row(), self.rows().len(), forward) {
                    Some(next) => self.selected_row.update(Some(next)),
                    None => false,
                }
            }
            _ => false,
        }
    }

    fn control_value(&self) -> ControlValue {
        ControlValue::Index(self.selected_row())
    }
}
