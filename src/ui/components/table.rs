//! Single-section, single-selection text table.
//!
//! Rows come from one of three sources (see [`SingleItemTable::set_static_list`],
//! [`SingleItemTable::set_labels_data_source`] and
//! [`SingleItemTable::set_items_data_source`]). Rows are cached: they are
//! built on the first render and rebuilt on every reset pass, not on
//! update passes.

use super::rows::{step_selection, RowSources};
use crate::ui::core::view::OptionalIntClosure;
use crate::ui::core::{
    Bindable, ControlValue, Interaction, InteractionHandler, Interactive, Native, Resettable, View, ViewBase,
    WidgetKind,
};
use crate::view_capabilities;
use log::trace;

pub struct SingleItemTable {
    base: ViewBase,
    handler: InteractionHandler,
    sources: RowSources,
    rows: Native<Vec<String>>,
    selection: Native<Option<usize>>,
    loaded: bool,
    selected_data_source: Option<OptionalIntClosure>,
}

impl SingleItemTable {
    pub fn new(referral: impl Into<String>) -> Self {
        Self {
            base: ViewBase::new(referral),
            handler: InteractionHandler::new(),
            sources: RowSources::default(),
            rows: Native::new(Vec::new()),
            selection: Native::new(None),
            loaded: false,
            selected_data_source: None,
        }
    }

    /// Fixed labels. Takes precedence over every closure source.
    pub fn set_static_list<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources.static_list = Some(labels.into_iter().map(Into::into).collect());
    }

    /// Labels computed as a whole
    pub fn set_labels_data_source(&mut self, source: impl Fn() -> Vec<String> + 'static) {
        self.sources.labels = Some(Box::new(source));
    }

    /// Labels computed from a row count and a per-row title
    pub fn set_items_data_source(
        &mut self,
        count: impl Fn() -> usize + 'static,
        item: impl Fn(usize) -> String + 'static,
    ) {
        self.sources.count = Some(Box::new(count));
        self.sources.item = Some(Box::new(item));
    }

    pub fn set_selected_data_source(&mut self, source: impl Fn() -> Option<usize> + 'static) {
        self.selected_data_source = Some(Box::new(source));
    }

    /// Rows as last loaded
    pub fn rows(&self) -> &[String] {
        self.rows.get()
    }

    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// Label of the row at `position`, empty when out of range
    pub fn fetch_label(&self, position: usize) -> String {
        self.rows().get(position).cloned().unwrap_or_default()
    }

    /// Selected row, zero-based
    pub fn current_selection(&self) -> Option<usize> {
        self.selection.value()
    }

    /// Select a row without firing the selection handler.
    ///
    /// Out-of-range rows are ignored; `None` deselects.
    pub fn set_current_selection(&mut self, row: Option<usize>) -> bool {
        match row {
            Some(index) if index >= self.row_count() => false,
            _ => self.selection.update(row),
        }
    }

    pub fn deselect_all(&mut self) -> bool {
        self.selection.update(None)
    }

    /// Whether selection changes re-render the whole root view
    pub fn set_select_ui(&mut self, select_ui: bool) {
        self.handler.set_auto_ui(select_ui);
    }

    /// Callback for selection changes
    pub fn on_select(&mut self, action: impl Fn(&ControlValue) + 'static) {
        self.handler.on_press(action);
    }

    fn load(&mut self) {
        let rows = self.sources.rows();
        trace!("Loaded {} rows into '{}'", rows.len(), self.base.referral());
        self.rows.update(rows);
        self.loaded = true;

        if self.current_selection().is_some_and(|row| row >= self.row_count()) {
            self.selection.update(None);
        }
    }

    fn step(&mut self, forward: bool) -> bool {
        match step_selection(self.current_selection(), self.row_count(), forward) {
            Some(next) => self.selection.update(Some(next)),
            None => false,
        }
    }
}

impl View for SingleItemTable {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Table
    }

    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn native_writes(&self) -> u64 {
        self.base.writes() + self.rows.writes() + self.selection.writes()
    }

    fn summary(&self) -> String {
        match self.current_selection() {
            Some(row) => format!("{} rows, selected: {}", self.row_count(), self.fetch_label(row)),
            None => format!("{} rows", self.row_count()),
        }
    }

    view_capabilities!(bindable, resettable, interactive);
}

impl Bindable for SingleItemTable {
    fn fill_ui(&mut self) {
        if !self.loaded {
            self.load();
        }

        if let Some(source) = &self.selected_data_source {
            let row = source();
            self.set_current_selection(row);
        }
    }
}

impl Resettable for SingleItemTable {
    fn reload_ui(&mut self) {
        self.load();
    }
}

impl Interactive for SingleItemTable {
    fn handler(&self) -> &InteractionHandler {
        &self.handler
    }

    fn handler_mut(&mut self) -> &mut InteractionHandler {
        &mut self.handler
    }

    fn apply(&mut self, interaction: &Interaction) -> bool {
        match interaction {
            Interaction::Select(row) => self.set_current_selection(*row),
            Interaction::Increment => self.step(true),
            Interaction::Decrement => self.step(false),
            _ => false,
        }
    }

    fn control_value(&self) -> ControlValue {
        ControlValue::Index(self.current_selection())
    }
}
