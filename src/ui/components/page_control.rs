use crate::ui::core::view::IntClosure;
use crate::ui::core::{
    Bindable, Control, ControlBase, ControlValue, Interaction, InteractionHandler, Interactive, Native, View, ViewBase,
    WidgetKind,
};
use crate::view_capabilities;

/// Row of page dots.
///
/// The current page always stays below the number of pages; with no pages
/// it is 0.
pub struct PageControl {
    base: ViewBase,
    control: ControlBase,
    handler: InteractionHandler,
    number_of_pages: Native<usize>,
    current_page: Native<usize>,
    max_page_data_source: Option<IntClosure>,
    current_page_data_source: Option<IntClosure>,
}

impl PageControl {
    pub fn new(referral: impl Into<String>) -> Self {
        Self {
            base: ViewBase::new(referral),
            control: ControlBase::new(),
            handler: InteractionHandler::new(),
            number_of_pages: Native::new(0),
            current_page: Native::new(0),
            max_page_data_source: None,
            current_page_data_source: None,
        }
    }

    pub fn number_of_pages(&self) -> usize {
        self.number_of_pages.value()
    }

    pub fn current_page(&self) -> usize {
        self.current_page.value()
    }

    pub fn set_max_page_data_source(&mut self, source: impl Fn() -> usize + 'static) {
        self.max_page_data_source = Some(Box::new(source));
    }

    pub fn set_current_page_data_source(&mut self, source: impl Fn() -> usize + 'static) {
        self.current_page_data_source = Some(Box::new(source));
    }

    fn apply_page(&mut self, page: usize) -> bool {
        let last = self.number_of_pages().saturating_sub(1);
        self.current_page.update(page.min(last))
    }
}

impl View for PageControl {
    fn kind(&self) -> WidgetKind {
        WidgetKind::PageControl
    }

    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn native_writes(&self) -> u64 {
        self.base.writes() + self.control.writes() + self.number_of_pages.writes() + self.current_page.writes()
    }

    fn summary(&self) -> String {
        (0..self.number_of_pages())
            .map(|page| if page == self.current_page() { "●" } else { "○" })
            .collect::<Vec<_>>()
            .join(" ")
    }

    view_capabilities!(bindable, control, interactive);
}

impl Bindable for PageControl {
    fn fill_ui(&mut self) {
        if let Some(source) = &self.max_page_data_source {
            self.number_of_pages.update(source());
        }

        let page = match &self.current_page_data_source {
            Some(source) => source(),
            None => self.current_page(),
        };
        self.apply_page(page);
    }
}

impl Control for PageControl {
    fn control(&self) -> &ControlBase {
        &self.control
    }

    fn control_mut(&mut self) -> &mut ControlBase {
        &mut self.control
    }
}

impl Interactive for PageControl {
    fn handler(&self) -> &InteractionHandler {
        &self.handler
    }

    fn handler_mut(&mut self) -> &mut InteractionHandler {
        &mut self.handler
    }

    fn apply(&mut self, interaction: &Interaction) -> bool {
        match interaction {
            Interaction::SetPage(page) => self.apply_page(*page),
            Interaction::Increment => self.apply_page(self.current_page() + 1),
            Interaction::Decrement => self.apply_page(self.current_page().saturating_sub(1)),
            _ => false,
        }
    }

    fn control_value(&self) -> ControlValue {
        ControlValue::Index(Some(self.current_page()))
    }
}
