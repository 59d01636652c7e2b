use crate::resources::ResourceBundle;
use crate::ui::core::view::LabelClosure;
use crate::ui::core::{Bindable, Control, ControlBase, Native, Resettable, View, ViewBase, WidgetKind};
use crate::view_capabilities;

const SUMMARY_CHARS: usize = 60;

/// Multi-line text loaded on reset.
///
/// Content comes from a text data source or from a bundled `.txt` file
/// named by a file data source. Both are applied by the reset pass, text
/// first, so the file wins when both are set. A missing file shows as
/// empty text.
pub struct TextView {
    base: ViewBase,
    control: ControlBase,
    bundle: ResourceBundle,
    text: Native<String>,
    text_data_source: Option<LabelClosure>,
    text_file_data_source: Option<LabelClosure>,
}

impl TextView {
    pub fn new(referral: impl Into<String>) -> Self {
        Self {
            base: ViewBase::new(referral),
            control: ControlBase::new(),
            bundle: ResourceBundle::default(),
            text: Native::new(String::new()),
            text_data_source: None,
            text_file_data_source: None,
        }
    }

    pub fn with_bundle(mut self, bundle: ResourceBundle) -> Self {
        self.bundle = bundle;
        self
    }

    pub fn text(&self) -> &str {
        self.text.get()
    }

    pub fn set_text_data_source(&mut self, source: impl Fn() -> String + 'static) {
        self.text_data_source = Some(Box::new(source));
    }

    /// Data source returning the base name of a bundled `.txt` file
    pub fn set_text_file_data_source(&mut self, source: impl Fn() -> String + 'static) {
        self.text_file_data_source = Some(Box::new(source));
    }

    /// Show the bundled `<name>.txt`, or nothing if it cannot be read
    pub fn load_text_file(&mut self, name: &str) {
        let text = self.bundle.read_text(name);
        self.text.update(text);
    }
}

impl View for TextView {
    fn kind(&self) -> WidgetKind {
        WidgetKind::TextView
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
        let first_line = self.text().lines().next().unwrap_or_default();
        let mut summary: String = first_line.chars().take(SUMMARY_CHARS).collect();
        if first_line.chars().count() > SUMMARY_CHARS || self.text().lines().nth(1).is_some() {
            summary.push('…');
        }
        summary
    }

    view_capabilities!(bindable, control, resettable);
}

impl Bindable for TextView {
    fn fill_ui(&mut self) {}
}

impl Control for TextView {
    fn control(&self) -> &ControlBase {
        &self.control
    }

    fn control_mut(&mut self) -> &mut ControlBase {
        &mut self.control
    }
}

impl Resettable for TextView {
    fn reload_ui(&mut self) {
        if let Some(source) = &self.text_data_source {
            self.text.update(source());
        }

        if let Some(source) = &self.text_file_data_source {
            let name = source();
            self.load_text_file(&name);
        }
    }
}
