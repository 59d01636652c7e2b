//! Widgets and helpers shared by the tree tests

use slamui::ui::core::{Bindable, Control, ControlBase, View, ViewBase, WidgetKind};
use std::cell::RefCell;
use std::rc::Rc;

pub type Journal = Rc<RefCell<Vec<String>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn entries(journal: &Journal) -> Vec<String> {
    journal.borrow().clone()
}

/// Control that records its state every time it is filled
pub struct Probe {
    base: ViewBase,
    control: ControlBase,
    journal: Journal,
}

impl Probe {
    pub fn new(referral: &str, journal: &Journal) -> Self {
        Self {
            base: ViewBase::new(referral),
            control: ControlBase::new(),
            journal: Rc::clone(journal),
        }
    }
}

impl View for Probe {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Panel
    }

    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn native_writes(&self) -> u64 {
        self.base.writes() + self.control.writes()
    }

    fn summary(&self) -> String {
        String::new()
    }

    slamui::view_capabilities!(bindable, control);
}

impl Bindable for Probe {
    fn fill_ui(&mut self) {
        self.journal.borrow_mut().push(format!(
            "fill {} hidden={} enabled={}",
            self.base.referral(),
            self.base.is_hidden(),
            self.control.is_enabled()
        ));
    }
}

impl Control for Probe {
    fn control(&self) -> &ControlBase {
        &self.control
    }

    fn control_mut(&mut self) -> &mut ControlBase {
        &mut self.control
    }
}
