//! Grouping nodes.

use crate::ui::core::{Bindable, View, ViewBase, WidgetKind};
use crate::view_capabilities;

/// A plain grouping node with no bindings.
///
/// Containers are never matched by referral lookups, but traversals still
/// visit their children. The top-level window of a tree is a container.
pub struct Container {
    base: ViewBase,
    window: bool,
}

impl Container {
    pub fn new() -> Self {
        Self {
            base: ViewBase::new(""),
            window: false,
        }
    }

    pub fn window() -> Self {
        Self {
            base: ViewBase::new(""),
            window: true,
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl View for Container {
    fn kind(&self) -> WidgetKind {
        if self.window {
            WidgetKind::Window
        } else {
            WidgetKind::Container
        }
    }

    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn native_writes(&self) -> u64 {
        self.base.writes()
    }

    fn summary(&self) -> String {
        String::new()
    }

    view_capabilities!();
}

/// A bindable grouping node.
///
/// Carries a referral and a visibility predicate but no content of its own,
/// which makes it the usual parent for a section that shows or hides as a
/// whole.
pub struct Panel {
    base: ViewBase,
    title: String,
}

impl Panel {
    pub fn new(referral: impl Into<String>) -> Self {
        Self {
            base: ViewBase::new(referral),
            title: String::new(),
        }
    }

    /// Static heading shown by the terminal host
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl View for Panel {
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
        self.base.writes()
    }

    fn summary(&self) -> String {
        self.title.clone()
    }

    view_capabilities!(bindable);
}

impl Bindable for Panel {
    fn fill_ui(&mut self) {}
}
