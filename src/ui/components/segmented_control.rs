//! Segmented control.
//!
//! The label data source drives both the number of segments and their
//! titles. When the count is unchanged titles are replaced in place and the
//! selection is kept. When the count changes the segments are rebuilt and
//! the selection is pulled back into range with [`clamp_selection`].

use super::rows::step_selection;
use crate::ui::core::view::{OptionalIntClosure, StringArrayClosure};
use crate::ui::core::{
    Bindable, Control, ControlBase, ControlValue, Interaction, InteractionHandler, Interactive, Native, View, ViewBase,
    WidgetKind,
};
use crate::view_capabilities;
use log::trace;

/// Selection after rebuilding to `new_count` segments.
///
/// Keeps "no selection" as is, keeps an index that is still valid and
/// otherwise moves it to the last segment. An empty control has no
/// selection.
pub fn clamp_selection(old: Option<usize>, new_count: usize) -> Option<usize> {
    let last = new_count.checked_sub(1)?;
    old.map(|index| index.min(last))
}

/// Row of mutually exclusive segments
pub struct SegmentedControl {
    base: ViewBase,
    control: ControlBase,
    handler: InteractionHandler,
    segments: Native<Vec<String>>,
    selected: Native<Option<usize>>,
    current_labels: Vec<String>,
    label_array_data_source: Option<StringArrayClosure>,
    current_segment_data_source: Option<OptionalIntClosure>,
}

impl SegmentedControl {
    pub fn new(referral: impl Into<String>) -> Self {
        Self {
            base: ViewBase::new(referral),
            control: ControlBase::new(),
            handler: InteractionHandler::new(),
            segments: Native::new(Vec::new()),
            selected: Native::new(None),
            current_labels: Vec::new(),
            label_array_data_source: None,
            current_segment_data_source: None,
        }
    }

    /// Start with fixed segments, none selected
    pub fn with_segments<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        self.segments = Native::new(labels);
        self
    }

    pub fn segments(&self) -> &[String] {
        self.segments.get()
    }

    pub fn number_of_segments(&self) -> usize {
        self.segments().len()
    }

    /// Selected segment, `None` when nothing is selected
    pub fn current_segment(&self) -> Option<usize> {
        self.selected.value()
    }

    /// Select a segment directly. Out-of-range indices are ignored.
    pub fn set_current_segment(&mut self, segment: Option<usize>) -> bool {
        match segment {
            Some(index) if index >= self.number_of_segments() => false,
            _ => self.selected.update(segment),
        }
    }

    pub fn set_label_array_data_source(&mut self, source: impl Fn() -> Vec<String> + 'static) {
        self.label_array_data_source = Some(Box::new(source));
    }

    pub fn set_current_segment_data_source(&mut self, source: impl Fn() -> Option<usize> + 'static) {
        self.current_segment_data_source = Some(Box::new(source));
    }

    fn apply_labels(&mut self, labels: Vec<String>) {
        if labels == self.current_labels {
            return;
        }

        if labels.len() == self.number_of_segments() {
            self.segments.update(labels.clone());
        } else {
            let selection = clamp_selection(self.current_segment(), labels.len());
            trace!(
                "Rebuilding '{}' from {} to {} segments",
                self.base.referral(),
                self.number_of_segments(),
                labels.len()
            );
            self.segments.set(labels.clone());
            self.selected.update(selection);
        }

        self.current_labels = labels;
    }

    fn step(&mut self, forward: bool) -> bool {
        match step_selection(self.current_segment(), self.number_of_segments(), forward) {
            Some(next) => self.selected.update(Some(next)),
            None => false,
        }
    }
}

impl View for SegmentedControl {
    fn kind(&self) -> WidgetKind {
        WidgetKind::SegmentedControl
    }

    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn native_writes(&self) -> u64 {
        self.base.writes() + self.control.writes() + self.segments.writes() + self.selected.writes()
    }

    fn summary(&self) -> String {
        self.segments()
            .iter()
            .enumerate()
            .map(|(index, title)| {
                if Some(index) == self.current_segment() {
                    format!("[{title}]")
                } else {
                    format!(" {title} ")
                }
            })
            .collect::<Vec<_>>()
            .join("|")
    }

    view_capabilities!(bindable, control, interactive);
}

impl Bindable for SegmentedControl {
    fn fill_ui(&mut self) {
        if let Some(source) = &self.label_array_data_source {
            let labels = source();
            self.apply_labels(labels);
        }

        if let Some(source) = &self.current_segment_data_source {
            let segment = source();
            self.set_current_segment(segment);
        }
    }
}

impl Control for SegmentedControl {
    fn control(&self) -> &ControlBase {
        &self.control
    }

    fn control_mut(&mut self) -> &mut ControlBase {
        &mut self.control
    }
}

impl Interactive for SegmentedControl {
    fn handler(&self) -> &InteractionHandler {
        &self.handler
    }

    fn handler_mut(&mut self) -> &mut InteractionHandler {
        &mut self.handler
    }

    fn apply(&mut self, interaction: &Interaction) -> bool {
        match interaction {
            Interaction::Select(segment) => self.set_current_segment(*segment),
            Interaction::Increment => self.step(true),
            Interaction::Decrement => self.step(false),
            _ => false,
        }
    }

    fn control_value(&self) -> ControlValue {
        ControlValue::Index(self.current_segment())
    }
}
