//! Row content shared by list-like widgets.

use crate::ui::core::view::{IntClosure, StringArrayClosure, StringForIntClosure};

/// Where a list widget gets its rows from.
///
/// Only one source is meant to be set. If several are, the first of these
/// wins: the static list, the labels closure, then the count/item closures.
/// A count without an item closure yields empty titles.
#[derive(Default)]
pub(crate) struct RowSources {
    pub static_list: Option<Vec<String>>,
    pub labels: Option<StringArrayClosure>,
    pub count: Option<IntClosure>,
    pub item: Option<StringForIntClosure>,
}

impl RowSources {
    pub fn rows(&self) -> Vec<String> {
        if let Some(list) = &self.static_list {
            return list.clone();
        }

        if let Some(labels) = &self.labels {
            return labels();
        }

        if let Some(count) = &self.count {
            return (0..count())
                .map(|position| self.item.as_ref().map(|item| item(position)).unwrap_or_default())
                .collect();
        }

        Vec::new()
    }
}

/// Selection after moving one row forward or backward.
///
/// From no selection, forward lands on the first row and backward on the
/// last. Movement stops at either end. Empty lists have no selection.
pub(crate) fn step_selection(current: Option<usize>, count: usize, forward: bool) -> Option<usize> {
    let last = count.checked_sub(1)?;
    Some(match (current, forward) {
        (None, true) => 0,
        (None, false) => last,
        (Some(row), true) => (row + 1).min(last),
        (Some(row), false) => row.saturating_sub(1).min(last),
    })
}
