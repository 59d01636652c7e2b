use super::view::{View, WidgetKind};
use serde::Serialize;

/// What one node displays at the moment it was captured
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSnapshot {
    pub depth: usize,
    pub kind: WidgetKind,
    pub referral: String,
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    pub value: String,
}

impl NodeSnapshot {
    pub fn capture(depth: usize, widget: &dyn View) -> Self {
        Self {
            depth,
            kind: widget.kind(),
            referral: widget.base().referral().to_string(),
            hidden: widget.is_hidden(),
            enabled: widget.as_control().map(|control| control.is_enabled()),
            value: widget.summary(),
        }
    }
}
