//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Widget list on top, one status line below
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        let top_height = area.height.saturating_sub(1);
        let top_area = Rect::new(area.x, area.y, area.width, top_height);
        let status_area = Rect::new(area.x, area.y + top_height, area.width, area.height.min(1));

        vec![top_area, status_area]
    }

    /// Split the top area into the widget list and, when shown, a help pane
    #[must_use]
    pub fn body_layout(area: Rect, show_help: bool) -> Vec<Rect> {
        if !show_help {
            return vec![area];
        }

        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area)
            .to_vec()
    }

    /// Indentation, in cells, for a node `depth` levels below the root
    #[must_use]
    pub fn indent(depth: usize) -> usize {
        depth.saturating_sub(1) * 2
    }
}
