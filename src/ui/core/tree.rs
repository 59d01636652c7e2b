//! The display hierarchy and its reconciliation passes.
//!
//! [`ViewTree`] owns every node in an arena. Parents own their children:
//! removing a node drops its whole subtree. Two traversals keep the tree in
//! sync with application state:
//!
//! - [`ViewTree::update_ui`] re-evaluates visibility, enablement and each
//!   bindable widget's data sources, touching native state only on change.
//! - [`ViewTree::reset_ui`] reloads the content of resettable widgets.
//!
//! Traversals borrow the tree mutably for their whole duration, so a data
//! source can never start a nested traversal.

use super::interaction::Interaction;
use super::snapshot::NodeSnapshot;
use super::view::{View, WidgetKind};
use crate::tasks::TaskRegistry;
use crate::ui::components::Container;
use log::{debug, trace};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a node in a [`ViewTree`]
    pub struct NodeId;
}

struct Node {
    widget: Box<dyn View>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed widget tree
pub struct ViewTree {
    nodes: SlotMap<NodeId, Node>,
    window: Option<NodeId>,
}

impl ViewTree {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            window: None,
        }
    }

    /// Create a tree with a top-level display container.
    ///
    /// Root lookups stop at the direct children of the window.
    pub fn with_window() -> (Self, NodeId) {
        let mut tree = Self::new();
        let window = tree.insert(Container::window());
        tree.window = Some(window);
        (tree, window)
    }

    pub fn window(&self) -> Option<NodeId> {
        self.window
    }

    /// Insert a detached node
    pub fn insert(&mut self, widget: impl View) -> NodeId {
        self.nodes.insert(Node {
            widget: Box::new(widget),
            parent: None,
            children: Vec::new(),
        })
    }

    /// Insert a node as the last child of `parent`.
    ///
    /// Returns `None` when `parent` is not in the tree.
    pub fn add_child(&mut self, parent: NodeId, widget: impl View) -> Option<NodeId> {
        if !self.nodes.contains_key(parent) {
            return None;
        }
        let id = self.insert(widget);
        self.attach(parent, id);
        Some(id)
    }

    /// Move an existing node (and its subtree) under `parent`.
    ///
    /// Fails if either node is missing or if `parent` lies inside the
    /// subtree of `child`.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> bool {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            return false;
        }
        if self.is_ancestor_or_self(child, parent) {
            return false;
        }

        self.detach(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
        true
    }

    /// Remove a node and everything below it
    pub fn remove(&mut self, id: NodeId) {
        if !self.nodes.contains_key(id) {
            return;
        }
        self.detach(id);
        self.drop_subtree(id);
    }

    fn drop_subtree(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.remove(id) {
            for child in node.children {
                self.drop_subtree(child);
            }
        }
        if self.window == Some(id) {
            self.window = None;
        }
    }

    fn detach(&mut self, id: NodeId) {
        let parent = self.nodes.get_mut(id).and_then(|node| node.parent.take());
        if let Some(parent) = parent {
            if let Some(siblings) = self.nodes.get_mut(parent).map(|node| &mut node.children) {
                siblings.retain(|&c| c != id);
            }
        }
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map(|node| node.children.as_slice()).unwrap_or(&[])
    }

    pub fn get(&self, id: NodeId) -> Option<&dyn View> {
        self.nodes.get(id).map(|node| node.widget.as_ref())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut dyn View> {
        self.nodes.get_mut(id).map(|node| node.widget.as_mut())
    }

    /// Borrow a node as its concrete widget type
    pub fn element<T: View>(&self, id: NodeId) -> Option<&T> {
        self.get(id).and_then(|widget| widget.as_any().downcast_ref::<T>())
    }

    pub fn element_mut<T: View>(&mut self, id: NodeId) -> Option<&mut T> {
        self.get_mut(id).and_then(|widget| widget.as_any_mut().downcast_mut::<T>())
    }

    /// Pre-order node ids of the subtree rooted at `id`
    pub fn iter_dfs(&self, id: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let Some(node) = self.nodes.get(next) else {
                continue;
            };
            order.push(next);
            stack.extend(node.children.iter().rev().copied());
        }
        order
    }

    /// Depth of `id` below `ancestor`, or `None` if it is not a descendant
    pub fn depth_below(&self, ancestor: NodeId, id: NodeId) -> Option<usize> {
        let mut depth = 0;
        let mut current = id;
        while current != ancestor {
            current = self.parent(current)?;
            depth += 1;
        }
        Some(depth)
    }

    /// Re-render the subtree rooted at `id`
    pub fn update_ui(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        update_node(node.widget.as_mut());

        let mut index = 0;
        while let Some(child) = self.nodes.get(id).and_then(|node| node.children.get(index)).copied() {
            self.update_ui(child);
            index += 1;
        }
    }

    /// Reload every resettable widget in the subtree rooted at `id`
    pub fn reset_ui(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        if let Some(resettable) = node.widget.as_resettable_mut() {
            resettable.reload_ui();
        }

        let mut index = 0;
        while let Some(child) = self.nodes.get(id).and_then(|node| node.children.get(index)).copied() {
            self.reset_ui(child);
            index += 1;
        }
    }

    /// Re-render the root view containing `id`
    pub fn update_root_ui(&mut self, id: NodeId) {
        if let Some(root) = self.find_root_view(id) {
            self.update_ui(root);
        }
    }

    /// Reload the root view containing `id`
    pub fn reset_root_ui(&mut self, id: NodeId) {
        if let Some(root) = self.find_root_view(id) {
            self.reset_ui(root);
        }
    }

    /// Topmost ancestor of `id` that is not the window.
    ///
    /// A node without a parent is its own root.
    pub fn find_root_view(&self, id: NodeId) -> Option<NodeId> {
        if !self.nodes.contains_key(id) {
            return None;
        }
        let mut view = id;
        while let Some(next) = self.parent(view) {
            if Some(next) == self.window {
                break;
            }
            view = next;
        }
        Some(view)
    }

    /// First bindable node in pre-order whose referral equals `referral`.
    ///
    /// The search includes `id` itself. Referrals are not required to be
    /// unique; later matches are unreachable through this lookup.
    pub fn find_element(&self, id: NodeId, referral: &str) -> Option<NodeId> {
        let node = self.nodes.get(id)?;
        if let Some(bindable) = node.widget.as_bindable() {
            if bindable.referral() == referral {
                return Some(id);
            }
        }

        node.children
            .iter()
            .find_map(|&child| self.find_element(child, referral))
    }

    /// [`find_element`](Self::find_element) restricted to widgets of type `T`.
    ///
    /// Returns `None` when the first match has another type.
    pub fn find_as<T: View>(&self, id: NodeId, referral: &str) -> Option<NodeId> {
        self.find_element(id, referral)
            .filter(|&found| self.element::<T>(found).is_some())
    }

    /// Look up a widget by referral and configure it in place.
    ///
    /// Returns whether a widget of type `T` was found.
    pub fn with_element<T: View>(&mut self, id: NodeId, referral: &str, configure: impl FnOnce(&mut T)) -> bool {
        let Some(found) = self.find_as::<T>(id, referral) else {
            debug!("No {} named '{referral}'", std::any::type_name::<T>());
            return false;
        };
        match self.element_mut::<T>(found) {
            Some(widget) => {
                configure(widget);
                true
            }
            None => false,
        }
    }

    /// Deliver a gesture to an interactive widget and dispatch its handler.
    ///
    /// Hidden widgets and disabled controls ignore gestures. When the
    /// gesture produces an event, the handler runs its direct callback, then
    /// its task through `registry`, then re-renders the root view if its
    /// cascade flag is set. Returns whether the event fired.
    pub fn interact(&mut self, id: NodeId, interaction: Interaction, registry: &TaskRegistry) -> bool {
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        let widget = node.widget.as_mut();
        if widget.is_hidden() {
            return false;
        }
        if widget.as_control().is_some_and(|control| !control.is_enabled()) {
            return false;
        }
        let Some(interactive) = widget.as_interactive_mut() else {
            return false;
        };
        if !interactive.apply(&interaction) {
            return false;
        }

        let value = interactive.control_value();
        let handler = interactive.handler();
        debug!("Interaction {interaction:?} fired, value {value:?}");

        if let Some(action) = handler.press_action() {
            action(&value);
        }
        if !handler.task().is_empty() {
            registry.run_task(handler.task(), handler.param());
        }
        let cascade = handler.auto_ui();

        if cascade {
            self.update_root_ui(id);
        }
        true
    }

    /// Sum of native writes across the subtree rooted at `id`
    pub fn native_writes(&self, id: NodeId) -> u64 {
        self.iter_dfs(id)
            .into_iter()
            .filter_map(|node| self.get(node))
            .map(|widget| widget.native_writes())
            .sum()
    }

    /// Flattened, pre-order view of what the subtree currently displays
    pub fn snapshot(&self, id: NodeId) -> Vec<NodeSnapshot> {
        self.iter_dfs(id)
            .into_iter()
            .filter_map(|node| {
                let widget = self.get(node)?;
                let depth = self.depth_below(id, node)?;
                Some(NodeSnapshot::capture(depth, widget))
            })
            .collect()
    }

    pub fn snapshot_json(&self, id: NodeId) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot(id))
    }

    pub fn kind(&self, id: NodeId) -> Option<WidgetKind> {
        self.get(id).map(|widget| widget.kind())
    }
}

impl Default for ViewTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one node: hide early, refresh enablement, fill, show late
fn update_node(widget: &mut dyn View) {
    let Some(bindable) = widget.as_bindable() else {
        return;
    };
    let currently_visible = !widget.is_hidden();
    let want_visible = bindable.base().wanted_visibility();

    if !want_visible && currently_visible {
        trace!("Hiding '{}'", bindable.referral());
        widget.set_hidden(true);
    }

    if let Some(control) = widget.as_control_mut() {
        control.control_mut().refresh();
    }

    if let Some(bindable) = widget.as_bindable_mut() {
        bindable.fill_ui();
    }

    if want_visible && !currently_visible {
        widget.set_hidden(false);
    }
}
