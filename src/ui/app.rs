//! Application state for the terminal host

use super::core::{Interaction, NodeId, ViewTree};
use crate::config::UiConfig;
use crate::logger::Logger;
use crate::tasks::TaskRegistry;
use log::debug;

/// Work the host runs after an interaction fired, with the tree free to mutate.
///
/// Callbacks and tasks cannot reach the tree while it is dispatching; they
/// record intent in shared state and a hook acts on it here.
pub type AfterInteraction = Box<dyn FnMut(&mut ViewTree, NodeId)>;

/// Application state
pub struct App {
    pub tree: ViewTree,
    pub root: NodeId,
    pub registry: TaskRegistry,
    pub logger: Logger,
    pub config: UiConfig,
    pub focus: usize,
    pub should_quit: bool,
    pub show_help: bool,
    hooks: Vec<AfterInteraction>,
}

impl App {
    /// Create the app and bring the tree up to date.
    ///
    /// Resettable widgets are loaded first, then every data source is
    /// applied once.
    pub fn new(tree: ViewTree, root: NodeId, registry: TaskRegistry, logger: Logger, config: UiConfig) -> Self {
        let mut app = Self {
            tree,
            root,
            registry,
            logger,
            config,
            focus: 0,
            should_quit: false,
            show_help: true,
            hooks: Vec::new(),
        };
        app.tree.reset_ui(root);
        app.tree.update_ui(root);
        app
    }

    pub fn after_interaction(&mut self, hook: impl FnMut(&mut ViewTree, NodeId) + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// Interactive nodes that can receive gestures right now, in pre-order
    pub fn focusable(&self) -> Vec<NodeId> {
        self.tree
            .iter_dfs(self.root)
            .into_iter()
            .filter(|&id| self.is_reachable(id))
            .filter(|&id| {
                self.tree.get(id).is_some_and(|widget| {
                    widget.as_interactive().is_some()
                        && widget.as_control().map_or(true, |control| control.is_enabled())
                })
            })
            .collect()
    }

    /// Focused node, if anything can take focus
    pub fn focused(&self) -> Option<NodeId> {
        let focusable = self.focusable();
        if focusable.is_empty() {
            return None;
        }
        focusable.get(self.focus.min(focusable.len() - 1)).copied()
    }

    pub fn focus_next(&mut self) {
        let count = self.focusable().len();
        if count > 0 {
            self.focus = (self.focus.min(count - 1) + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.focusable().len();
        if count > 0 {
            self.focus = (self.focus.min(count - 1) + count - 1) % count;
        }
    }

    /// Send a gesture to the focused widget.
    ///
    /// Returns whether the widget fired. Hooks run after every fired event.
    pub fn dispatch(&mut self, interaction: Interaction) -> bool {
        let Some(target) = self.focused() else {
            return false;
        };

        let fired = self.tree.interact(target, interaction, &self.registry);
        if fired {
            for hook in &mut self.hooks {
                hook(&mut self.tree, self.root);
            }
        } else {
            debug!("Gesture on {target:?} produced no event");
        }
        fired
    }

    /// Whether `id` and all of its ancestors up to the root are shown
    pub fn is_reachable(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if self.tree.get(node).map_or(true, |widget| widget.is_hidden()) {
                return false;
            }
            if node == self.root {
                return true;
            }
            current = self.tree.parent(node);
        }
        false
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
