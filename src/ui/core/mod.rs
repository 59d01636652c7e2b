//! Core binding machinery.
//!
//! # Module Components
//!
//! - [`view`] - the `View` node trait and the bindable, control and
//!   resettable capabilities
//! - [`interaction`] - gestures, handler bundles and the interactive capability
//! - [`native`] - write-counting cells holding displayed values
//! - [`tree`] - the arena-backed tree with its update and reset passes
//! - [`snapshot`] - serializable capture of what a subtree displays
//!
//! # Render flow
//!
//! 1. The host wires data sources onto widgets found by referral
//! 2. [`ViewTree::update_ui`] renders once
//! 3. Gestures go through [`ViewTree::interact`], which fires the widget's
//!    handler and optionally re-renders the root view
//! 4. Structural changes call [`ViewTree::reset_ui`] before the next update

pub mod interaction;
pub mod native;
pub mod snapshot;
pub mod tree;
pub mod view;

pub use interaction::{ControlValue, Interaction, InteractionHandler, Interactive, PressClosure};
pub use native::Native;
pub use snapshot::NodeSnapshot;
pub use tree::{NodeId, ViewTree};
pub use view::{Bindable, Control, ControlBase, Resettable, View, ViewBase, WidgetKind};
