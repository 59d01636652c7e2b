//! slamui - declarative data binding for widget trees
//!
//! Widgets expose optional closures ("data sources") that compute what they
//! display. A reconciliation pass walks the tree, re-evaluates those
//! closures and writes to a widget's native state only when a value changed.
//! Interactive widgets can dispatch named tasks through a registry instead
//! of holding direct references to their actions.
//!
//! # Modules
//!
//! * [`ui`] - widget tree, widgets and the terminal host
//! * [`tasks`] - named task registry
//! * [`resources`] - bundled text and web files
//! * [`config`] - application configuration management
//! * [`logger`] - log backend setup and in-memory log buffer
//! * [`demo`] - the screen shown by the `slamui` binary

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Demo screen used by the binary
pub mod demo;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Bundled resource lookup
pub mod resources;

/// Named task registry
pub mod tasks;

/// Widget tree, widgets and terminal host
pub mod ui;

pub use tasks::TaskRegistry;
pub use ui::core::{NodeId, ViewTree};
