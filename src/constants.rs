//! Constants used throughout the crate
//!
//! This module centralizes sentinel strings, resource suffixes and the
//! limits used when validating configuration.

// Web content
pub const BLANK_PAGE: &str = "about:blank";
pub const DEFAULT_WEB_SUFFIX: &str = "html";

// Bundled text resources
pub const TEXT_RESOURCE_SUFFIX: &str = "txt";
pub const DEFAULT_BUNDLE_DIR: &str = "resources";

// Config file locations
pub const APP_NAME: &str = "slamui";
pub const LOCAL_CONFIG_FILE: &str = "slamui.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "slamui.log";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

// Terminal host timing
pub const TICK_RATE_MIN_MS: u64 = 10;
pub const TICK_RATE_MAX_MS: u64 = 1000;
pub const TICK_RATE_DEFAULT_MS: u64 = 100;

// Widget defaults
pub const STEPPER_DEFAULT_MAX: f64 = 100.0;
pub const STEPPER_DEFAULT_STEP: f64 = 1.0;

// Terminal host text
pub const HELP_LINE: &str =
    "Tab/↓: next • Shift-Tab/↑: prev • Enter/Space: press • ←/→: adjust • r: reload • ?: help • q: quit";
pub const FOCUS_MARKER: &str = "▶ ";
pub const NO_FOCUS_MARKER: &str = "  ";
