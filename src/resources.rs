//! Bundled resources
//!
//! Widgets can pull text and web content from a directory of bundled files
//! addressed by base name and extension. A missing or unreadable resource is
//! reported as absence: callers get `None` or empty text and a warning is
//! logged.

use crate::config::ResourcesConfig;
use crate::constants::{DEFAULT_BUNDLE_DIR, TEXT_RESOURCE_SUFFIX};
use log::warn;
use std::path::{Path, PathBuf};

/// Errors raised while reading a bundled resource
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("Resource '{0}' not found in bundle")]
    NotFound(String),

    #[error("Failed to read resource '{name}': {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// A directory of bundled files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBundle {
    root: PathBuf,
}

impl ResourceBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &ResourcesConfig) -> Self {
        Self::new(config.bundle_dir.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Locate `<name>.<suffix>` inside the bundle.
    ///
    /// Names that would escape the bundle directory never resolve.
    pub fn path_for(&self, name: &str, suffix: &str) -> Option<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return None;
        }

        let file_name = if suffix.is_empty() {
            name.to_string()
        } else {
            format!("{name}.{suffix}")
        };
        let path = self.root.join(file_name);
        path.is_file().then_some(path)
    }

    /// Read a bundled file as UTF-8 text
    pub fn load(&self, name: &str, suffix: &str) -> Result<String, ResourceError> {
        let path = self
            .path_for(name, suffix)
            .ok_or_else(|| ResourceError::NotFound(format!("{name}.{suffix}")))?;
        std::fs::read_to_string(&path).map_err(|source| ResourceError::Read {
            name: name.to_string(),
            source,
        })
    }

    /// Read the `.txt` resource with the given base name, or empty text
    pub fn read_text(&self, name: &str) -> String {
        match self.load(name, TEXT_RESOURCE_SUFFIX) {
            Ok(text) => text,
            Err(e) => {
                warn!("{e}");
                String::new()
            }
        }
    }
}

impl Default for ResourceBundle {
    fn default() -> Self {
        Self::new(DEFAULT_BUNDLE_DIR)
    }
}
