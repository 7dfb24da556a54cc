//! Navigation configuration, loaded from TOML.
//!
//! Configuration is passed explicitly into the [`crate::Orchestrator`];
//! there is no process-wide singleton. The one setting this core consumes
//! is the focus-manager priority list: when the array is present, focus
//! management is enabled (last-focus marking on leave, focus resolution on
//! enter); when absent, both are disabled entirely.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the navigation core.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NavConfig {
    /// Focus management settings.
    pub focus: FocusConfig,
}

/// Focus-manager configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FocusConfig {
    /// Ordered focus priority categories (`content`, `heading`, `banner`),
    /// consulted when no last-focus marker is found in the entering view.
    /// Unrecognized names are kept and warned about at resolution time.
    /// `None` disables focus management.
    pub priorities: Option<Vec<String>>,
}

impl NavConfig {
    /// Configuration with focus management enabled and the standard
    /// category order.
    pub fn with_default_focus() -> Self {
        Self {
            focus: FocusConfig {
                priorities: Some(vec![
                    "content".to_string(),
                    "heading".to_string(),
                    "banner".to_string(),
                ]),
            },
        }
    }

    /// Whether the focus manager is enabled (a priority array is present).
    pub fn focus_enabled(&self) -> bool {
        self.focus.priorities.is_some()
    }

    /// Parse configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from `vista.toml` in the current directory, falling back to the
    /// default (focus management disabled) if the file is missing or broken.
    pub fn load_or_default() -> Self {
        Self::load_from_file("vista.toml").unwrap_or_default()
    }
}
