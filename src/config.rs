//! Viewer configuration
//!
//! Defaults target the public demo API; a YAML file or CLI flags can
//! override any field.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default content API base URL
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Configuration for the blog view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Content API base URL
    pub base_url: String,
    /// Posts per page
    pub page_size: usize,
    /// Directly visible page buttons in the control
    pub max_visible: usize,
    /// Search input quiet window, in milliseconds
    pub debounce_ms: u64,
    /// File backing the session slot; in-memory when unset
    pub session_file: Option<PathBuf>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: crate::view::DEFAULT_PAGE_SIZE,
            max_visible: crate::view::DEFAULT_MAX_VISIBLE,
            debounce_ms: 300,
            session_file: None,
        }
    }
}

impl ViewConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&contents)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field constraints
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::InvalidConfigValue {
                field: "base_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.page_size == 0 {
            return Err(Error::InvalidConfigValue {
                field: "page_size".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if self.max_visible == 0 {
            return Err(Error::InvalidConfigValue {
                field: "max_visible".to_string(),
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}
