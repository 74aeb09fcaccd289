use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::MarkupResult;

/// Rendering options, loadable from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Wrap the body in a complete HTML page.
    pub full_page: bool,
    /// Emit the page-level tooltip activation script.
    pub activate_tooltips: bool,
    pub lang: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            full_page: true,
            activate_tooltips: true,
            lang: "en".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn fragment() -> Self {
        Self {
            full_page: false,
            ..Self::default()
        }
    }

    pub fn from_yaml(yaml: &str) -> MarkupResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> MarkupResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}
