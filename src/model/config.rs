use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::task::FilterMode;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Filter panel starts expanded
    #[serde(default = "default_true")]
    pub show_filters: bool,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    #[serde(default)]
    pub default_filter: FilterMode,
    /// Hex color overrides keyed by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_filters: true,
            show_key_hints: true,
            default_filter: FilterMode::All,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
