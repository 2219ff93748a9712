//! Plugin system configuration.

use serde::{Deserialize, Serialize};

/// Plugin system configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Whether to load compiled-in plugins on startup.
    #[serde(default = "default_true")]
    pub auto_load: bool,
    /// IDs of the plugins to load. An empty list loads every compiled-in
    /// plugin.
    #[serde(default)]
    pub enabled: Vec<String>,
}

impl PluginConfig {
    /// Whether a plugin with the given ID should be loaded.
    pub fn is_enabled(&self, plugin_id: &str) -> bool {
        self.enabled.is_empty() || self.enabled.iter().any(|id| id == plugin_id)
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            auto_load: default_true(),
            enabled: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
