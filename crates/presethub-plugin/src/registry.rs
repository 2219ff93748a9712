//! Plugin registry — stores metadata for loaded plugins.

use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use presethub_core::error::AppError;
use presethub_core::result::AppResult;

use crate::slots::registry::SlotRegistry;

/// Metadata about a loaded plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Unique plugin identifier.
    pub id: String,
    /// Human-readable plugin name.
    pub name: String,
    /// Plugin version string.
    pub version: String,
    /// Plugin description.
    pub description: String,
    /// Author or maintainer.
    pub author: String,
    /// Load priority (lower = loaded first).
    pub priority: i32,
}

/// Trait that all plugins must implement.
///
/// A plugin is loaded exactly once per process; `register` runs at load
/// time and issues the plugin's static slot contributions.
pub trait Plugin: Send + Sync + std::fmt::Debug {
    /// Returns plugin metadata.
    fn info(&self) -> PluginInfo;

    /// Called once when the plugin is loaded. Registers the plugin's
    /// static contributions into the given slot registry.
    fn register(&self, slots: &Arc<SlotRegistry>);
}

/// Registry of all loaded plugins.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    /// Plugin ID → metadata.
    metadata: DashMap<String, PluginInfo>,
}

impl PluginRegistry {
    /// Creates a new empty plugin registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a loaded plugin. Rejects a duplicate ID: the loading
    /// mechanism guarantees single invocation per process, and a second
    /// load would double-register every static contribution.
    pub fn record(&self, info: PluginInfo) -> AppResult<()> {
        if self.metadata.contains_key(&info.id) {
            return Err(AppError::plugin(format!(
                "Plugin '{}' is already registered",
                info.id
            )));
        }
        self.metadata.insert(info.id.clone(), info);
        Ok(())
    }

    /// Lists all registered plugin metadata, by load priority.
    pub fn list(&self) -> Vec<PluginInfo> {
        let mut infos: Vec<PluginInfo> = self
            .metadata
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        infos.sort_by_key(|info| (info.priority, info.id.clone()));
        infos
    }

    /// Returns plugin count.
    pub fn count(&self) -> usize {
        self.metadata.len()
    }

    /// Checks whether a plugin is registered.
    pub fn contains(&self, plugin_id: &str) -> bool {
        self.metadata.contains_key(plugin_id)
    }
}
