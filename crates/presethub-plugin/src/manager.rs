//! Plugin manager — loads compiled-in plugins at process start.

use std::sync::Arc;

use tracing::info;

use presethub_core::result::AppResult;

use crate::registry::{Plugin, PluginInfo, PluginRegistry};
use crate::slots::registry::SlotRegistry;

/// Loads plugins exactly once and records their metadata.
#[derive(Debug)]
pub struct PluginManager {
    /// The shared slot registry plugins contribute into.
    slots: Arc<SlotRegistry>,
    /// Loaded plugin metadata.
    registry: PluginRegistry,
}

impl PluginManager {
    /// Creates a manager contributing into the given slot registry.
    pub fn new(slots: Arc<SlotRegistry>) -> Self {
        Self {
            slots,
            registry: PluginRegistry::new(),
        }
    }

    /// Loads a single plugin: records its metadata, then lets it issue
    /// its static contributions.
    ///
    /// Fails on a duplicate plugin ID before any contribution is made, so
    /// a double load never half-registers.
    pub fn load(&self, plugin: Arc<dyn Plugin>) -> AppResult<()> {
        let info = plugin.info();
        self.registry.record(info.clone())?;

        plugin.register(&self.slots);

        info!(
            plugin_id = %info.id,
            name = %info.name,
            version = %info.version,
            "Plugin loaded"
        );
        Ok(())
    }

    /// Loads a set of plugins in ascending load-priority order.
    pub fn load_all(&self, mut plugins: Vec<Arc<dyn Plugin>>) -> AppResult<()> {
        plugins.sort_by_key(|p| p.info().priority);
        for plugin in plugins {
            self.load(plugin)?;
        }
        Ok(())
    }

    /// Returns the slot registry plugins contribute into.
    pub fn slots(&self) -> &Arc<SlotRegistry> {
        &self.slots
    }

    /// Lists all loaded plugins.
    pub fn plugins(&self) -> Vec<PluginInfo> {
        self.registry.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::content::SlotContent;
    use crate::slots::registry::{Contribution, SlotName};

    #[derive(Debug)]
    struct Marker(&'static str);

    impl SlotContent for Marker {
        fn render(&self) -> String {
            self.0.to_string()
        }
    }

    #[derive(Debug)]
    struct TestPlugin {
        id: &'static str,
        priority: i32,
        slot: &'static str,
    }

    impl Plugin for TestPlugin {
        fn info(&self) -> PluginInfo {
            PluginInfo {
                id: self.id.to_string(),
                name: self.id.to_string(),
                version: "0.0.0".to_string(),
                description: String::new(),
                author: "tests".to_string(),
                priority: self.priority,
            }
        }

        fn register(&self, slots: &Arc<SlotRegistry>) {
            slots.register(
                &SlotName::from(self.slot),
                Contribution::new(Arc::new(Marker(self.id))),
            );
        }
    }

    #[test]
    fn test_load_all_orders_by_priority() {
        let slots = Arc::new(SlotRegistry::new());
        let manager = PluginManager::new(Arc::clone(&slots));

        manager
            .load_all(vec![
                Arc::new(TestPlugin {
                    id: "late",
                    priority: 20,
                    slot: "shared",
                }),
                Arc::new(TestPlugin {
                    id: "early",
                    priority: 1,
                    slot: "shared",
                }),
            ])
            .unwrap();

        // Same contribution priority, so load order decides.
        let rendered: Vec<String> = slots
            .list(&SlotName::from("shared"))
            .iter()
            .map(|c| c.render())
            .collect();
        assert_eq!(rendered, vec!["early", "late"]);
        assert_eq!(manager.plugins().len(), 2);
    }

    #[test]
    fn test_duplicate_plugin_id_rejected() {
        let slots = Arc::new(SlotRegistry::new());
        let manager = PluginManager::new(Arc::clone(&slots));

        let plugin = Arc::new(TestPlugin {
            id: "dup",
            priority: 0,
            slot: "shared",
        });
        manager.load(plugin.clone()).unwrap();
        assert!(manager.load(plugin).is_err());

        // The failed second load contributed nothing.
        assert_eq!(slots.count(&SlotName::from("shared")), 1);
    }
}
