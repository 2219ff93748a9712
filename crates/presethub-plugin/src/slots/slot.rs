//! Slot — a named facade over the registry with two registration modes
//! and one read mode.

use std::sync::Arc;

use super::content::SlotContent;
use super::registry::{Contribution, DEFAULT_PRIORITY, SlotName, SlotRegistry};
use super::scoped::{DependencySet, ScopedPlug};

/// A named extension point backed by one registry entry.
///
/// Cheap to construct and clone; every `Slot` for the same name on the
/// same registry targets the same underlying contribution list.
#[derive(Debug, Clone)]
pub struct Slot {
    name: SlotName,
    registry: Arc<SlotRegistry>,
}

impl Slot {
    /// Creates a facade for the named slot. The slot itself is created
    /// lazily in the registry on first registration.
    pub fn new(registry: Arc<SlotRegistry>, name: impl Into<SlotName>) -> Self {
        Self {
            name: name.into(),
            registry,
        }
    }

    /// The slot's name.
    pub fn name(&self) -> &SlotName {
        &self.name
    }

    /// Registers a static contribution with the default priority.
    ///
    /// Used by plugin modules that run once at process start. Static
    /// contributions live for the process lifetime; there is no unplug in
    /// this mode.
    pub fn plug(&self, content: Arc<dyn SlotContent>) {
        self.plug_with_priority(content, DEFAULT_PRIORITY);
    }

    /// Registers a static contribution with an explicit priority (lower
    /// renders earlier).
    pub fn plug_with_priority(&self, content: Arc<dyn SlotContent>, priority: i32) {
        self.registry
            .register(&self.name, Contribution::new(content).with_priority(priority));
    }

    /// Registers a lifecycle-scoped contribution with the default
    /// priority.
    ///
    /// The returned guard owns the registration: drop it (or call
    /// [`ScopedPlug::release`]) when the owner deactivates, and call
    /// [`ScopedPlug::update`] on re-activation.
    #[must_use = "dropping the guard immediately unregisters the contribution"]
    pub fn plug_scoped(&self, content: Arc<dyn SlotContent>, deps: DependencySet) -> ScopedPlug {
        self.plug_scoped_with_priority(content, DEFAULT_PRIORITY, deps)
    }

    /// Registers a lifecycle-scoped contribution with an explicit
    /// priority.
    #[must_use = "dropping the guard immediately unregisters the contribution"]
    pub fn plug_scoped_with_priority(
        &self,
        content: Arc<dyn SlotContent>,
        priority: i32,
        deps: DependencySet,
    ) -> ScopedPlug {
        ScopedPlug::new(
            Arc::clone(&self.registry),
            self.name.clone(),
            priority,
            content,
            deps,
        )
    }

    /// Returns the slot's contents in `(priority, registration order)`
    /// order.
    pub fn render(&self) -> Vec<Arc<dyn SlotContent>> {
        self.registry.list(&self.name)
    }

    /// Like [`render`](Self::render), but returns the fallback as a
    /// one-element sequence when the slot is empty, so a page always has
    /// something to show.
    pub fn render_or(&self, fallback: Arc<dyn SlotContent>) -> Vec<Arc<dyn SlotContent>> {
        let contents = self.render();
        if contents.is_empty() {
            vec![fallback]
        } else {
            contents
        }
    }

    /// Whether the slot currently has no contributions.
    pub fn is_empty(&self) -> bool {
        !self.registry.has_contributions(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Chip(&'static str);

    impl SlotContent for Chip {
        fn render(&self) -> String {
            self.0.to_string()
        }
    }

    fn chip(text: &'static str) -> Arc<dyn SlotContent> {
        Arc::new(Chip(text))
    }

    #[test]
    fn test_same_name_converges_on_one_list() {
        let registry = Arc::new(SlotRegistry::new());
        let from_plugin_a = Slot::new(Arc::clone(&registry), "navbar.menu");
        let from_plugin_b = Slot::new(Arc::clone(&registry), "navbar.menu");

        from_plugin_a.plug_with_priority(chip("community"), 10);
        from_plugin_b.plug_with_priority(chip("editor picks"), 30);

        let rendered: Vec<String> = from_plugin_a.render().iter().map(|c| c.render()).collect();
        assert_eq!(rendered, vec!["community", "editor picks"]);
    }

    #[test]
    fn test_render_or_falls_back_when_empty() {
        let registry = Arc::new(SlotRegistry::new());
        let slot = Slot::new(Arc::clone(&registry), "preset_detail.sidebar");

        let rendered: Vec<String> = slot
            .render_or(chip("nothing here yet"))
            .iter()
            .map(|c| c.render())
            .collect();
        assert_eq!(rendered, vec!["nothing here yet"]);

        slot.plug(chip("related presets"));
        let rendered: Vec<String> = slot
            .render_or(chip("nothing here yet"))
            .iter()
            .map(|c| c.render())
            .collect();
        assert_eq!(rendered, vec!["related presets"]);
    }

    #[test]
    fn test_is_empty_reflects_scoped_lifecycle() {
        let registry = Arc::new(SlotRegistry::new());
        let slot = Slot::new(Arc::clone(&registry), "page.breadcrumbs");
        assert!(slot.is_empty());

        let plug = slot.plug_scoped(chip("home / gallery"), DependencySet::new());
        assert!(!slot.is_empty());
        drop(plug);
        assert!(slot.is_empty());
    }
}
