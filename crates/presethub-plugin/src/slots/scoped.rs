//! Lifecycle-scoped registration.
//!
//! A [`ScopedPlug`] pairs register-on-activate with unregister-on-
//! deactivate: the guard registers on construction and removes its
//! contribution when released or dropped, on every exit path. Between
//! activations the contribution is retained as long as the owner's
//! dependency set is value-equal, so re-rendering the owner never
//! produces flicker or duplicate entries.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::content::SlotContent;
use super::registry::{Contribution, ContributionHandle, SlotName, SlotRegistry};

/// The set of external values a scoped contribution depends on.
///
/// Compared by value: a freshly constructed but structurally equal set
/// counts as unchanged. The set must include every input that affects the
/// contributed content's meaning, or a stale contribution will survive
/// past its validity window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet(Vec<Value>);

impl DependencySet {
    /// Create an empty dependency set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dependency value.
    pub fn with(mut self, value: impl Into<Value>) -> Self {
        self.0.push(value.into());
        self
    }

    /// Number of values in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Value>> for DependencySet {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

/// Guard owning one lifecycle-scoped contribution.
///
/// Created through [`Slot::plug_scoped`](super::slot::Slot::plug_scoped).
/// Dropping the guard removes the contribution synchronously; by the time
/// the owner is gone, subsequent `list` calls no longer include it.
#[derive(Debug)]
pub struct ScopedPlug {
    registry: Arc<SlotRegistry>,
    slot: SlotName,
    priority: i32,
    deps: DependencySet,
    handle: Option<ContributionHandle>,
}

impl ScopedPlug {
    pub(crate) fn new(
        registry: Arc<SlotRegistry>,
        slot: SlotName,
        priority: i32,
        content: Arc<dyn SlotContent>,
        deps: DependencySet,
    ) -> Self {
        let handle = registry.register(
            &slot,
            Contribution::new(content).with_priority(priority).scoped(),
        );
        Self {
            registry,
            slot,
            priority,
            deps,
            handle: Some(handle),
        }
    }

    /// Re-activates the contribution with possibly new content and
    /// dependencies.
    ///
    /// If `deps` is value-equal to the current baseline the registration
    /// is retained unchanged, including its content. If `deps` changed,
    /// the previous contribution is unregistered **before** the new one is
    /// registered, so the slot never holds two generations of this call
    /// site at once.
    ///
    /// # Panics
    ///
    /// Panics if the guard was already released: registering outside the
    /// owner's active lifetime would leak an unremovable contribution.
    pub fn update(&mut self, content: Arc<dyn SlotContent>, deps: DependencySet) {
        let Some(previous) = self.handle.take() else {
            panic!(
                "scoped contribution for slot `{}` was already released; \
                 create a new one with plug_scoped",
                self.slot
            );
        };

        if self.deps == deps {
            // Unchanged dependencies: keep the existing registration.
            self.handle = Some(previous);
            return;
        }

        self.registry.unregister(&previous);
        let handle = self.registry.register(
            &self.slot,
            Contribution::new(content)
                .with_priority(self.priority)
                .scoped(),
        );
        debug!(
            slot = %self.slot,
            old_seq = previous.sequence(),
            new_seq = handle.sequence(),
            "Scoped contribution replaced after dependency change"
        );
        self.deps = deps;
        self.handle = Some(handle);
    }

    /// Removes the contribution. Releasing twice is a no-op.
    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.registry.unregister(&handle);
            debug!(slot = %self.slot, seq = handle.sequence(), "Scoped contribution released");
        }
    }

    /// Whether the contribution is currently registered.
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// The handle of the current registration, if active.
    pub fn handle(&self) -> Option<&ContributionHandle> {
        self.handle.as_ref()
    }
}

impl Drop for ScopedPlug {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::slot::Slot;
    use serde_json::json;

    #[derive(Debug)]
    struct Note(String);

    impl SlotContent for Note {
        fn render(&self) -> String {
            self.0.clone()
        }
    }

    fn note(text: &str) -> Arc<dyn SlotContent> {
        Arc::new(Note(text.to_string()))
    }

    fn rendered(registry: &SlotRegistry, slot: &SlotName) -> Vec<String> {
        registry.list(slot).iter().map(|c| c.render()).collect()
    }

    fn breadcrumb_slot(registry: &Arc<SlotRegistry>) -> Slot {
        Slot::new(Arc::clone(registry), "page.breadcrumbs")
    }

    #[test]
    fn test_unchanged_deps_keep_single_entry_and_first_content() {
        let registry = Arc::new(SlotRegistry::new());
        let slot = breadcrumb_slot(&registry);
        let mut plug = slot.plug_scoped(
            note("crumbs: street"),
            DependencySet::new().with(json!("street")),
        );
        // Re-render of the owner: structurally equal, freshly built set.
        plug.update(
            note("crumbs: street (rebuilt)"),
            DependencySet::new().with(json!("street")),
        );

        let contents = rendered(&registry, slot.name());
        assert_eq!(contents, vec!["crumbs: street"]);
        assert!(plug.is_active());
    }

    #[test]
    fn test_changed_deps_replace_content_without_duplicates() {
        let registry = Arc::new(SlotRegistry::new());
        let slot = breadcrumb_slot(&registry);

        let mut plug = slot.plug_scoped(
            note("crumbs: street"),
            DependencySet::new().with(json!("street")),
        );
        plug.update(
            note("crumbs: portrait"),
            DependencySet::new().with(json!("portrait")),
        );

        let contents = rendered(&registry, slot.name());
        assert_eq!(contents, vec!["crumbs: portrait"]);
        assert_eq!(registry.count(slot.name()), 1);
    }

    #[test]
    fn test_replacement_moves_to_back_of_priority_band() {
        let registry = Arc::new(SlotRegistry::new());
        let slot = breadcrumb_slot(&registry);

        let mut plug = slot.plug_scoped(note("mine"), DependencySet::new().with(json!(1)));
        slot.plug(note("static"));

        plug.update(note("mine v2"), DependencySet::new().with(json!(2)));

        // The replacement registered after "static", so it ties on
        // priority and loses on registration order.
        assert_eq!(rendered(&registry, slot.name()), vec!["static", "mine v2"]);
    }

    #[test]
    fn test_drop_removes_contribution() {
        let registry = Arc::new(SlotRegistry::new());
        let slot = breadcrumb_slot(&registry);

        {
            let _plug = slot.plug_scoped(note("transient"), DependencySet::new());
            assert_eq!(registry.count(slot.name()), 1);
        }
        assert_eq!(registry.count(slot.name()), 0);
        assert!(registry.list(slot.name()).is_empty());
    }

    #[test]
    fn test_release_twice_is_noop() {
        let registry = Arc::new(SlotRegistry::new());
        let slot = breadcrumb_slot(&registry);

        let mut plug = slot.plug_scoped(note("once"), DependencySet::new());
        plug.release();
        assert!(!plug.is_active());
        plug.release();
        assert_eq!(registry.count(slot.name()), 0);
    }

    #[test]
    #[should_panic(expected = "already released")]
    fn test_update_after_release_panics() {
        let registry = Arc::new(SlotRegistry::new());
        let slot = breadcrumb_slot(&registry);

        let mut plug = slot.plug_scoped(note("gone"), DependencySet::new());
        plug.release();
        plug.update(note("orphan"), DependencySet::new().with(json!(1)));
    }

    #[test]
    fn test_dependency_set_compares_by_value() {
        let a = DependencySet::new().with(json!({"tag": "street", "page": 2}));
        let b = DependencySet::new().with(json!({"tag": "street", "page": 2}));
        let c = DependencySet::new().with(json!({"tag": "street", "page": 3}));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
