//! Slot registry — the single source of truth for all slot contributions.
//!
//! Plugins and page components converge on one table keyed by slot name.
//! Within a slot, contributions are kept sorted by `(priority,
//! registration order)`; the registration order comes from a single
//! counter shared across all slots, so cross-slot relative order is also
//! observable and reproducible.
//!
//! All methods are synchronous: mutations are pure in-memory operations,
//! and scoped cleanup must be able to run from `Drop`.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tracing::debug;

use super::content::SlotContent;

/// Priority assigned when a caller does not specify one. Static and
/// scoped contributions share this constant so they interleave
/// predictably.
pub const DEFAULT_PRIORITY: i32 = 0;

/// Name of a slot.
///
/// Slots are created lazily on first reference and live for the process
/// lifetime; every registration call for the same name targets the same
/// underlying list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotName(String);

impl SlotName {
    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SlotName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for SlotName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a contribution is permanent or tied to an owner's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributionScope {
    /// Registered once at load time, never removed.
    Static,
    /// Tied to a calling component's active lifetime and dependency set.
    Scoped,
}

impl ContributionScope {
    /// The scope as a string tag, for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Scoped => "scoped",
        }
    }
}

/// A contribution offered to a slot: opaque content plus ordering data.
#[derive(Debug, Clone)]
pub struct Contribution {
    /// The opaque renderable unit, owned by the contributing plugin.
    pub content: Arc<dyn SlotContent>,
    /// Lower values render earlier.
    pub priority: i32,
    /// Whether the contribution is permanent or lifecycle-scoped.
    pub scope: ContributionScope,
}

impl Contribution {
    /// Create a static contribution with the default priority.
    pub fn new(content: Arc<dyn SlotContent>) -> Self {
        Self {
            content,
            priority: DEFAULT_PRIORITY,
            scope: ContributionScope::Static,
        }
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Mark the contribution as lifecycle-scoped.
    pub fn scoped(mut self) -> Self {
        self.scope = ContributionScope::Scoped;
        self
    }
}

/// Handle identifying one registered contribution, usable for removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionHandle {
    slot: SlotName,
    seq: u64,
}

impl ContributionHandle {
    /// The slot the contribution was registered into.
    pub fn slot(&self) -> &SlotName {
        &self.slot
    }

    /// The global registration sequence number.
    pub fn sequence(&self) -> u64 {
        self.seq
    }
}

/// Entry in the slot registry.
#[derive(Debug)]
struct SlotEntry {
    /// The contributed content.
    content: Arc<dyn SlotContent>,
    /// Priority (lower = rendered earlier).
    priority: i32,
    /// Global registration order, tie-break only.
    seq: u64,
    /// Scope the contribution was registered with.
    scope: ContributionScope,
}

/// Registry of contributions organized by slot name.
#[derive(Debug, Default)]
pub struct SlotRegistry {
    /// Slot name → sorted list of contributions.
    slots: DashMap<SlotName, Vec<SlotEntry>>,
    /// Global registration counter, shared across all slots.
    next_seq: AtomicU64,
}

impl SlotRegistry {
    /// Creates a new empty slot registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a contribution into a slot.
    ///
    /// Assigns the next global registration sequence number and returns a
    /// handle usable for removal. Always succeeds.
    pub fn register(&self, slot: &SlotName, contribution: Contribution) -> ContributionHandle {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        let priority = contribution.priority;
        let scope = contribution.scope;

        let mut entries = self.slots.entry(slot.clone()).or_default();
        entries.push(SlotEntry {
            content: contribution.content,
            priority,
            seq,
            scope,
        });
        // Sorted on insert so every read observes the ordering invariant.
        entries.sort_by_key(|e| (e.priority, e.seq));

        debug!(
            slot = %slot,
            priority,
            seq,
            scope = scope.as_str(),
            "Contribution registered"
        );

        ContributionHandle {
            slot: slot.clone(),
            seq,
        }
    }

    /// Removes a previously registered contribution.
    ///
    /// No-op (not an error) if the contribution was already removed, so
    /// cleanup may run repeatedly.
    pub fn unregister(&self, handle: &ContributionHandle) {
        if let Some(mut entries) = self.slots.get_mut(&handle.slot) {
            if let Some(pos) = entries.iter().position(|e| e.seq == handle.seq) {
                let entry = entries.remove(pos);
                debug!(
                    slot = %handle.slot,
                    seq = handle.seq,
                    scope = entry.scope.as_str(),
                    "Contribution unregistered"
                );
            }
        }
    }

    /// Returns the slot's contents sorted by `(priority, registration
    /// order)`.
    ///
    /// An unpopulated slot yields an empty sequence, never an error. The
    /// returned sequence is a copy; the internal list is never exposed.
    pub fn list(&self, slot: &SlotName) -> Vec<Arc<dyn SlotContent>> {
        self.slots
            .get(slot)
            .map(|entries| entries.iter().map(|e| e.content.clone()).collect())
            .unwrap_or_default()
    }

    /// Returns whether the slot currently has any contributions.
    pub fn has_contributions(&self, slot: &SlotName) -> bool {
        self.slots
            .get(slot)
            .map(|entries| !entries.is_empty())
            .unwrap_or(false)
    }

    /// Returns the number of contributions currently in the slot.
    pub fn count(&self, slot: &SlotName) -> usize {
        self.slots.get(slot).map(|entries| entries.len()).unwrap_or(0)
    }

    /// Returns the names of all slots referenced so far.
    pub fn slot_names(&self) -> Vec<SlotName> {
        self.slots.iter().map(|entry| entry.key().clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Label(&'static str);

    impl SlotContent for Label {
        fn render(&self) -> String {
            self.0.to_string()
        }
    }

    fn label(text: &'static str) -> Arc<dyn SlotContent> {
        Arc::new(Label(text))
    }

    fn rendered(registry: &SlotRegistry, slot: &SlotName) -> Vec<String> {
        registry.list(slot).iter().map(|c| c.render()).collect()
    }

    #[test]
    fn test_empty_slot_lists_empty() {
        let registry = SlotRegistry::new();
        assert!(registry.list(&SlotName::from("nowhere")).is_empty());
        assert_eq!(registry.count(&SlotName::from("nowhere")), 0);
    }

    #[test]
    fn test_priority_orders_contributions() {
        let registry = SlotRegistry::new();
        let slot = SlotName::from("home.showcase");

        registry.register(&slot, Contribution::new(label("a")).with_priority(5));
        registry.register(&slot, Contribution::new(label("b")).with_priority(1));
        assert_eq!(rendered(&registry, &slot), vec!["b", "a"]);

        // Equal priority falls back to registration order.
        registry.register(&slot, Contribution::new(label("c")).with_priority(1));
        assert_eq!(rendered(&registry, &slot), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_list_is_stable_across_repeated_reads() {
        let registry = SlotRegistry::new();
        let slot = SlotName::from("navbar.menu");
        for (text, priority) in [("x", 3), ("y", -1), ("z", 3)] {
            registry.register(&slot, Contribution::new(label(text)).with_priority(priority));
        }

        let first = rendered(&registry, &slot);
        assert_eq!(first, vec!["y", "x", "z"]);
        for _ in 0..3 {
            assert_eq!(rendered(&registry, &slot), first);
        }
    }

    #[test]
    fn test_sequence_is_global_across_slots() {
        let registry = SlotRegistry::new();
        let a = registry.register(&SlotName::from("slot.a"), Contribution::new(label("a")));
        let b = registry.register(&SlotName::from("slot.b"), Contribution::new(label("b")));
        let c = registry.register(&SlotName::from("slot.a"), Contribution::new(label("c")));

        assert!(a.sequence() < b.sequence());
        assert!(b.sequence() < c.sequence());
    }

    #[test]
    fn test_unregister_removes_and_is_idempotent() {
        let registry = SlotRegistry::new();
        let slot = SlotName::from("footer.links");
        registry.register(&slot, Contribution::new(label("keep")));
        let removed = registry.register(&slot, Contribution::new(label("drop")));

        registry.unregister(&removed);
        assert_eq!(rendered(&registry, &slot), vec!["keep"]);

        // Removing again is a no-op, as is removing from an untouched slot.
        registry.unregister(&removed);
        registry.unregister(&ContributionHandle {
            slot: SlotName::from("untouched"),
            seq: 999,
        });
        assert_eq!(rendered(&registry, &slot), vec!["keep"]);
    }

    #[test]
    fn test_default_priority_interleaves_with_explicit_zero() {
        let registry = SlotRegistry::new();
        let slot = SlotName::from("card.badges");
        registry.register(&slot, Contribution::new(label("first")));
        registry.register(&slot, Contribution::new(label("second")).with_priority(0));
        registry.register(&slot, Contribution::new(label("early")).with_priority(-10));

        assert_eq!(rendered(&registry, &slot), vec!["early", "first", "second"]);
    }
}
