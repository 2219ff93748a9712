//! The renderable-unit contract for slot contributions.

/// An opaque renderable unit contributed to a slot.
///
/// The registry never inspects or mutates content; only page-level
/// consumers call [`render`](SlotContent::render). Contributing plugins
/// own their content types entirely.
pub trait SlotContent: Send + Sync + std::fmt::Debug {
    /// Renders this unit to its display form.
    fn render(&self) -> String;
}
