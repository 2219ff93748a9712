//! The slot subsystem: named extension points accepting ordered
//! contributions from independently loaded plugins.

pub mod content;
pub mod names;
pub mod registry;
pub mod scoped;
pub mod slot;

pub use content::SlotContent;
pub use registry::{Contribution, ContributionHandle, ContributionScope, SlotName, SlotRegistry};
pub use scoped::{DependencySet, ScopedPlug};
pub use slot::Slot;
