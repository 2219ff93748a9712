//! Prelude for convenient imports in plugin crates.

pub use crate::manager::PluginManager;
pub use crate::registry::{Plugin, PluginInfo};
pub use crate::slots::content::SlotContent;
pub use crate::slots::names;
pub use crate::slots::registry::{
    Contribution, ContributionHandle, DEFAULT_PRIORITY, SlotName, SlotRegistry,
};
pub use crate::slots::scoped::{DependencySet, ScopedPlug};
pub use crate::slots::slot::Slot;
