//! Community plugin — registers with the PresetHub slot engine.

use std::sync::Arc;

use tracing::info;

use presethub_plugin::prelude::{Plugin, PluginInfo, Slot, SlotRegistry, names};

use crate::fragments::{FooterLink, MenuEntry, SpotlightCard};

/// Community features plugin for PresetHub.
#[derive(Debug, Default)]
pub struct CommunityPlugin;

impl CommunityPlugin {
    /// Create the plugin.
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for CommunityPlugin {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            id: "community".to_string(),
            name: "Community".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Community menu entry, spotlight card, and footer links".to_string(),
            author: "PresetHub Team".to_string(),
            priority: 10,
        }
    }

    fn register(&self, slots: &Arc<SlotRegistry>) {
        Slot::new(Arc::clone(slots), names::NAVBAR_MENU).plug_with_priority(
            Arc::new(MenuEntry {
                label: "Community".to_string(),
                href: "/community".to_string(),
            }),
            10,
        );

        Slot::new(Arc::clone(slots), names::HOME_SHOWCASE).plug_with_priority(
            Arc::new(SpotlightCard {
                title: "Community spotlight".to_string(),
                teaser: "This month's most-loved recipes".to_string(),
            }),
            5,
        );

        let footer = Slot::new(Arc::clone(slots), names::FOOTER_LINKS);
        footer.plug_with_priority(
            Arc::new(FooterLink {
                label: "Guidelines".to_string(),
                href: "/community/guidelines".to_string(),
            }),
            10,
        );
        footer.plug_with_priority(
            Arc::new(FooterLink {
                label: "Discussions".to_string(),
                href: "/community/discussions".to_string(),
            }),
            20,
        );

        info!("Community contributions registered");
    }
}
