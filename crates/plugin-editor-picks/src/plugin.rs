//! Editor-picks plugin — registers with the PresetHub slot engine.

use std::sync::Arc;

use tracing::info;

use presethub_plugin::prelude::{Plugin, PluginInfo, Slot, SlotRegistry, names};

use crate::fragments::{Badge, MenuEntry, ShowcaseCard, SidebarPanel};

/// Editorial curation plugin for PresetHub.
#[derive(Debug, Default)]
pub struct EditorPicksPlugin;

impl EditorPicksPlugin {
    /// Create the plugin.
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for EditorPicksPlugin {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            id: "editor-picks".to_string(),
            name: "Editor Picks".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Editorially curated showcase cards, badges, and menu entry".to_string(),
            author: "PresetHub Team".to_string(),
            priority: 20,
        }
    }

    fn register(&self, slots: &Arc<SlotRegistry>) {
        let showcase = Slot::new(Arc::clone(slots), names::HOME_SHOWCASE);
        showcase.plug_with_priority(
            Arc::new(ShowcaseCard {
                title: "Recipe of the week".to_string(),
                preset_slug: "kodak-gold-afternoon".to_string(),
                blurb: "Warm negative-film look for late light".to_string(),
            }),
            20,
        );
        showcase.plug_with_priority(
            Arc::new(ShowcaseCard {
                title: "Staff favourite".to_string(),
                preset_slug: "press-mono".to_string(),
                blurb: "High-contrast monochrome for street work".to_string(),
            }),
            30,
        );

        Slot::new(Arc::clone(slots), names::NAVBAR_MENU).plug_with_priority(
            Arc::new(MenuEntry {
                label: "Editor picks".to_string(),
                href: "/collections/editor-picks".to_string(),
            }),
            30,
        );

        Slot::new(Arc::clone(slots), names::CARD_BADGES).plug(Arc::new(Badge {
            label: "Editor's pick".to_string(),
        }));

        Slot::new(Arc::clone(slots), names::PRESET_DETAIL_SIDEBAR).plug_with_priority(
            Arc::new(SidebarPanel {
                heading: "More picks".to_string(),
                body: "Hand-picked recipes from the editorial desk".to_string(),
            }),
            10,
        );

        info!("Editor picks contributions registered");
    }
}
