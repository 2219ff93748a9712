//! Fragment types owned by the editor-picks plugin.
//!
//! The slot engine treats these as opaque renderable units; only pages
//! call `render`.

use presethub_plugin::prelude::SlotContent;

/// A curated card on the home showcase.
#[derive(Debug)]
pub struct ShowcaseCard {
    /// Card headline.
    pub title: String,
    /// Slug of the featured preset.
    pub preset_slug: String,
    /// One-line editorial blurb.
    pub blurb: String,
}

impl SlotContent for ShowcaseCard {
    fn render(&self) -> String {
        format!("[card] {} ({}) — {}", self.title, self.preset_slug, self.blurb)
    }
}

/// A navigation menu entry.
#[derive(Debug)]
pub struct MenuEntry {
    /// Visible label.
    pub label: String,
    /// Target route.
    pub href: String,
}

impl SlotContent for MenuEntry {
    fn render(&self) -> String {
        format!("[menu] {} -> {}", self.label, self.href)
    }
}

/// A badge rendered on content cards.
#[derive(Debug)]
pub struct Badge {
    /// Badge text.
    pub label: String,
}

impl SlotContent for Badge {
    fn render(&self) -> String {
        format!("[badge] {}", self.label)
    }
}

/// A panel in the preset detail sidebar.
#[derive(Debug)]
pub struct SidebarPanel {
    /// Panel heading.
    pub heading: String,
    /// Panel body text.
    pub body: String,
}

impl SlotContent for SidebarPanel {
    fn render(&self) -> String {
        format!("[panel] {}: {}", self.heading, self.body)
    }
}
