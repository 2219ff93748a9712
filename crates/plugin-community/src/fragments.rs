//! Fragment types owned by the community plugin.

use presethub_plugin::prelude::SlotContent;

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

/// A spotlight card highlighting community activity.
#[derive(Debug)]
pub struct SpotlightCard {
    /// Card headline.
    pub title: String,
    /// One-line teaser.
    pub teaser: String,
}

impl SlotContent for SpotlightCard {
    fn render(&self) -> String {
        format!("[card] {} — {}", self.title, self.teaser)
    }
}

/// A link in the page footer.
#[derive(Debug)]
pub struct FooterLink {
    /// Visible label.
    pub label: String,
    /// Target route.
    pub href: String,
}

impl SlotContent for FooterLink {
    fn render(&self) -> String {
        format!("[footer] {} -> {}", self.label, self.href)
    }
}
