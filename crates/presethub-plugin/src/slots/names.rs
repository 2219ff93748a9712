//! Well-known slot names exposed by the platform's pages.
//!
//! Slots are created lazily, so these are plain name constants rather
//! than a closed enum: a plugin may also define private slots of its own.

/// Navigation bar menu entries.
pub const NAVBAR_MENU: &str = "navbar.menu";

/// Featured content cards on the home page.
pub const HOME_SHOWCASE: &str = "home.showcase";

/// Sidebar panels on the preset detail page.
pub const PRESET_DETAIL_SIDEBAR: &str = "preset_detail.sidebar";

/// Badges rendered on content cards.
pub const CARD_BADGES: &str = "card.badges";

/// Links in the page footer.
pub const FOOTER_LINKS: &str = "footer.links";

/// Breadcrumb trail above gallery listings.
pub const BREADCRUMB_TRAIL: &str = "page.breadcrumbs";
