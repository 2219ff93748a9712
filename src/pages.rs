//! Page components — the external consumers of slots and strategies.
//!
//! Pages obtain composed output from slots at render time and fetch
//! their collections through the active loading strategy. Rendering here
//! writes to the log; an HTTP front end would consume the same calls.

use std::sync::Arc;

use tracing::info;

use presethub_core::error::AppError;
use presethub_core::result::AppResult;
use presethub_core::types::ContentFilter;
use presethub_loading::StrategyContext;
use presethub_plugin::slots::names;
use presethub_plugin::{DependencySet, Slot, SlotContent, SlotRegistry};
use presethub_repository::PresetRepository;

/// Breadcrumb trail owned by the gallery page.
#[derive(Debug)]
struct Breadcrumb {
    trail: String,
}

impl SlotContent for Breadcrumb {
    fn render(&self) -> String {
        format!("[crumbs] {}", self.trail)
    }
}

/// Placeholder shown when no plugin populated a slot.
#[derive(Debug)]
struct EmptyNotice {
    message: &'static str,
}

impl SlotContent for EmptyNotice {
    fn render(&self) -> String {
        format!("[empty] {}", self.message)
    }
}

/// Render the whole site once.
pub async fn render_site(
    slots: &Arc<SlotRegistry>,
    context: &StrategyContext,
    presets: &Arc<dyn PresetRepository>,
    max_items: usize,
) -> AppResult<()> {
    render_home(slots, context, max_items).await?;
    render_gallery(slots, context).await?;
    render_preset_detail(slots, presets).await?;
    Ok(())
}

/// Home page: navbar and footer slots plus the strategy-loaded feed.
async fn render_home(
    slots: &Arc<SlotRegistry>,
    context: &StrategyContext,
    max_items: usize,
) -> AppResult<()> {
    info!("=== home ===");

    for entry in Slot::new(Arc::clone(slots), names::NAVBAR_MENU).render() {
        info!("  {}", entry.render());
    }

    let showcase = Slot::new(Arc::clone(slots), names::HOME_SHOWCASE);
    for card in showcase.render_or(Arc::new(EmptyNotice {
        message: "nothing featured this week",
    })) {
        info!("  {}", card.render());
    }

    let items = context.load_content(None).await?;
    info!(
        strategy = %context.strategy_name().await,
        items = items.len(),
        "Home feed loaded"
    );
    for item in items.iter().take(max_items) {
        info!("  [feed] {}", item.name());
    }

    for link in Slot::new(Arc::clone(slots), names::FOOTER_LINKS).render() {
        info!("  {}", link.render());
    }

    Ok(())
}

/// Gallery page: demonstrates a scoped contribution that tracks the
/// page's own filter.
async fn render_gallery(slots: &Arc<SlotRegistry>, context: &StrategyContext) -> AppResult<()> {
    info!("=== gallery ===");

    let breadcrumbs = Slot::new(Arc::clone(slots), names::BREADCRUMB_TRAIL);

    // Mount with the street filter active.
    let mut crumb = breadcrumbs.plug_scoped(
        Arc::new(Breadcrumb {
            trail: "home / gallery / street".to_string(),
        }),
        DependencySet::new().with("street"),
    );

    let street = ContentFilter::new().tag("street");
    let items = context.load_content(Some(&street)).await?;
    info!(tag = "street", items = items.len(), "Gallery loaded");
    for line in breadcrumbs.render() {
        info!("  {}", line.render());
    }

    // The visitor switches tags: the dependency set changes, so the old
    // crumb is replaced before the new one appears.
    crumb.update(
        Arc::new(Breadcrumb {
            trail: "home / gallery / portrait".to_string(),
        }),
        DependencySet::new().with("portrait"),
    );

    let portrait = ContentFilter::new().tag("portrait");
    let items = context.load_content(Some(&portrait)).await?;
    info!(tag = "portrait", items = items.len(), "Gallery reloaded");
    for line in breadcrumbs.render() {
        info!("  {}", line.render());
    }

    // Leaving the page releases the crumb.
    crumb.release();
    debug_assert!(breadcrumbs.is_empty());

    Ok(())
}

/// Preset detail page: sidebar and badge slots around one recipe.
async fn render_preset_detail(
    slots: &Arc<SlotRegistry>,
    presets: &Arc<dyn PresetRepository>,
) -> AppResult<()> {
    info!("=== preset detail ===");

    let preset = presets
        .find_all(None)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::not_found("No presets in the catalogue"))?;

    info!(
        "  {} on {} ({})",
        preset.name,
        preset.film_sim,
        preset.tags.join(", ")
    );

    for badge in Slot::new(Arc::clone(slots), names::CARD_BADGES).render() {
        info!("  {}", badge.render());
    }

    let sidebar = Slot::new(Arc::clone(slots), names::PRESET_DETAIL_SIDEBAR);
    for panel in sidebar.render_or(Arc::new(EmptyNotice {
        message: "no related panels",
    })) {
        info!("  {}", panel.render());
    }

    Ok(())
}
