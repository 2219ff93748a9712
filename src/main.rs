//! PresetHub — film-simulation recipe platform.
//!
//! Composition root that wires configuration, repositories, the slot
//! engine, compiled-in plugins, and the content loading strategies, then
//! renders the platform's pages once.

mod pages;

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use presethub_core::config::AppConfig;
use presethub_core::error::AppError;
use presethub_loading::{
    CombinedLoadingStrategy, ContentLoadingStrategy, FilmSimLoadingStrategy, PresetLoadingStrategy,
    StrategyContext, StrategyName,
};
use presethub_plugin::{Plugin, PluginManager, SlotRegistry};
use presethub_repository::seed;
use presethub_repository::{
    FilmSimRepository, InMemoryFilmSimRepository, InMemoryPresetRepository, PresetRepository,
};

use plugin_community::CommunityPlugin;
use plugin_editor_picks::EditorPicksPlugin;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("PresetHub error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("PRESETHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(false)
                .init();
        }
    }
}

/// Main run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting PresetHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Repositories + sample catalogue ──────────────────
    let preset_repo = Arc::new(InMemoryPresetRepository::new());
    let film_sim_repo = Arc::new(InMemoryFilmSimRepository::new());
    seed::load_sample_content(preset_repo.as_ref(), film_sim_repo.as_ref()).await?;

    let presets: Arc<dyn PresetRepository> = preset_repo;
    let film_sims: Arc<dyn FilmSimRepository> = film_sim_repo;

    // ── Step 2: Slot registry + plugins ──────────────────────────
    let slots = Arc::new(SlotRegistry::new());
    let plugin_manager = PluginManager::new(Arc::clone(&slots));

    if config.plugins.auto_load {
        let mut plugins: Vec<Arc<dyn Plugin>> = Vec::new();
        if config.plugins.is_enabled("community") {
            plugins.push(Arc::new(CommunityPlugin::new()));
        }
        if config.plugins.is_enabled("editor-picks") {
            plugins.push(Arc::new(EditorPicksPlugin::new()));
        }
        plugin_manager.load_all(plugins)?;
    } else {
        tracing::info!("Plugin auto-load disabled");
    }
    tracing::info!(
        plugins = plugin_manager.plugins().len(),
        slots = slots.slot_names().len(),
        "Plugin system ready"
    );

    // ── Step 3: Content loading strategy ─────────────────────────
    let default_strategy: StrategyName = config.content.default_strategy.parse()?;
    let strategy = build_strategy(default_strategy, &presets, &film_sims);
    let context = StrategyContext::new(strategy);
    tracing::info!(strategy = %default_strategy, "Content loading strategy installed");

    // ── Step 4: Render pages ─────────────────────────────────────
    pages::render_site(&slots, &context, &presets, config.content.max_items).await?;

    tracing::info!("PresetHub run complete");
    Ok(())
}

/// Build the strategy variant named in the configuration.
fn build_strategy(
    name: StrategyName,
    presets: &Arc<dyn PresetRepository>,
    film_sims: &Arc<dyn FilmSimRepository>,
) -> Arc<dyn ContentLoadingStrategy> {
    match name {
        StrategyName::Preset => Arc::new(PresetLoadingStrategy::new(Arc::clone(presets))),
        StrategyName::FilmSim => Arc::new(FilmSimLoadingStrategy::new(Arc::clone(film_sims))),
        StrategyName::Combined => Arc::new(CombinedLoadingStrategy::new(
            Arc::clone(presets),
            Arc::clone(film_sims),
        )),
    }
}
