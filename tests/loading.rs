//! Content loading strategies over the seeded in-memory repositories.

use std::sync::Arc;

use async_trait::async_trait;

use presethub_core::error::{AppError, ErrorKind};
use presethub_core::result::AppResult;
use presethub_core::types::{ContentFilter, FilmSimId};
use presethub_entity::FilmSim;
use presethub_loading::{
    CombinedLoadingStrategy, FilmSimLoadingStrategy, PresetLoadingStrategy, StrategyContext,
    StrategyName,
};
use presethub_plugin::slots::names;
use presethub_plugin::{Slot, SlotContent, SlotRegistry};
use presethub_repository::seed::load_sample_content;
use presethub_repository::{
    FilmSimRepository, InMemoryFilmSimRepository, InMemoryPresetRepository, PresetRepository,
};

async fn seeded_repos() -> (Arc<dyn PresetRepository>, Arc<dyn FilmSimRepository>) {
    let presets = Arc::new(InMemoryPresetRepository::new());
    let film_sims = Arc::new(InMemoryFilmSimRepository::new());
    load_sample_content(presets.as_ref(), film_sims.as_ref())
        .await
        .expect("seed loads");
    (presets, film_sims)
}

#[tokio::test]
async fn combined_concatenates_presets_then_film_sims() {
    let (presets, film_sims) = seeded_repos().await;
    let preset_count = presets.count().await.unwrap() as usize;
    let sim_count = film_sims.count().await.unwrap() as usize;

    let combined =
        CombinedLoadingStrategy::new(Arc::clone(&presets), Arc::clone(&film_sims));
    let context = StrategyContext::new(Arc::new(combined));

    let items = context.load_content(None).await.unwrap();
    assert_eq!(items.len(), preset_count + sim_count);
    assert!(items[..preset_count].iter().all(|i| i.is_preset()));
    assert!(items[preset_count..].iter().all(|i| !i.is_preset()));
}

#[tokio::test]
async fn switching_strategies_changes_the_collection() {
    let (presets, film_sims) = seeded_repos().await;

    let context = StrategyContext::new(Arc::new(PresetLoadingStrategy::new(Arc::clone(&presets))));
    assert_eq!(context.strategy_name().await, StrategyName::Preset);
    let only_presets = context.load_content(None).await.unwrap();
    assert!(only_presets.iter().all(|i| i.is_preset()));

    context
        .set_strategy(Arc::new(FilmSimLoadingStrategy::new(Arc::clone(&film_sims))))
        .await;
    assert_eq!(context.strategy_name().await, StrategyName::FilmSim);
    let only_sims = context.load_content(None).await.unwrap();
    assert!(!only_sims.is_empty());
    assert!(only_sims.iter().all(|i| !i.is_preset()));
}

#[tokio::test]
async fn filters_pass_through_to_both_repositories() {
    let (presets, film_sims) = seeded_repos().await;
    let context = StrategyContext::new(Arc::new(CombinedLoadingStrategy::new(
        Arc::clone(&presets),
        Arc::clone(&film_sims),
    )));

    // Tag filters match presets only; simulations are untagged.
    let street = ContentFilter::new().tag("street");
    let items = context.load_content(Some(&street)).await.unwrap();
    assert!(!items.is_empty());
    assert!(items.iter().all(|i| i.is_preset()));

    // A film-sim filter narrows presets by base and selects the
    // simulation itself.
    let chrome = ContentFilter::new().film_sim("classic-chrome");
    let items = context.load_content(Some(&chrome)).await.unwrap();
    let sims: Vec<&str> = items
        .iter()
        .filter(|i| !i.is_preset())
        .map(|i| i.slug())
        .collect();
    assert_eq!(sims, vec!["classic-chrome"]);
    assert!(items.iter().filter(|i| i.is_preset()).count() >= 2);
}

/// Film simulation repository whose fetch always fails.
#[derive(Debug)]
struct BrokenSims;

#[async_trait]
impl FilmSimRepository for BrokenSims {
    async fn find_all(&self, _filter: Option<&ContentFilter>) -> AppResult<Vec<FilmSim>> {
        Err(AppError::repository("film sim store unavailable"))
    }

    async fn find_by_id(&self, _id: FilmSimId) -> AppResult<Option<FilmSim>> {
        Err(AppError::repository("film sim store unavailable"))
    }

    async fn insert(&self, _film_sim: FilmSim) -> AppResult<FilmSim> {
        Err(AppError::repository("film sim store unavailable"))
    }

    async fn count(&self) -> AppResult<u64> {
        Err(AppError::repository("film sim store unavailable"))
    }
}

#[derive(Debug)]
struct Card(&'static str);

impl SlotContent for Card {
    fn render(&self) -> String {
        self.0.to_string()
    }
}

#[tokio::test]
async fn failed_load_leaves_slot_state_untouched() {
    let (presets, _film_sims) = seeded_repos().await;

    let slots = Arc::new(SlotRegistry::new());
    let showcase = Slot::new(Arc::clone(&slots), names::HOME_SHOWCASE);
    showcase.plug(Arc::new(Card("resident card")));

    let context = StrategyContext::new(Arc::new(CombinedLoadingStrategy::new(
        Arc::clone(&presets),
        Arc::new(BrokenSims),
    )));

    let err = context.load_content(None).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Repository);

    // No partial collection reached anyone, and unrelated slot state is
    // intact.
    let rendered: Vec<String> = showcase.render().iter().map(|c| c.render()).collect();
    assert_eq!(rendered, vec!["resident card"]);
}
