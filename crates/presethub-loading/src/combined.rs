//! Combined loading strategy: presets and film simulations together.

use std::sync::Arc;

use async_trait::async_trait;

use presethub_core::result::AppResult;
use presethub_core::types::ContentFilter;
use presethub_entity::ContentItem;
use presethub_repository::{FilmSimRepository, PresetRepository};

use crate::strategy::{ContentLoadingStrategy, StrategyName};

/// Loads presets and film simulations in one flat collection.
///
/// The two fetches are independent, so they are issued concurrently and
/// joined; the output always lists presets before film simulations
/// regardless of which fetch completes first. If either fetch fails the
/// whole load fails with that error; no partial collection is returned.
#[derive(Debug)]
pub struct CombinedLoadingStrategy {
    presets: Arc<dyn PresetRepository>,
    film_sims: Arc<dyn FilmSimRepository>,
}

impl CombinedLoadingStrategy {
    /// Creates a strategy over both repositories.
    pub fn new(presets: Arc<dyn PresetRepository>, film_sims: Arc<dyn FilmSimRepository>) -> Self {
        Self { presets, film_sims }
    }
}

#[async_trait]
impl ContentLoadingStrategy for CombinedLoadingStrategy {
    async fn load_content(&self, filter: Option<&ContentFilter>) -> AppResult<Vec<ContentItem>> {
        let (presets, film_sims) = tokio::try_join!(
            self.presets.find_all(filter),
            self.film_sims.find_all(filter),
        )?;

        let mut items: Vec<ContentItem> = presets.into_iter().map(ContentItem::Preset).collect();
        items.extend(film_sims.into_iter().map(ContentItem::FilmSim));
        Ok(items)
    }

    fn strategy_name(&self) -> StrategyName {
        StrategyName::Combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use presethub_core::error::AppError;
    use presethub_core::types::{FilmSimId, PresetId, UserId};
    use presethub_entity::film_sim::CreateFilmSim;
    use presethub_entity::preset::{CreatePreset, RecipeSettings};
    use presethub_entity::{FilmSim, Preset};

    fn make_preset(name: &str) -> Preset {
        Preset::new(CreatePreset {
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            description: String::new(),
            film_sim: "provia".to_string(),
            settings: RecipeSettings::default(),
            tags: Vec::new(),
            author_id: UserId::new(),
        })
    }

    fn make_sim(name: &str) -> FilmSim {
        FilmSim::new(CreateFilmSim {
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            description: String::new(),
            character: String::new(),
            introduced_in: None,
        })
    }

    /// Preset repository that resolves only after a delay.
    #[derive(Debug)]
    struct SlowPresets {
        items: Vec<Preset>,
        delay: Duration,
    }

    #[async_trait]
    impl PresetRepository for SlowPresets {
        async fn find_all(&self, _filter: Option<&ContentFilter>) -> AppResult<Vec<Preset>> {
            tokio::time::sleep(self.delay).await;
            Ok(self.items.clone())
        }

        async fn find_by_id(&self, _id: PresetId) -> AppResult<Option<Preset>> {
            Ok(None)
        }

        async fn insert(&self, preset: Preset) -> AppResult<Preset> {
            Ok(preset)
        }

        async fn count(&self) -> AppResult<u64> {
            Ok(self.items.len() as u64)
        }
    }

    #[derive(Debug)]
    struct FixedSims {
        items: Vec<FilmSim>,
    }

    #[async_trait]
    impl FilmSimRepository for FixedSims {
        async fn find_all(&self, _filter: Option<&ContentFilter>) -> AppResult<Vec<FilmSim>> {
            Ok(self.items.clone())
        }

        async fn find_by_id(&self, _id: FilmSimId) -> AppResult<Option<FilmSim>> {
            Ok(None)
        }

        async fn insert(&self, film_sim: FilmSim) -> AppResult<FilmSim> {
            Ok(film_sim)
        }

        async fn count(&self) -> AppResult<u64> {
            Ok(self.items.len() as u64)
        }
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

    #[tokio::test(start_paused = true)]
    async fn test_presets_first_even_when_they_finish_last() {
        let strategy = CombinedLoadingStrategy::new(
            Arc::new(SlowPresets {
                items: vec![make_preset("Night Walk")],
                delay: Duration::from_millis(250),
            }),
            Arc::new(FixedSims {
                items: vec![make_sim("Provia"), make_sim("Velvia")],
            }),
        );

        let items = strategy.load_content(None).await.unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["Night Walk", "Provia", "Velvia"]);
        assert!(items[0].is_preset());
    }

    #[tokio::test]
    async fn test_either_failure_fails_the_whole_load() {
        let strategy = CombinedLoadingStrategy::new(
            Arc::new(SlowPresets {
                items: vec![make_preset("Night Walk")],
                delay: Duration::ZERO,
            }),
            Arc::new(BrokenSims),
        );

        let err = strategy.load_content(None).await.unwrap_err();
        assert_eq!(err.kind, presethub_core::error::ErrorKind::Repository);
    }

    #[tokio::test]
    async fn test_strategy_name() {
        let strategy = CombinedLoadingStrategy::new(
            Arc::new(SlowPresets {
                items: Vec::new(),
                delay: Duration::ZERO,
            }),
            Arc::new(FixedSims { items: Vec::new() }),
        );
        assert_eq!(strategy.strategy_name(), StrategyName::Combined);
        assert_eq!(strategy.strategy_name().as_str(), "combined");
    }
}
