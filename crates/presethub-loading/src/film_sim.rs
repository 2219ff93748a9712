//! Film-simulation-only loading strategy.

use std::sync::Arc;

use async_trait::async_trait;

use presethub_core::result::AppResult;
use presethub_core::types::ContentFilter;
use presethub_entity::ContentItem;
use presethub_repository::FilmSimRepository;

use crate::strategy::{ContentLoadingStrategy, StrategyName};

/// Loads film simulations only.
#[derive(Debug)]
pub struct FilmSimLoadingStrategy {
    film_sims: Arc<dyn FilmSimRepository>,
}

impl FilmSimLoadingStrategy {
    /// Creates a strategy over the given film simulation repository.
    pub fn new(film_sims: Arc<dyn FilmSimRepository>) -> Self {
        Self { film_sims }
    }
}

#[async_trait]
impl ContentLoadingStrategy for FilmSimLoadingStrategy {
    async fn load_content(&self, filter: Option<&ContentFilter>) -> AppResult<Vec<ContentItem>> {
        let film_sims = self.film_sims.find_all(filter).await?;
        Ok(film_sims.into_iter().map(ContentItem::FilmSim).collect())
    }

    fn strategy_name(&self) -> StrategyName {
        StrategyName::FilmSim
    }
}
