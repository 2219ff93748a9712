//! In-memory film simulation repository.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use presethub_core::error::AppError;
use presethub_core::result::AppResult;
use presethub_core::types::{ContentFilter, FilmSimId};
use presethub_entity::FilmSim;

use crate::traits::FilmSimRepository;

/// Film simulation store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryFilmSimRepository {
    items: DashMap<FilmSimId, FilmSim>,
}

impl InMemoryFilmSimRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn matches(film_sim: &FilmSim, filter: &ContentFilter) -> bool {
        if let Some(search) = &filter.search {
            let needle = search.to_lowercase();
            if !film_sim.name.to_lowercase().contains(&needle)
                && !film_sim.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        // A film-sim filter selects the simulation itself by slug. Tag
        // filters never match: simulations are not tagged.
        if let Some(slug) = &filter.film_sim {
            if &film_sim.slug != slug {
                return false;
            }
        }
        if filter.tag.is_some() {
            return false;
        }
        true
    }
}

#[async_trait]
impl FilmSimRepository for InMemoryFilmSimRepository {
    async fn find_all(&self, filter: Option<&ContentFilter>) -> AppResult<Vec<FilmSim>> {
        let mut sims: Vec<FilmSim> = self
            .items
            .iter()
            .filter(|entry| filter.is_none_or(|f| Self::matches(entry.value(), f)))
            .map(|entry| entry.value().clone())
            .collect();

        sims.sort_by(|a, b| a.name.cmp(&b.name));

        debug!(count = sims.len(), filtered = filter.is_some(), "Listed film simulations");
        Ok(sims)
    }

    async fn find_by_id(&self, id: FilmSimId) -> AppResult<Option<FilmSim>> {
        Ok(self.items.get(&id).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, film_sim: FilmSim) -> AppResult<FilmSim> {
        if self
            .items
            .iter()
            .any(|entry| entry.value().slug == film_sim.slug)
        {
            return Err(AppError::conflict(format!(
                "Film simulation slug '{}' already exists",
                film_sim.slug
            )));
        }
        self.items.insert(film_sim.id, film_sim.clone());
        Ok(film_sim)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.items.len() as u64)
    }
}
