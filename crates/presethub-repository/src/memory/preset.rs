//! In-memory preset repository.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use presethub_core::error::AppError;
use presethub_core::result::AppResult;
use presethub_core::types::{ContentFilter, PresetId};
use presethub_entity::Preset;

use crate::traits::PresetRepository;

/// Preset store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryPresetRepository {
    items: DashMap<PresetId, Preset>,
}

impl InMemoryPresetRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn matches(preset: &Preset, filter: &ContentFilter) -> bool {
        if let Some(search) = &filter.search {
            let needle = search.to_lowercase();
            if !preset.name.to_lowercase().contains(&needle)
                && !preset.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some(tag) = &filter.tag {
            if !preset.has_tag(tag) {
                return false;
            }
        }
        if let Some(film_sim) = &filter.film_sim {
            if &preset.film_sim != film_sim {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl PresetRepository for InMemoryPresetRepository {
    async fn find_all(&self, filter: Option<&ContentFilter>) -> AppResult<Vec<Preset>> {
        let mut presets: Vec<Preset> = self
            .items
            .iter()
            .filter(|entry| filter.is_none_or(|f| Self::matches(entry.value(), f)))
            .map(|entry| entry.value().clone())
            .collect();

        // Newest first, id as a tie-break so repeated reads are stable.
        presets.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
        });

        debug!(count = presets.len(), filtered = filter.is_some(), "Listed presets");
        Ok(presets)
    }

    async fn find_by_id(&self, id: PresetId) -> AppResult<Option<Preset>> {
        Ok(self.items.get(&id).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, preset: Preset) -> AppResult<Preset> {
        if self.items.iter().any(|entry| entry.value().slug == preset.slug) {
            return Err(AppError::conflict(format!(
                "Preset slug '{}' already exists",
                preset.slug
            )));
        }
        self.items.insert(preset.id, preset.clone());
        Ok(preset)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.items.len() as u64)
    }
}
