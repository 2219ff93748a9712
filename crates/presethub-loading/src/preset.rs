//! Preset-only loading strategy.

use std::sync::Arc;

use async_trait::async_trait;

use presethub_core::result::AppResult;
use presethub_core::types::ContentFilter;
use presethub_entity::ContentItem;
use presethub_repository::PresetRepository;

use crate::strategy::{ContentLoadingStrategy, StrategyName};

/// Loads presets only.
#[derive(Debug)]
pub struct PresetLoadingStrategy {
    presets: Arc<dyn PresetRepository>,
}

impl PresetLoadingStrategy {
    /// Creates a strategy over the given preset repository.
    pub fn new(presets: Arc<dyn PresetRepository>) -> Self {
        Self { presets }
    }
}

#[async_trait]
impl ContentLoadingStrategy for PresetLoadingStrategy {
    async fn load_content(&self, filter: Option<&ContentFilter>) -> AppResult<Vec<ContentItem>> {
        let presets = self.presets.find_all(filter).await?;
        Ok(presets.into_iter().map(ContentItem::Preset).collect())
    }

    fn strategy_name(&self) -> StrategyName {
        StrategyName::Preset
    }
}
