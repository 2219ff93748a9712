//! Strategy context — holds the one active loading strategy.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use presethub_core::result::AppResult;
use presethub_core::types::ContentFilter;
use presethub_entity::ContentItem;

use crate::strategy::{ContentLoadingStrategy, StrategyName};

/// Owns the currently selected [`ContentLoadingStrategy`].
///
/// Replacement is atomic from the perspective of subsequent loads: a
/// `load_content` call snapshots the active strategy before awaiting, so
/// it always uses the strategy that was installed at the moment the call
/// was issued, never one swapped in mid-flight.
#[derive(Debug)]
pub struct StrategyContext {
    strategy: RwLock<Arc<dyn ContentLoadingStrategy>>,
}

impl StrategyContext {
    /// Creates a context with the given initial strategy.
    pub fn new(strategy: Arc<dyn ContentLoadingStrategy>) -> Self {
        Self {
            strategy: RwLock::new(strategy),
        }
    }

    /// Replaces the active strategy.
    pub async fn set_strategy(&self, strategy: Arc<dyn ContentLoadingStrategy>) {
        let mut active = self.strategy.write().await;
        info!(
            from = %active.strategy_name(),
            to = %strategy.strategy_name(),
            "Content loading strategy replaced"
        );
        *active = strategy;
    }

    /// Returns a snapshot of the active strategy.
    pub async fn strategy(&self) -> Arc<dyn ContentLoadingStrategy> {
        self.strategy.read().await.clone()
    }

    /// The tag of the strategy active at call time.
    pub async fn strategy_name(&self) -> StrategyName {
        self.strategy.read().await.strategy_name()
    }

    /// Loads content through the strategy active when this call was
    /// issued.
    pub async fn load_content(&self, filter: Option<&ContentFilter>) -> AppResult<Vec<ContentItem>> {
        let strategy = self.strategy().await;
        strategy.load_content(filter).await
    }
}
