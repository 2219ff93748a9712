//! Repository contracts consumed by the loading strategies.
//!
//! Any object exposing `find_all(filter)` satisfies the content-loading
//! layer, independent of storage technology.

use async_trait::async_trait;

use presethub_core::result::AppResult;
use presethub_core::types::{ContentFilter, FilmSimId, PresetId};
use presethub_entity::{FilmSim, Preset};

/// Repository of published presets.
#[async_trait]
pub trait PresetRepository: Send + Sync + std::fmt::Debug {
    /// List presets matching the filter, newest first. `None` matches
    /// everything.
    async fn find_all(&self, filter: Option<&ContentFilter>) -> AppResult<Vec<Preset>>;

    /// Find a preset by primary key.
    async fn find_by_id(&self, id: PresetId) -> AppResult<Option<Preset>>;

    /// Store a new preset and return it.
    async fn insert(&self, preset: Preset) -> AppResult<Preset>;

    /// Count stored presets.
    async fn count(&self) -> AppResult<u64>;
}

/// Repository of catalogued film simulations.
#[async_trait]
pub trait FilmSimRepository: Send + Sync + std::fmt::Debug {
    /// List film simulations matching the filter, by name. `None` matches
    /// everything.
    async fn find_all(&self, filter: Option<&ContentFilter>) -> AppResult<Vec<FilmSim>>;

    /// Find a film simulation by primary key.
    async fn find_by_id(&self, id: FilmSimId) -> AppResult<Option<FilmSim>>;

    /// Store a new film simulation and return it.
    async fn insert(&self, film_sim: FilmSim) -> AppResult<FilmSim>;

    /// Count catalogued film simulations.
    async fn count(&self) -> AppResult<u64>;
}
