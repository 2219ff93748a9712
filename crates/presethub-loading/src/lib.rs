//! # presethub-loading
//!
//! Pluggable content-loading strategies. A page selects how its
//! collection is fetched (presets only, film simulations only, or both)
//! without the rendering code knowing which variant is active.

pub mod combined;
pub mod context;
pub mod film_sim;
pub mod preset;
pub mod strategy;

pub use combined::CombinedLoadingStrategy;
pub use context::StrategyContext;
pub use film_sim::FilmSimLoadingStrategy;
pub use preset::PresetLoadingStrategy;
pub use strategy::{ContentLoadingStrategy, StrategyName};
