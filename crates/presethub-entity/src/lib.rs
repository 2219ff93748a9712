//! # presethub-entity
//!
//! Domain entity models for PresetHub: presets (film-simulation recipes),
//! film simulations, and the heterogeneous [`ContentItem`] collection
//! element the loading layer produces.

pub mod content;
pub mod film_sim;
pub mod preset;

pub use content::ContentItem;
pub use film_sim::FilmSim;
pub use preset::{Preset, RecipeSettings};
