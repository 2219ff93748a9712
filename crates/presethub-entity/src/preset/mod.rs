//! Preset entity: a shareable film-simulation recipe.

pub mod model;

pub use model::{CreatePreset, GrainEffect, Preset, RecipeSettings};
