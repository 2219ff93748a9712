//! The heterogeneous content collection element.
//!
//! Loading strategies return a flat sequence of [`ContentItem`]s so the
//! same downstream rendering code works whether a page asked for presets,
//! film simulations, or both.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::film_sim::FilmSim;
use crate::preset::Preset;

/// One element of a loaded content collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// A film-simulation recipe.
    Preset(Preset),
    /// A film simulation.
    FilmSim(FilmSim),
}

impl ContentItem {
    /// The item's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Preset(p) => &p.name,
            Self::FilmSim(f) => &f.name,
        }
    }

    /// The item's URL-safe slug.
    pub fn slug(&self) -> &str {
        match self {
            Self::Preset(p) => &p.slug,
            Self::FilmSim(f) => &f.slug,
        }
    }

    /// When the item was published or catalogued.
    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Preset(p) => p.created_at,
            Self::FilmSim(f) => f.created_at,
        }
    }

    /// Whether this item is a preset.
    pub fn is_preset(&self) -> bool {
        matches!(self, Self::Preset(_))
    }
}
