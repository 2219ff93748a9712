//! Film simulation entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use presethub_core::types::FilmSimId;

/// A film simulation: the in-camera rendering profile recipes build on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmSim {
    /// Unique film simulation identifier.
    pub id: FilmSimId,
    /// Display name (e.g. `"Classic Chrome"`).
    pub name: String,
    /// URL-safe slug (e.g. `"classic-chrome"`).
    pub slug: String,
    /// Description of the rendering character.
    pub description: String,
    /// Short characterization of tone and color (e.g. `"muted color,
    /// hard tonality"`).
    pub character: String,
    /// Camera generation the simulation first shipped with, if known.
    pub introduced_in: Option<String>,
    /// When the entry was added to the catalogue.
    pub created_at: DateTime<Utc>,
    /// When the entry was last updated.
    pub updated_at: DateTime<Utc>,
}

impl FilmSim {
    /// Create a new film simulation from creation data, assigning identity
    /// and timestamps.
    pub fn new(create: CreateFilmSim) -> Self {
        let now = Utc::now();
        Self {
            id: FilmSimId::new(),
            name: create.name,
            slug: create.slug,
            description: create.description,
            character: create.character,
            introduced_in: create.introduced_in,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Data required to add a film simulation to the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFilmSim {
    /// Display name.
    pub name: String,
    /// URL-safe slug.
    pub slug: String,
    /// Description of the rendering character.
    pub description: String,
    /// Short tone/color characterization.
    pub character: String,
    /// Camera generation, if known.
    pub introduced_in: Option<String>,
}
